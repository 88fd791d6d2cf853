//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion: `PersonRepository` for storage and
//! `PasswordHasher` for credentials.
//!
//! Every failure is raised before the store is mutated.

mod command;
pub mod container;
mod create_person;
mod delete_person;
mod person_queries;
mod update_person;

#[cfg(test)]
mod test_support;

pub use command::{Command, Query};
pub use container::PersonServices;
pub use create_person::CreatePerson;
pub use delete_person::DeletePerson;
pub use person_queries::{GetPerson, ListPeople, SearchPeople};
pub use update_person::UpdatePerson;
