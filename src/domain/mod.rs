//! Domain layer - Core business entities and logic
//!
//! People, their role whitelist, the field validator and the password
//! hashing seam. Nothing here touches the database or HTTP.

pub mod password;
pub mod person;
pub mod validation;

pub use password::{Argon2Hasher, PasswordHasher};
pub use person::{NewPerson, PersonInput, PersonRecord, PersonRole, PersonView, UpdatePersonCommand};
pub use validation::{validate_fields, validate_person};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
