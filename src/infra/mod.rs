//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories backed by SeaORM

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{PersonRepository, PersonStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockPersonRepository;
