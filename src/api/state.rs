//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::PersonServices;

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Person use cases
    pub people: PersonServices,
    /// Database handle for health checks (absent when services run over
    /// a non-SQL repository)
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire services over the SeaORM store and Argon2 hashing.
    pub fn from_database(database: Arc<Database>) -> Self {
        Self {
            people: PersonServices::from_connection(database.get_connection()),
            database: Some(database),
        }
    }

    /// Create state with manually injected services.
    pub fn new(people: PersonServices) -> Self {
        Self {
            people,
            database: None,
        }
    }
}
