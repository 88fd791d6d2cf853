//! Library API - staff account management for a library back office.
//!
//! People (staff accounts) are created, updated, deleted, fetched,
//! searched and listed through command and query services that sit
//! between the HTTP layer and a swappable repository.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Person model, validation rules and password hashing
//! - **services**: Person use cases
//! - **infra**: Database, migrations and the SeaORM repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared service response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{PasswordHasher, PersonRole, PersonView};
pub use errors::{AppError, AppResult};
pub use services::PersonServices;
