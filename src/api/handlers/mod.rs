//! HTTP request handlers.

pub mod person_handler;

pub use person_handler::person_routes;
