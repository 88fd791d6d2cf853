//! Shared types used between services and the HTTP layer.

mod response;

pub use response::{ServiceResponse, ServiceStatus};
