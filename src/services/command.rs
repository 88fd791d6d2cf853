//! Service entry points.
//!
//! Every person service exposes exactly one `execute` operation taking a
//! typed input and returning a `(status, body)` pair. Commands may mutate
//! the store; queries never do.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::types::ServiceResponse;

/// Mutating use case
#[async_trait]
pub trait Command<I, O>: Send + Sync {
    async fn execute(&self, input: I) -> AppResult<ServiceResponse<O>>;
}

/// Read-only use case
#[async_trait]
pub trait Query<I, O>: Send + Sync {
    async fn execute(&self, input: I) -> AppResult<ServiceResponse<O>>;
}
