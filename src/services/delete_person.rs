//! Delete person use case.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::PersonRepository;
use crate::types::ServiceResponse;

use super::Command;

pub struct DeletePerson {
    repo: Arc<dyn PersonRepository>,
}

impl DeletePerson {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Command<String, ()> for DeletePerson {
    async fn execute(&self, username: String) -> AppResult<ServiceResponse<()>> {
        let person = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or_else(AppError::not_found)?;

        self.repo.delete_by_id(person.id).await?;

        tracing::info!(id = person.id, username = %person.username, "Person deleted");
        Ok(ServiceResponse::no_content())
    }
}
