//! Read-only person use cases: get, search, list.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::PersonView;
use crate::errors::{AppError, AppResult};
use crate::infra::PersonRepository;
use crate::types::ServiceResponse;

use super::Query;

/// Exact lookup by username
pub struct GetPerson {
    repo: Arc<dyn PersonRepository>,
}

impl GetPerson {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Query<String, PersonView> for GetPerson {
    async fn execute(&self, username: String) -> AppResult<ServiceResponse<PersonView>> {
        let person = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or_else(AppError::not_found)?;

        Ok(ServiceResponse::ok(PersonView::from(person)))
    }
}

/// Case-insensitive substring search over usernames.
///
/// No match is an empty list, not an error.
pub struct SearchPeople {
    repo: Arc<dyn PersonRepository>,
}

impl SearchPeople {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Query<String, Vec<PersonView>> for SearchPeople {
    async fn execute(&self, term: String) -> AppResult<ServiceResponse<Vec<PersonView>>> {
        let people = self.repo.find_by_username_containing(&term).await?;
        tracing::debug!(term = %term, matches = people.len(), "Person search");

        Ok(ServiceResponse::ok(
            people.into_iter().map(PersonView::from).collect(),
        ))
    }
}

/// Every stored person
pub struct ListPeople {
    repo: Arc<dyn PersonRepository>,
}

impl ListPeople {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Query<(), Vec<PersonView>> for ListPeople {
    async fn execute(&self, _: ()) -> AppResult<ServiceResponse<Vec<PersonView>>> {
        let people = self.repo.find_all().await?;
        Ok(ServiceResponse::ok(
            people.into_iter().map(PersonView::from).collect(),
        ))
    }
}
