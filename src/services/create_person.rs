//! Create person use case.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{validate_person, NewPerson, PasswordHasher, PersonInput, PersonView};
use crate::errors::{AppError, AppResult};
use crate::infra::PersonRepository;
use crate::types::ServiceResponse;

use super::Command;

/// Registers a new person after the uniqueness and field checks pass.
pub struct CreatePerson {
    repo: Arc<dyn PersonRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl CreatePerson {
    pub fn new(repo: Arc<dyn PersonRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }
}

#[async_trait]
impl Command<PersonInput, PersonView> for CreatePerson {
    async fn execute(&self, input: PersonInput) -> AppResult<ServiceResponse<PersonView>> {
        // Duplicate check comes first: no validation or hashing for a taken name
        if self.repo.find_by_username(&input.username).await?.is_some() {
            tracing::debug!(username = %input.username, "Create rejected: username taken");
            return Err(AppError::already_exists());
        }

        let role = validate_person(&input)?;
        let password_hash = self.hasher.encode(&input.password)?;

        let record = self
            .repo
            .save(NewPerson {
                username: input.username,
                password_hash,
                role,
            })
            .await?;

        tracing::info!(id = record.id, username = %record.username, "Person created");
        Ok(ServiceResponse::created(PersonView::from(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockPasswordHasher, PersonRole};
    use crate::errors::ErrorMessage;
    use crate::infra::MockPersonRepository;
    use crate::services::test_support::person;
    use crate::types::ServiceStatus;

    fn service(repo: MockPersonRepository, hasher: MockPasswordHasher) -> CreatePerson {
        CreatePerson::new(Arc::new(repo), Arc::new(hasher))
    }

    fn unused_hasher() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_encode().never();
        hasher
    }

    fn repo_without(username: &'static str) -> MockPersonRepository {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .withf(move |u: &str| u == username)
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save().never();
        repo
    }

    #[tokio::test]
    async fn test_create_person_success() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .withf(|u: &str| u == "testUser")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .withf(|p: &NewPerson| {
                p.username == "testUser"
                    && p.password_hash == "encodedPassword"
                    && p.role == PersonRole::Admin
            })
            .times(1)
            .returning(|p| Ok(p.with_id(1)));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_encode()
            .withf(|plain: &str| plain == "password123")
            .times(1)
            .returning(|_| Ok("encodedPassword".to_string()));

        let response = service(repo, hasher)
            .execute(PersonInput::new("testUser", "password123", "ADMIN"))
            .await
            .unwrap();

        assert_eq!(response.status, ServiceStatus::Created);
        assert_eq!(response.body.username, "testUser");
        assert_eq!(response.body.password, "encodedPassword");
        assert_eq!(response.body.role, "ADMIN");
    }

    #[tokio::test]
    async fn test_create_person_already_exists() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(person(1, "testUser", "hash", PersonRole::Admin))));
        repo.expect_save().never();

        let err = service(repo, unused_hasher())
            // Invalid password and role do not matter once the name is taken
            .execute(PersonInput::new("testUser", "short", "USER"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AlreadyExists(ErrorMessage::PersonAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_create_person_blank_username() {
        let err = service(repo_without(""), unused_hasher())
            .execute(PersonInput::new("", "password123", "ADMIN"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AttributeInvalid(ErrorMessage::NameRequired)
        ));
    }

    #[tokio::test]
    async fn test_create_person_password_too_short() {
        let err = service(repo_without("testUser"), unused_hasher())
            .execute(PersonInput::new("testUser", "short", "ADMIN"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AttributeInvalid(ErrorMessage::PasswordNotValid)
        ));
    }

    #[tokio::test]
    async fn test_create_person_invalid_role() {
        let err = service(repo_without("testUser"), unused_hasher())
            .execute(PersonInput::new("testUser", "password123", "USER"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AttributeInvalid(ErrorMessage::RoleNotValid)
        ));
    }

    #[tokio::test]
    async fn test_create_person_store_rejects_duplicate() {
        // Another caller won the race between lookup and insert
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(AppError::already_exists()));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_encode()
            .returning(|_| Ok("encodedPassword".to_string()));

        let err = service(repo, hasher)
            .execute(PersonInput::new("testUser", "password123", "EMPLOYEE"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists(_)));
    }
}
