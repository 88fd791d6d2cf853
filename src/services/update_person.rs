//! Update person use case.
//!
//! Updates are whole-record replacements validated as if creating anew;
//! only the id survives from the stored record.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{validate_person, PasswordHasher, PersonRecord, PersonView, UpdatePersonCommand};
use crate::errors::{AppError, AppResult};
use crate::infra::PersonRepository;
use crate::types::ServiceResponse;

use super::Command;

pub struct UpdatePerson {
    repo: Arc<dyn PersonRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UpdatePerson {
    pub fn new(repo: Arc<dyn PersonRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repo, hasher }
    }
}

#[async_trait]
impl Command<UpdatePersonCommand, PersonView> for UpdatePerson {
    async fn execute(&self, command: UpdatePersonCommand) -> AppResult<ServiceResponse<PersonView>> {
        let UpdatePersonCommand {
            target_username,
            replacement,
        } = command;

        let existing = self
            .repo
            .find_by_username(&target_username)
            .await?
            .ok_or_else(AppError::not_found)?;

        // Renaming onto a name held by someone else is forbidden
        if replacement.username != target_username
            && self
                .repo
                .find_by_username(&replacement.username)
                .await?
                .is_some()
        {
            tracing::debug!(
                from = %target_username,
                to = %replacement.username,
                "Update rejected: username taken"
            );
            return Err(AppError::already_exists());
        }

        let role = validate_person(&replacement)?;
        let password_hash = self.hasher.encode(&replacement.password)?;

        let updated = PersonRecord {
            id: existing.id,
            username: replacement.username,
            password_hash,
            role,
        };

        self.repo
            .update_person(
                updated.id,
                updated.username.clone(),
                updated.password_hash.clone(),
                updated.role,
            )
            .await?;

        tracing::info!(id = updated.id, username = %updated.username, "Person updated");
        Ok(ServiceResponse::ok(PersonView::from(updated)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockPasswordHasher, PersonInput, PersonRole};
    use crate::errors::ErrorMessage;
    use crate::infra::MockPersonRepository;
    use crate::services::test_support::person;
    use crate::types::ServiceStatus;

    fn service(repo: MockPersonRepository, hasher: MockPasswordHasher) -> UpdatePerson {
        UpdatePerson::new(Arc::new(repo), Arc::new(hasher))
    }

    fn existing() -> PersonRecord {
        person(1, "oldUsername", "oldHash", PersonRole::Admin)
    }

    fn unused_hasher() -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_encode().never();
        hasher
    }

    /// Repo where the target exists and `newUsername` is free
    fn repo_with_target() -> MockPersonRepository {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .withf(|u: &str| u == "oldUsername")
            .times(1)
            .returning(|_| Ok(Some(existing())));
        repo.expect_find_by_username()
            .withf(|u: &str| u == "newUsername")
            .returning(|_| Ok(None));
        repo
    }

    fn command(username: &str, password: &str, role: &str) -> UpdatePersonCommand {
        UpdatePersonCommand::new("oldUsername", PersonInput::new(username, password, role))
    }

    #[tokio::test]
    async fn test_update_person_success() {
        let mut repo = repo_with_target();
        repo.expect_update_person()
            .withf(|id, username, hash, role| {
                *id == 1
                    && username == "newUsername"
                    && hash == "encodedNewPassword"
                    && *role == PersonRole::Employee
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_encode()
            .withf(|plain: &str| plain == "newPassword123")
            .times(1)
            .returning(|_| Ok("encodedNewPassword".to_string()));

        let response = service(repo, hasher)
            .execute(command("newUsername", "newPassword123", "EMPLOYEE"))
            .await
            .unwrap();

        assert_eq!(response.status, ServiceStatus::Ok);
        assert_eq!(response.body.username, "newUsername");
        assert_eq!(response.body.password, "encodedNewPassword");
        assert_eq!(response.body.role, "EMPLOYEE");
    }

    #[tokio::test]
    async fn test_update_person_not_found() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .withf(|u: &str| u == "oldUsername")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_update_person().never();

        let err = service(repo, unused_hasher())
            .execute(command("newUsername", "newPassword123", "EMPLOYEE"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::NotFound(ErrorMessage::PersonNotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_person_username_taken() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .withf(|u: &str| u == "oldUsername")
            .times(1)
            .returning(|_| Ok(Some(existing())));
        repo.expect_find_by_username()
            .withf(|u: &str| u == "newUsername")
            .times(1)
            .returning(|_| Ok(Some(person(2, "newUsername", "hash", PersonRole::Employee))));
        repo.expect_update_person().never();

        let err = service(repo, unused_hasher())
            .execute(command("newUsername", "newPassword123", "EMPLOYEE"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AlreadyExists(ErrorMessage::PersonAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_update_same_username_skips_second_lookup() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(existing())));
        repo.expect_update_person()
            .withf(|id, username, _, role| {
                *id == 1 && username == "oldUsername" && *role == PersonRole::Admin
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_encode()
            .times(1)
            .returning(|_| Ok("rehashed".to_string()));

        let response = service(repo, hasher)
            .execute(command("oldUsername", "anotherPassword", "ADMIN"))
            .await
            .unwrap();

        assert_eq!(response.body.username, "oldUsername");
        assert_eq!(response.body.password, "rehashed");
    }

    #[tokio::test]
    async fn test_update_person_blank_username() {
        let mut repo = MockPersonRepository::new();
        repo.expect_find_by_username()
            .withf(|u: &str| u == "oldUsername")
            .times(1)
            .returning(|_| Ok(Some(existing())));
        repo.expect_find_by_username()
            .withf(|u: &str| u.is_empty())
            .returning(|_| Ok(None));
        repo.expect_update_person().never();

        let err = service(repo, unused_hasher())
            .execute(command("", "newPassword123", "EMPLOYEE"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AttributeInvalid(ErrorMessage::NameRequired)
        ));
    }

    #[tokio::test]
    async fn test_update_person_password_too_short() {
        let mut repo = repo_with_target();
        repo.expect_update_person().never();

        let err = service(repo, unused_hasher())
            .execute(command("newUsername", "short", "EMPLOYEE"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AttributeInvalid(ErrorMessage::PasswordNotValid)
        ));
    }

    #[tokio::test]
    async fn test_update_person_invalid_role() {
        let mut repo = repo_with_target();
        repo.expect_update_person().never();

        let err = service(repo, unused_hasher())
            .execute(command("newUsername", "newPassword123", "USER"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::AttributeInvalid(ErrorMessage::RoleNotValid)
        ));
    }
}
