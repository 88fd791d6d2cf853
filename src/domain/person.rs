//! Person domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_EMPLOYEE};
use crate::errors::{AppError, ErrorMessage};

/// Closed set of roles a person may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonRole {
    Admin,
    Employee,
}

impl PersonRole {
    pub const ALL: [PersonRole; 2] = [PersonRole::Admin, PersonRole::Employee];

    /// Wire and storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonRole::Admin => ROLE_ADMIN,
            PersonRole::Employee => ROLE_EMPLOYEE,
        }
    }
}

impl TryFrom<&str> for PersonRole {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PersonRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or(AppError::AttributeInvalid(ErrorMessage::RoleNotValid))
    }
}

impl From<PersonRole> for String {
    fn from(role: PersonRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: PersonRole,
}

/// Values handed to the store on insert; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub username: String,
    pub password_hash: String,
    pub role: PersonRole,
}

impl NewPerson {
    /// Attach the store-assigned id
    pub fn with_id(self, id: i32) -> PersonRecord {
        PersonRecord {
            id,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

/// Candidate person as submitted by a caller (plaintext password, raw role)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PersonInput {
    /// Unique username
    #[schema(example = "jdoe")]
    pub username: String,
    /// Plaintext password (minimum 8 characters)
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
    /// One of `ADMIN`, `EMPLOYEE`
    #[schema(example = "EMPLOYEE")]
    pub role: String,
}

impl PersonInput {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

/// Full replacement of the person currently known as `target_username`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePersonCommand {
    pub target_username: String,
    pub replacement: PersonInput,
}

impl UpdatePersonCommand {
    pub fn new(target_username: impl Into<String>, replacement: PersonInput) -> Self {
        Self {
            target_username: target_username.into(),
            replacement,
        }
    }
}

/// Person response (password is the stored hash, never the plaintext)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonView {
    #[schema(example = "jdoe")]
    pub username: String,
    #[schema(example = "$argon2id$v=19$m=19456,t=2,p=1$...")]
    pub password: String,
    #[schema(example = "EMPLOYEE")]
    pub role: String,
}

impl From<PersonRecord> for PersonView {
    fn from(record: PersonRecord) -> Self {
        Self {
            username: record.username,
            password: record.password_hash,
            role: record.role.to_string(),
        }
    }
}

impl From<&PersonRecord> for PersonView {
    fn from(record: &PersonRecord) -> Self {
        PersonView::from(record.clone())
    }
}
