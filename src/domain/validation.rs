//! Person field validation.
//!
//! Checks run in a fixed order (username, password, role) and the first
//! failure wins. Shared by the create and update paths.

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult, ErrorMessage};

use super::person::{PersonInput, PersonRole};

/// Validate a candidate person and return its parsed role.
pub fn validate_person(input: &PersonInput) -> AppResult<PersonRole> {
    validate_fields(&input.username, &input.password, &input.role)
}

/// Validate raw username, password and role.
pub fn validate_fields(username: &str, password: &str, role: &str) -> AppResult<PersonRole> {
    validate_username(username)?;
    validate_password(password)?;
    PersonRole::try_from(role)
}

fn validate_username(username: &str) -> AppResult<()> {
    if username.trim().is_empty() {
        return Err(AppError::invalid(ErrorMessage::NameRequired));
    }
    Ok(())
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::invalid(ErrorMessage::PasswordNotValid));
    }
    Ok(())
}
