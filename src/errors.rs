//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fixed, enumerated error identifiers.
///
/// Callers match on these instead of on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMessage {
    PersonNotFound,
    PersonAlreadyExists,
    NameRequired,
    PasswordNotValid,
    RoleNotValid,
}

impl ErrorMessage {
    /// Stable identifier sent to clients
    pub fn code(&self) -> &'static str {
        match self {
            ErrorMessage::PersonNotFound => "PERSON_NOT_FOUND",
            ErrorMessage::PersonAlreadyExists => "PERSON_ALREADY_EXISTS",
            ErrorMessage::NameRequired => "NAME_REQUIRED",
            ErrorMessage::PasswordNotValid => "PASSWORD_NOT_VALID",
            ErrorMessage::RoleNotValid => "ROLE_NOT_VALID",
        }
    }

    /// Human readable message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorMessage::PersonNotFound => "Person not found",
            ErrorMessage::PersonAlreadyExists => "Person already exists",
            ErrorMessage::NameRequired => "Username is required",
            ErrorMessage::PasswordNotValid => "Password must be at least 8 characters long",
            ErrorMessage::RoleNotValid => "Role is not valid",
        }
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(ErrorMessage),

    #[error("{0}")]
    AlreadyExists(ErrorMessage),

    // Validation
    #[error("{0}")]
    AttributeInvalid(ErrorMessage),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(msg)
            | AppError::AlreadyExists(msg)
            | AppError::AttributeInvalid(msg) => msg.code(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Enumerated message carried by domain errors
    pub fn error_message(&self) -> Option<ErrorMessage> {
        match self {
            AppError::NotFound(msg)
            | AppError::AlreadyExists(msg)
            | AppError::AttributeInvalid(msg) => Some(*msg),
            _ => None,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::AttributeInvalid(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound(ErrorMessage::PersonNotFound)
    }

    pub fn already_exists() -> Self {
        AppError::AlreadyExists(ErrorMessage::PersonAlreadyExists)
    }

    pub fn invalid(msg: ErrorMessage) -> Self {
        AppError::AttributeInvalid(msg)
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
