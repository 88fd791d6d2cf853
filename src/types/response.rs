use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Outcome reported by a service alongside its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Created,
    Ok,
    NoContent,
}

impl ServiceStatus {
    /// Transport-level status code
    pub fn http_status(&self) -> StatusCode {
        match self {
            ServiceStatus::Created => StatusCode::CREATED,
            ServiceStatus::Ok => StatusCode::OK,
            ServiceStatus::NoContent => StatusCode::NO_CONTENT,
        }
    }
}

/// (status, body) pair returned by every service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse<T> {
    pub status: ServiceStatus,
    pub body: T,
}

impl<T> ServiceResponse<T> {
    pub fn created(body: T) -> Self {
        Self {
            status: ServiceStatus::Created,
            body,
        }
    }

    pub fn ok(body: T) -> Self {
        Self {
            status: ServiceStatus::Ok,
            body,
        }
    }
}

impl ServiceResponse<()> {
    pub fn no_content() -> Self {
        Self {
            status: ServiceStatus::NoContent,
            body: (),
        }
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> axum::response::Response {
        match self.status {
            ServiceStatus::NoContent => StatusCode::NO_CONTENT.into_response(),
            status => (status.http_status(), Json(self.body)).into_response(),
        }
    }
}
