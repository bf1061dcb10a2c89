//! Error handling module for the dealership backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and
//! the `{success:false, message}` wire envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Application error type.
///
/// `Database` and `MailRelay` are distinct variants so the two failure
/// causes can be logged and tested separately, even though both collapse
/// to a uniform 500 "Server error" on the wire.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input
    Validation(String),
    /// Credential or session check failed
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Database error
    Database(String),
    /// Mail relay error
    MailRelay(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MailRelay(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the internal error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::MailRelay(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Get the message exposed on the wire.
    ///
    /// Server-side failures are collapsed to a generic message; no detail
    /// or stack trace leaves the process.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Unauthorized(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::Database(_) | AppError::MailRelay(_) | AppError::Internal(_) => {
                "Server error".to_string()
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Mail relay error: {:?}", err);
        AppError::MailRelay(format!("Mail relay error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Internal(format!("JSON error: {}", err))
    }
}

/// Error response envelope: `{"success": false, "message": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody::new(self.public_message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MailRelay("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_failures_collapse_on_the_wire() {
        assert_eq!(
            AppError::Database("connection reset".into()).public_message(),
            "Server error"
        );
        assert_eq!(
            AppError::MailRelay("relay timed out".into()).public_message(),
            "Server error"
        );
        // Client-facing variants keep their message.
        assert_eq!(
            AppError::Validation("All fields are required".into()).public_message(),
            "All fields are required"
        );
    }
}
