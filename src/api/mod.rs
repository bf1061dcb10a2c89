//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.
//! Handlers do parameter extraction, validation, delegation and status
//! mapping only; business rules live in the repository and services.

mod admin;
mod cars;
mod contact;

pub use admin::*;
pub use cars::*;
pub use contact::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success envelope shared by endpoints that return only a message:
/// `{"success": true, "message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A successful response with an explicit status code.
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Response type that is either a success envelope or an [`AppError`].
///
/// [`AppError`]: crate::errors::AppError
pub type ApiResult<T> = Result<ApiSuccess<T>, crate::errors::AppError>;

/// Create a 200 OK response.
pub fn ok<T: Serialize>(body: T) -> ApiResult<T> {
    Ok(ApiSuccess {
        status: StatusCode::OK,
        body,
    })
}

/// Create a 201 Created response.
pub fn created<T: Serialize>(body: T) -> ApiResult<T> {
    Ok(ApiSuccess {
        status: StatusCode::CREATED,
        body,
    })
}
