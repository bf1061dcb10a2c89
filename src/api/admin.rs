//! Admin login endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use super::{ok, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::models::LoginRequest;
use crate::AppState;

/// Success envelope for a login, carrying the issued session token.
#[derive(Debug, Serialize)]
pub struct LoginBody {
    pub success: bool,
    pub message: String,
    pub token: String,
}

/// POST /api/admin/login - Authenticate the shared admin identity.
///
/// Any mismatch, including a missing field or an unconfigured gate,
/// returns the same 401.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginBody> {
    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    if !auth::verify_credentials(&state.config, email, password) {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state.sessions.issue();
    tracing::info!("Admin login successful");

    ok(LoginBody {
        success: true,
        message: "Admin login successful".to_string(),
        token,
    })
}
