//! Admin gate and session authentication.
//!
//! Credential checks use constant-time comparison to mitigate timing
//! attacks. A successful login yields an opaque session token held in an
//! in-process set; mutating listing endpoints require it as a bearer
//! token. Tokens have no expiry and do not survive a restart.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::ErrorBody;
use crate::AppState;

/// Check submitted admin credentials against the configured values.
///
/// Case-sensitive on both fields. Returns false when the gate is not
/// configured. Both comparisons always run; `&` avoids short-circuiting
/// on the email check.
pub fn verify_credentials(config: &Config, email: &str, password: &str) -> bool {
    let (Some(expected_email), Some(expected_password)) =
        (&config.admin_email, &config.admin_password)
    else {
        return false;
    };

    constant_time_compare(email, expected_email) & constant_time_compare(password, expected_password)
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// In-process store of issued admin session tokens.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh opaque session token.
    pub fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens
            .write()
            .expect("session lock poisoned")
            .insert(token.clone());
        token
    }

    /// Check whether a token was issued by this process.
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .read()
            .expect("session lock poisoned")
            .contains(token)
    }
}

/// Extractor guard for admin-only endpoints.
///
/// Accepts `Authorization: Bearer <token>` where the token came from a
/// successful login. When no admin credentials are configured the guard
/// is disabled and all requests pass (dev mode).
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.admin_gate_configured() {
            return Ok(AdminSession);
        }

        let bearer = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "));

        match bearer {
            Some(token) if state.sessions.is_valid(token) => Ok(AdminSession),
            _ => Err(unauthorized_response("Missing or invalid admin session")),
        }
    }
}

/// Create an unauthorized response.
pub fn unauthorized_response(message: &str) -> Response {
    let body = ErrorBody::new(message);
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_creds(email: Option<&str>, password: Option<&str>) -> Config {
        Config {
            db_path: "./data/test.sqlite".into(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            admin_email: email.map(String::from),
            admin_password: password.map(String::from),
            mail_relay_url: None,
            mail_api_key: None,
            notify_email: None,
        }
    }

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("admin@dealership.test", "admin@dealership.test"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("s3cret", "s3creT"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-secret"));
    }

    #[test]
    fn test_verify_credentials_match() {
        let config = config_with_creds(Some("admin@dealership.test"), Some("s3cret"));
        assert!(verify_credentials(&config, "admin@dealership.test", "s3cret"));
    }

    #[test]
    fn test_verify_credentials_case_sensitive() {
        let config = config_with_creds(Some("admin@dealership.test"), Some("s3cret"));
        assert!(!verify_credentials(&config, "Admin@dealership.test", "s3cret"));
        assert!(!verify_credentials(&config, "admin@dealership.test", "S3cret"));
    }

    #[test]
    fn test_verify_credentials_unconfigured() {
        let config = config_with_creds(None, None);
        assert!(!verify_credentials(&config, "", ""));
        let config = config_with_creds(Some("admin@dealership.test"), None);
        assert!(!verify_credentials(&config, "admin@dealership.test", ""));
    }

    #[test]
    fn test_session_store_issue_and_validate() {
        let store = SessionStore::new();
        let token = store.issue();
        assert!(store.is_valid(&token));
        assert!(!store.is_valid("not-a-token"));
    }
}
