//! Admin login request model.

use serde::Deserialize;

/// Request body for the admin login endpoint.
///
/// Fields default to `None` so a missing key fails the credential check
/// (401) rather than the JSON decoder.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
