//! Wire shapes for the identity API.
//!
//! The upstream speaks snake_case JSON; the fields below map onto it
//! directly. Parsing is fail-closed: a payload missing a field or
//! carrying the wrong type is a hard error, never a silent coercion.
//! Caller-facing serialization renames to camelCase, which is the
//! local convention for everything that leaves this service.

use ordocliens_admin_core::{Role, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credentials submitted by the operator.
///
/// Transient: credentials exist only for the duration of one login
/// call and are never persisted or logged.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Checks that both fields are present.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages for every violated constraint.
    pub fn validate(&self) -> Result<(), CredentialFieldErrors> {
        let mut errors = CredentialFieldErrors::default();
        if self.email.is_empty() {
            errors.email = Some("Email is required".to_string());
        }
        if self.password.is_empty() {
            errors.password = Some("Password is required".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

// Credentials stay out of logs and error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Per-field validation messages for a credentials form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CredentialFieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CredentialFieldErrors {
    /// Returns true if no field violated a constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Body of `POST /v1/authenticate`.
#[derive(Debug, Serialize)]
pub(crate) struct AuthenticateRequest<'a> {
    pub auth: &'a Credentials,
}

/// Successful response envelope of `POST /v1/authenticate`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AuthResponse {
    pub auth: AuthPayload,
}

/// The issued token and the authenticated user's record.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub auth_token: String,
    pub user: UserRecord,
}

/// Successful response envelope of `GET /v1/current_user`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentUserResponse {
    pub user: UserRecord,
}

/// A user record as the identity API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Normalized shape of any upstream failure.
///
/// The `status` field in the body, when present, is overridden by the
/// HTTP response status; the response line is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(default)]
    pub status: u16,
}
