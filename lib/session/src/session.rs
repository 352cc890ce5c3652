//! The session record carried through one request.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SessionError;

/// Session key under which the upstream auth token is stored.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// A key/value record held by the client in a signed cookie.
///
/// A session is a value owned by a single request/response chain; it
/// is never shared across in-flight requests. Mutations only persist
/// once the session is committed through the [`SessionStore`].
///
/// [`SessionStore`]: crate::store::SessionStore
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    values: BTreeMap<String, String>,
}

impl Session {
    /// Creates a new, empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stores `value` under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes the value stored under `key`.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Returns true if the session holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the auth token.
    ///
    /// An empty token is indistinguishable from a missing one: both
    /// mean the session does not authenticate anybody.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingToken` if the token is unset or
    /// empty.
    pub fn auth_token(&self) -> Result<&str, SessionError> {
        match self.get(AUTH_TOKEN_KEY) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(SessionError::MissingToken),
        }
    }

    /// Stores the auth token.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.set(AUTH_TOKEN_KEY, token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut session = Session::new();
        session.set("theme", "dark");
        assert_eq!(session.get("theme"), Some("dark"));

        session.remove("theme");
        assert_eq!(session.get("theme"), None);
    }

    #[test]
    fn auth_token_accessors() {
        let mut session = Session::new();
        assert_eq!(session.auth_token(), Err(SessionError::MissingToken));

        session.set_auth_token("tok123");
        assert_eq!(session.auth_token(), Ok("tok123"));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let mut session = Session::new();
        session.set_auth_token("");
        assert_eq!(session.auth_token(), Err(SessionError::MissingToken));
    }

    #[test]
    fn session_serializes_as_flat_map() {
        let mut session = Session::new();
        session.set_auth_token("tok123");

        let json = serde_json::to_string(&session).expect("serialize");
        assert_eq!(json, r#"{"authToken":"tok123"}"#);

        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, session);
    }
}
