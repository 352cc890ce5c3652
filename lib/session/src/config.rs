//! Session cookie configuration.
//!
//! The signing secrets and cookie attributes are fixed at process
//! start. Constructing a configuration without a usable secret is a
//! hard error: a store that cannot sign must never come up.

use cookie::SameSite;
use time::Duration;

use crate::error::SessionConfigError;

/// Default cookie name for the admin session.
pub const DEFAULT_COOKIE_NAME: &str = "ordocliens_admin_session";

/// Default session lifetime: 30 days.
const DEFAULT_MAX_AGE: Duration = Duration::days(30);

/// Configuration for the session cookie and its signing secrets.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    cookie_name: String,
    secrets: Vec<String>,
    secure: bool,
    http_only: bool,
    same_site: SameSite,
    path: String,
    max_age: Duration,
}

impl SessionConfig {
    /// Creates a configuration with the given signing secrets.
    ///
    /// The first secret signs new cookies; every secret is accepted
    /// during verification, so rotating a secret means prepending the
    /// new one and keeping the old one until outstanding sessions age
    /// out.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret list is empty or contains an
    /// empty secret.
    pub fn new(secrets: Vec<String>) -> Result<Self, SessionConfigError> {
        if secrets.is_empty() {
            return Err(SessionConfigError::NoSecrets);
        }
        if let Some(index) = secrets.iter().position(String::is_empty) {
            return Err(SessionConfigError::EmptySecret { index });
        }

        Ok(Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            secrets,
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age: DEFAULT_MAX_AGE,
        })
    }

    /// Overrides the cookie name.
    #[must_use]
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Sets the `Secure` attribute. Defaults to true; disable only for
    /// local HTTP development.
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Sets the `HttpOnly` attribute.
    #[must_use]
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Sets the `SameSite` policy.
    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Sets the cookie path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the session lifetime.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Returns the cookie name.
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Returns the signing secrets, newest first.
    #[must_use]
    pub fn secrets(&self) -> &[String] {
        &self.secrets
    }

    /// Returns the `Secure` attribute.
    #[must_use]
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Returns the `HttpOnly` attribute.
    #[must_use]
    pub fn http_only(&self) -> bool {
        self.http_only
    }

    /// Returns the `SameSite` policy.
    #[must_use]
    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    /// Returns the cookie path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the session lifetime.
    #[must_use]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }
}
