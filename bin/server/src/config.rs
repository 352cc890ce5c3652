//! Centralized server configuration.
//!
//! Loaded once at startup via the `config` crate from environment
//! variables. The session signing secret (`SESSION_SECRET`) is the
//! one required setting: without it the process must not come up, so
//! a missing secret is a load error, never a per-request failure.

use ordocliens_admin_upstream::UpstreamConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Session cookie signing secret. Required.
    pub session_secret: String,

    /// Previous signing secret, accepted during verification only.
    /// Set while rotating `SESSION_SECRET` until outstanding sessions
    /// age out.
    #[serde(default)]
    pub session_secret_fallback: Option<String>,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Defaults to true; set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,

    /// Identity API configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_secure_cookies() -> bool {
    true
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or
    /// invalid — notably an absent `SESSION_SECRET`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// The signing secrets, newest first.
    #[must_use]
    pub fn session_secrets(&self) -> Vec<String> {
        let mut secrets = vec![self.session_secret.clone()];
        if let Some(fallback) = &self.session_secret_fallback {
            secrets.push(fallback.clone());
        }
        secrets
    }
}
