//! HTTPS client for the identity API.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::error::UpstreamError;
use crate::schema::{
    AuthPayload, AuthResponse, AuthenticateRequest, Credentials, CurrentUserResponse,
    ErrorEnvelope, UserRecord,
};

/// Path of the credential exchange endpoint.
const AUTHENTICATE_PATH: &str = "/v1/authenticate";

/// Path of the user lookup endpoint.
const CURRENT_USER_PATH: &str = "/v1/current_user";

fn default_base_url() -> String {
    "https://ordocliens-api-staging.herokuapp.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Configuration for the upstream client.
///
/// Constructed explicitly at startup and passed in; the client holds
/// no ambient global state.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the identity API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Timeouts surface as 504 through the
    /// regular error funnel.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// The identity API as the rest of the workspace sees it.
///
/// `UpstreamClient` implements this over HTTPS; tests substitute a
/// fake to drive the auth flows without a network.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Exchanges credentials for an auth token and the user's record.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthPayload, UpstreamError>;

    /// Fetches the user record the token belongs to.
    async fn current_user(&self, auth_token: &str) -> Result<UserRecord, UpstreamError>;
}

/// reqwest-backed client for the identity API.
///
/// Each call is a single request/response; retries, if wanted, are a
/// caller-level policy.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base_url: String,
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| UpstreamError::Transport {
                status: 502,
                details: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Sends a JSON `POST`, optionally with a bearer token.
    async fn post<T: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
        auth_token: Option<&str>,
    ) -> Result<reqwest::Response, UpstreamError> {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(transport_error)?;
        Self::handle_error(response).await
    }

    /// Sends a `GET`, optionally with a bearer token.
    async fn get(
        &self,
        path: &str,
        auth_token: Option<&str>,
    ) -> Result<reqwest::Response, UpstreamError> {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(transport_error)?;
        Self::handle_error(response).await
    }

    /// The single funnel through which every non-2xx response becomes
    /// a uniform error.
    ///
    /// The HTTP status line is authoritative; a `status` field in the
    /// body is overridden by it. A body that fails envelope validation
    /// still surfaces as a (logged) 500-class failure.
    async fn handle_error(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status = status.as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        match serde_json::from_slice::<ErrorEnvelope>(&body) {
            Ok(mut envelope) => {
                envelope.status = status;
                Err(UpstreamError::Api {
                    status: envelope.status,
                    message: envelope.message,
                })
            }
            Err(error) => {
                warn!(status, %error, "upstream error body failed envelope validation");
                Err(UpstreamError::MalformedResponse {
                    details: format!("error body did not match the envelope shape: {error}"),
                })
            }
        }
    }

    /// Reads a 2xx response body into its typed shape, fail-closed.
    async fn parse_body<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&body).map_err(|error| {
            warn!(%error, "upstream success body failed schema validation");
            UpstreamError::MalformedResponse {
                details: format!("success body did not match the expected shape: {error}"),
            }
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl IdentityApi for UpstreamClient {
    #[instrument(skip_all)]
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthPayload, UpstreamError> {
        let body = AuthenticateRequest { auth: credentials };
        let response = self.post(AUTHENTICATE_PATH, &body, None).await?;
        let parsed: AuthResponse = Self::parse_body(response).await?;
        debug!(user_id = %parsed.auth.user.id, "credential exchange succeeded");
        Ok(parsed.auth)
    }

    #[instrument(skip_all)]
    async fn current_user(&self, auth_token: &str) -> Result<UserRecord, UpstreamError> {
        let response = self.get(CURRENT_USER_PATH, Some(auth_token)).await?;
        let parsed: CurrentUserResponse = Self::parse_body(response).await?;
        debug!(user_id = %parsed.user.id, "current user lookup succeeded");
        Ok(parsed.user)
    }
}

/// Maps a transport-level failure into the uniform error shape:
/// timeouts as 504, everything else as 502.
fn transport_error(error: reqwest::Error) -> UpstreamError {
    let status = if error.is_timeout() { 504 } else { 502 };
    UpstreamError::Transport {
        status,
        details: error.to_string(),
    }
}
