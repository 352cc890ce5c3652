//! Error types for the upstream client.

use std::fmt;

/// A failure talking to the identity API.
///
/// Every upstream problem, regardless of endpoint, surfaces as one of
/// these variants with a status and a message, so callers present a
/// single uniform failure shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The API answered outside the 2xx range with a parseable
    /// error envelope.
    Api { status: u16, message: String },
    /// The request never completed: timeout (504) or another
    /// transport failure (502).
    Transport { status: u16, details: String },
    /// The API answered, but the body failed schema validation for
    /// both the success and the error shape.
    MalformedResponse { details: String },
}

impl UpstreamError {
    /// The HTTP status to report for this failure.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } | Self::Transport { status, .. } => *status,
            Self::MalformedResponse { .. } => 500,
        }
    }

    /// The user-presentable message for this failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::Transport { .. } => "Could not reach the identity service",
            Self::MalformedResponse { .. } => "Unexpected response from the identity service",
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api { status, message } => {
                write!(f, "identity API error {status}: {message}")
            }
            Self::Transport { status, details } => {
                write!(f, "identity API transport failure ({status}): {details}")
            }
            Self::MalformedResponse { details } => {
                write!(f, "malformed identity API response: {details}")
            }
        }
    }
}

impl std::error::Error for UpstreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_reports_its_status_and_message() {
        let err = UpstreamError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.status(), 401);
        assert_eq!(err.message(), "Invalid credentials");
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn transport_error_keeps_its_gateway_status() {
        let err = UpstreamError::Transport {
            status: 504,
            details: "request timed out".to_string(),
        };
        assert_eq!(err.status(), 504);
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn malformed_response_is_a_500() {
        let err = UpstreamError::MalformedResponse {
            details: "missing field `auth`".to_string(),
        };
        assert_eq!(err.status(), 500);
        assert!(err.to_string().contains("malformed"));
    }
}
