//! Error taxonomy for privileged-request checks.

use ordocliens_admin_upstream::UpstreamError;
use std::fmt;

/// Why a privileged request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No usable token in the session: absent, empty, or rejected by
    /// the identity API. The caller should redirect to the login page.
    Unauthenticated,
    /// The token identifies a real user whose role does not pass the
    /// superadmin gate. Deliberately carries nothing about the user.
    Forbidden,
    /// The identity API could not be consulted.
    Upstream(UpstreamError),
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "not authenticated"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::Upstream(error) => write!(f, "user lookup failed: {error}"),
        }
    }
}

impl std::error::Error for AccessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Upstream(error) => Some(error),
            _ => None,
        }
    }
}
