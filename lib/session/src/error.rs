//! Error types for the session crate.

use std::fmt;

/// Errors from configuring the session store.
///
/// These are fatal at process start; a store without a usable signing
/// secret must never serve requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionConfigError {
    /// No signing secret was configured.
    NoSecrets,
    /// A configured secret is the empty string.
    EmptySecret { index: usize },
}

impl fmt::Display for SessionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSecrets => {
                write!(f, "no session signing secret configured")
            }
            Self::EmptySecret { index } => {
                write!(f, "session signing secret at position {index} is empty")
            }
        }
    }
}

impl std::error::Error for SessionConfigError {}

/// Errors from reading session fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session carries no auth token (or an empty one).
    MissingToken,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "session has no auth token"),
        }
    }
}

impl std::error::Error for SessionError {}
