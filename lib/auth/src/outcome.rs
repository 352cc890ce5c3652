//! Caller-facing outcomes of the login and logout flows.
//!
//! Modeled after the state machine the flows walk: a login attempt
//! ends `Authenticated`, `Invalid` (never left this process), or
//! `Rejected` (the upstream said no); logout always ends `LoggedOut`
//! with an invalidating cookie.

use ordocliens_admin_upstream::CredentialFieldErrors;

use crate::user::User;

/// Where authenticated operators land.
pub const PROTECTED_AREA: &str = "/dashboard";

/// Where everyone else lands.
pub const LOGIN_PAGE: &str = "/login";

/// Result of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credentials were accepted; the session is committed.
    Authenticated {
        /// The authenticated user, from the upstream response.
        user: User,
        /// `Set-Cookie` value carrying the signed session.
        set_cookie: String,
        /// Where to send the operator next.
        redirect_to: &'static str,
    },
    /// Credentials were malformed; no network call was made.
    Invalid(CredentialFieldErrors),
    /// The identity API refused the attempt.
    Rejected {
        /// Form-level messages, `"<message>. Status: <status>"`.
        form_errors: Vec<String>,
        /// The upstream status, for the response status line.
        status: u16,
    },
}

/// Result of a logout. Always succeeds, even for anonymous sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    /// `Set-Cookie` value that invalidates the session immediately.
    pub set_cookie: String,
    /// Where to send the operator next.
    pub redirect_to: &'static str,
}
