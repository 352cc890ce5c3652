//! Shared application state.

use ordocliens_admin_auth::AuthService;

/// State shared by all request handlers.
///
/// Built once at startup and handed to axum behind an `Arc`; nothing
/// in it is mutated after construction.
pub struct AppState {
    /// The auth/session core.
    pub auth: AuthService,
}

impl AppState {
    /// Creates the application state.
    #[must_use]
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}
