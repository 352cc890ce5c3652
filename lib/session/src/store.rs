//! Session lifecycle: create, load, commit, destroy.
//!
//! The store owns the signing secrets and the cookie attribute
//! configuration. It is immutable after startup and shared freely
//! across request handlers.

use cookie::Cookie;
use time::Duration;
use tracing::debug;

use crate::config::SessionConfig;
use crate::session::Session;
use crate::signer::CookieSigner;

/// Creates, loads, commits, and destroys signed sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    config: SessionConfig,
    signer: CookieSigner,
}

impl SessionStore {
    /// Creates a store from a validated configuration.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let signer = CookieSigner::new(config.secrets().to_vec());
        Self { config, signer }
    }

    /// Returns the configured cookie name.
    #[must_use]
    pub fn cookie_name(&self) -> &str {
        self.config.cookie_name()
    }

    /// Returns a new, empty session.
    #[must_use]
    pub fn create(&self) -> Session {
        Session::new()
    }

    /// Loads the session from a request's `Cookie` header.
    ///
    /// A header that is absent, has no session cookie, carries a bad
    /// signature, or holds an unparseable payload yields an empty
    /// session. An anonymous visitor is a valid state, not an error.
    #[must_use]
    pub fn load(&self, cookie_header: Option<&str>) -> Session {
        let Some(header) = cookie_header else {
            return Session::new();
        };

        let Some(value) = self.session_cookie_value(header) else {
            return Session::new();
        };

        let Some(payload) = self.signer.verify(&value) else {
            debug!("session cookie failed signature verification, treating as anonymous");
            return Session::new();
        };

        match serde_json::from_slice(&payload) {
            Ok(session) => session,
            Err(error) => {
                debug!(%error, "signed session payload is not valid JSON, treating as anonymous");
                Session::new()
            }
        }
    }

    /// Serializes and signs the session, returning a `Set-Cookie` value.
    ///
    /// Must be the last session operation before forming the response;
    /// the cookie reflects only the state at commit time.
    #[must_use]
    pub fn commit(&self, session: &Session) -> String {
        let payload =
            serde_json::to_vec(session).expect("a map of strings always serializes to JSON");
        let signed = self.signer.sign(&payload);
        self.build_cookie(signed, self.config.max_age()).to_string()
    }

    /// Consumes the session and returns a `Set-Cookie` value that
    /// invalidates it client-side immediately.
    #[must_use]
    pub fn destroy(&self, session: Session) -> String {
        drop(session);
        self.build_cookie(String::new(), Duration::ZERO).to_string()
    }

    fn session_cookie_value(&self, header: &str) -> Option<String> {
        Cookie::split_parse(header.to_string())
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == self.config.cookie_name())
            .map(|cookie| cookie.value().to_string())
    }

    fn build_cookie(&self, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((self.config.cookie_name().to_string(), value))
            .path(self.config.path().to_string())
            .http_only(self.config.http_only())
            .secure(self.config.secure())
            .same_site(self.config.same_site())
            .max_age(max_age)
            .build()
    }
}
