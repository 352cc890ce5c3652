//! Signed, client-held session cookies for the Ordocliens admin client.
//!
//! This crate provides:
//! - `SessionConfig`: cookie name, secrets, and attribute configuration
//! - `CookieSigner`: the HMAC sign/verify primitive with secret rotation
//! - `Session`: the key/value record carried through one request
//! - `SessionStore`: create/load/commit/destroy lifecycle
//!
//! # Trust model
//!
//! The session lives entirely in the browser as a signed cookie. The
//! signature is verified against the configured secrets before any field
//! is trusted; a cookie that is absent, unparseable, or mis-signed loads
//! as an empty session. Anonymous is a valid state, never an error.
//!
//! # Example
//!
//! ```
//! use ordocliens_admin_session::{SessionConfig, SessionStore};
//!
//! let config = SessionConfig::new(vec!["a long random secret".to_string()])
//!     .expect("at least one secret")
//!     .with_secure(false);
//! let store = SessionStore::new(config);
//!
//! let mut session = store.create();
//! session.set_auth_token("tok123");
//! let set_cookie = store.commit(&session);
//!
//! let cookie_header = set_cookie.split(';').next().unwrap().to_string();
//! let loaded = store.load(Some(&cookie_header));
//! assert_eq!(loaded.auth_token().expect("token survives"), "tok123");
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod signer;
pub mod store;

pub use config::SessionConfig;
pub use cookie::SameSite;
pub use error::{SessionConfigError, SessionError};
pub use session::Session;
pub use signer::CookieSigner;
pub use store::SessionStore;
