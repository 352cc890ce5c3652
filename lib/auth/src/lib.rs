//! Login, session recovery, and the superadmin gate.
//!
//! `AuthService` composes the session store and the identity API into
//! the three flows the admin client needs:
//! - `login`: credentials → token → committed session cookie
//! - `current_user`: session cookie → fresh user record → role gate
//! - `logout`: session cookie → invalidating cookie
//!
//! Every flow returns a typed outcome; callers are forced to handle
//! each case explicitly rather than pattern-matching caught values.
//!
//! # Access model
//!
//! Only users with the `superadmin` role are admitted. A valid token
//! belonging to any other role fails with [`AccessError::Forbidden`],
//! which deliberately carries no information about the user.

pub mod error;
pub mod outcome;
pub mod service;
pub mod user;

pub use error::AccessError;
pub use outcome::{LOGIN_PAGE, LoginOutcome, LogoutOutcome, PROTECTED_AREA};
pub use service::AuthService;
pub use user::User;
