//! Client for the Ordocliens identity API.
//!
//! This crate owns the wire contract with the upstream service of
//! record for credential verification and user lookup:
//! - typed request/response shapes with fail-closed parsing
//! - credential validation with per-field messages
//! - the `IdentityApi` trait, so callers can substitute a fake
//! - `UpstreamClient`, the HTTPS implementation over reqwest
//!
//! Every non-2xx response and every transport failure funnels through
//! a single error path and comes out as a uniform
//! [`UpstreamError`](error::UpstreamError) carrying a status and a
//! message.

pub mod client;
pub mod error;
pub mod schema;

pub use client::{IdentityApi, UpstreamClient, UpstreamConfig};
pub use error::UpstreamError;
pub use schema::{AuthPayload, Credentials, CredentialFieldErrors, ErrorEnvelope, UserRecord};
