//! Shared domain types for the Ordocliens admin client.
//!
//! This crate provides the vocabulary used across the workspace:
//! user identifiers issued by the upstream identity API and the role
//! levels that gate access to the admin area.

pub mod id;
pub mod role;

pub use id::UserId;
pub use role::Role;
