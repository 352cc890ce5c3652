//! Role levels reported by the upstream identity API.
//!
//! The admin client itself only admits superadmins; the other levels
//! exist so that upstream user records always deserialize into a
//! known variant and the gate can reject them explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role of a user, as reported by the identity API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access, the only role admitted here.
    Superadmin,
    /// Tenant-level administrator without access to this client.
    Admin,
    /// Regular end user without access to this client.
    User,
}

impl Role {
    /// Returns true if this role passes the superadmin gate.
    #[must_use]
    pub fn is_superadmin(&self) -> bool {
        matches!(self, Self::Superadmin)
    }

    /// Returns the wire name of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
