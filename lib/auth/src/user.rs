//! The authenticated user as this client presents it.

use ordocliens_admin_core::{Role, UserId};
use ordocliens_admin_upstream::UserRecord;
use serde::Serialize;

/// An authenticated user of the admin client.
///
/// Built from a fresh upstream lookup on every privileged request;
/// never cached beyond the request that fetched it. Serializes as
/// camelCase, the convention for everything leaving this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    email: String,
    first_name: String,
    last_name: String,
    role: Role,
}

impl User {
    /// Returns the user's id.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the user's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the user's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the user's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            first_name: record.first_name,
            last_name: record.last_name,
            role: record.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        serde_json::from_str(
            r#"{
                "id": 1,
                "email": "micke_eri@hotmail.com",
                "first_name": "Micke",
                "last_name": "Eriksson",
                "role": "superadmin"
            }"#,
        )
        .expect("valid record")
    }

    #[test]
    fn user_is_built_from_an_upstream_record() {
        let user = User::from(record());
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.email(), "micke_eri@hotmail.com");
        assert_eq!(user.first_name(), "Micke");
        assert_eq!(user.last_name(), "Eriksson");
        assert_eq!(user.role(), Role::Superadmin);
    }

    #[test]
    fn user_serializes_as_camel_case() {
        let json = serde_json::to_value(User::from(record())).expect("serialize");
        assert_eq!(json["firstName"], "Micke");
        assert_eq!(json["lastName"], "Eriksson");
        assert_eq!(json["role"], "superadmin");
        assert!(json.get("first_name").is_none());
    }
}
