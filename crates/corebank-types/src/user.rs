//! User profile and role types

use crate::id::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role names assigned to a user at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Holds one or more bank accounts
    AccountHolder,
    /// May review audited accounts
    Auditor,
}

impl Role {
    /// Canonical role name as stored and serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AccountHolder => "ACCOUNT_HOLDER",
            Role::Auditor => "AUDITOR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
///
/// The identifier is an opaque string fixed for the lifetime of the record.
/// The username doubles as the token subject: it is what the Token Service
/// embeds in issued credentials and what the Identity Resolver looks up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier, immutable after creation
    pub id: UserId,
    /// Unique login name, used as the token subject
    pub username: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Contact email
    pub email: String,
    /// Roles assigned at creation
    pub roles: Vec<Role>,
}

impl User {
    /// Whether the user carries the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// "First Last" display form
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: UserId::new("u-1"),
            username: "billy".to_string(),
            first_name: "Billy".to_string(),
            last_name: "Hunter".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1984, 6, 10).unwrap(),
            email: "garage_inc34@gmail.com".to_string(),
            roles: vec![Role::AccountHolder],
        }
    }

    #[test]
    fn test_role_names_serialize_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&Role::AccountHolder).unwrap(),
            "\"ACCOUNT_HOLDER\""
        );
        assert_eq!(serde_json::to_string(&Role::Auditor).unwrap(), "\"AUDITOR\"");
    }

    #[test]
    fn test_has_role() {
        let user = sample_user();
        assert!(user.has_role(Role::AccountHolder));
        assert!(!user.has_role(Role::Auditor));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "Billy Hunter");
    }
}
