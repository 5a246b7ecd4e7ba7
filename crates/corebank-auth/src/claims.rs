//! Token claims and the inbound claim mapping

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Payload of an issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username
    pub sub: String,
    /// Issuer, must match configuration on validation
    pub iss: String,
    /// Audience, must match configuration on validation
    pub aud: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds). Only enforced when lifetime validation is on.
    pub exp: i64,
}

/// Mapping from inbound token claim keys to identity fields.
///
/// Fixed at startup and never remapped at runtime. Validation reads the
/// subject out of whatever claim key this table names, so tokens minted by
/// an identity provider that uses a different subject claim can be accepted
/// by configuration instead of code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimMap {
    /// Claim key carrying the authenticated principal's username
    pub subject: String,
}

impl Default for ClaimMap {
    fn default() -> Self {
        Self {
            subject: "sub".to_string(),
        }
    }
}

impl ClaimMap {
    /// Read the subject out of a decoded claim set.
    ///
    /// Returns `None` when the mapped claim is absent or not a string.
    pub fn subject_of<'a>(&self, claims: &'a serde_json::Map<String, Value>) -> Option<&'a str> {
        claims.get(&self.subject).and_then(Value::as_str)
    }
}

/// The authenticated principal recovered from a validated token.
///
/// Inserted into request extensions by the auth middleware; holds only the
/// username, never a resolved user profile. Owner-scoped operations resolve
/// the profile per request through the identity resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subject(pub String);

impl Subject {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
