//! Authentication configuration
//!
//! One immutable configuration object constructed at process start and
//! handed to the token service by value. Nothing here is read from ambient
//! global state after startup.

use crate::claims::ClaimMap;
use serde::{Deserialize, Serialize};

/// Token signing and validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Shared HMAC signing key. Must be set before issuing tokens.
    pub secret: String,

    /// Issuer claim stamped into issued tokens and required on validation
    pub issuer: String,

    /// Audience claim stamped into issued tokens and required on validation
    pub audience: String,

    /// Lifetime of issued tokens in seconds. The default is deliberately
    /// enormous because lifetime validation is off by default anyway; a
    /// deployment that enables `validate_lifetime` should shorten this.
    pub expire_seconds: i64,

    /// Whether validation enforces token expiry.
    ///
    /// Off by default: a token stays valid indefinitely once issued, and a
    /// token without an `exp` claim is accepted. This mirrors the historical
    /// behavior callers depend on. It is unsafe for production deployments,
    /// which should set this to `true` and pick a sane `expire_seconds`.
    pub validate_lifetime: bool,

    /// Inbound claim-to-identity mapping, resolved once at startup
    #[serde(default)]
    pub claim_map: ClaimMap,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set in production
            issuer: "corebank".to_string(),
            audience: "corebank-api".to_string(),
            expire_seconds: i64::from(i32::MAX),
            validate_lifetime: false,
            claim_map: ClaimMap::default(),
        }
    }
}

impl TokenConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.secret.is_empty() {
            errors.push("token signing secret must be set".to_string());
        }
        if self.issuer.is_empty() {
            errors.push("token issuer must be set".to_string());
        }
        if self.audience.is_empty() {
            errors.push("token audience must be set".to_string());
        }
        if self.claim_map.subject.is_empty() {
            errors.push("subject claim key must be set".to_string());
        }
        if self.validate_lifetime && self.expire_seconds <= 0 {
            errors.push("expire_seconds must be positive when lifetime validation is enabled".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
