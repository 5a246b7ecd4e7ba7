//! Token Service
//!
//! Issues and validates the signed bearer tokens that every account
//! operation rides on. Signature, issuer, and audience are always enforced;
//! lifetime enforcement is a configuration toggle (see [`TokenConfig`]) and
//! is off by default.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde_json::Value;

use crate::claims::{ClaimMap, Claims, Subject};
use crate::config::TokenConfig;
use crate::error::{AuthError, AuthResult};

/// Token service for issuing and validating bearer credentials
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a new token service from an immutable configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue a signed token stating the subject, issuer, and audience.
    ///
    /// Stateless: nothing is recorded about issued tokens, so the only way
    /// a token becomes unusable is signature mismatch or, when lifetime
    /// validation is enabled, expiry.
    pub fn issue(&self, subject: &str) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            iat: now,
            exp: now.saturating_add(self.config.expire_seconds),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Config(format!("failed to encode token: {e}")))
    }

    /// Validate a token and recover its subject.
    ///
    /// Verifies the HS256 signature and that issuer and audience match this
    /// service's configuration. Expiry is checked only when
    /// `validate_lifetime` is set; otherwise a token is accepted forever,
    /// including tokens that carry no `exp` claim at all.
    pub fn validate(&self, token: &str) -> AuthResult<Subject> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.validate_exp = self.config.validate_lifetime;
        if !self.config.validate_lifetime {
            validation.required_spec_claims.remove("exp");
        }

        let token_data =
            decode::<serde_json::Map<String, Value>>(token, &self.decoding_key, &validation)?;

        let subject = self
            .claim_map()
            .subject_of(&token_data.claims)
            .ok_or(AuthError::MissingSubject)?;

        Ok(Subject(subject.to_string()))
    }

    /// The inbound claim mapping this service resolves subjects with
    pub fn claim_map(&self) -> &ClaimMap {
        &self.config.claim_map
    }

    /// The configuration this service was built from
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }
}
