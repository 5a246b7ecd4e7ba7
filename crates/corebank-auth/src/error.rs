//! Authentication error types
//!
//! Errors are designed to be:
//! - Informative for logging/debugging
//! - Safe for external exposure (no sensitive data leakage)
//! - Convertible to HTTP status codes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token has expired (only reachable when lifetime validation is enabled)
    #[error("Token has expired")]
    TokenExpired,

    /// Token is invalid (malformed, wrong signature, wrong issuer/audience)
    #[error("Invalid token")]
    InvalidToken,

    /// Token validated but carries no subject under the configured claim key
    #[error("Token has no subject claim")]
    MissingSubject,

    /// No credential was presented on a request that requires one
    #[error("Authentication required")]
    Unauthenticated,

    /// Login failed. Deliberately does not say whether the username exists.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Configuration error (bad signing key, unrepresentable lifetime)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::TokenExpired
            | Self::InvalidToken
            | Self::MissingSubject
            | Self::Unauthenticated
            | Self::InvalidCredentials => 401,
            Self::Config(_) => 500,
        }
    }

    /// Get an error code for the client (safe to expose)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::MissingSubject => "INVALID_TOKEN",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Config(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Safe message for the client (doesn't leak internal details).
    ///
    /// Every token-class failure collapses to the same "Invalid token"
    /// message so a caller cannot distinguish a missing credential from a
    /// forged or expired one.
    pub fn client_message(&self) -> String {
        match self {
            Self::TokenExpired | Self::InvalidToken | Self::MissingSubject | Self::Unauthenticated => {
                "Invalid token".to_string()
            }
            Self::InvalidCredentials => self.to_string(),
            Self::Config(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Error body for authentication responses, `{"message": "..."}` on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable message, safe to expose
    pub message: String,
}

impl From<&AuthError> for ErrorMessage {
    fn from(error: &AuthError) -> Self {
        Self {
            message: error.client_message(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}
