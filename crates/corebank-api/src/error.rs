//! API error handling
//!
//! The boundary realization of the coarse error taxonomy: every client
//! message here is deliberately generic. Which guard actually fired is
//! logged, never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use corebank_core::CoreError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Boundary errors. The Display strings are the exact client messages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login failed. Does not say whether the username exists.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Missing, forged, or otherwise unusable bearer credential
    #[error("Invalid token")]
    InvalidToken,

    /// The account does not exist or is held by someone else
    #[error("Account not found")]
    AccountNotFound,

    /// Transfer rejected, whichever guard fired
    #[error("Sorry, you cannot transfer money")]
    TransferRejected,

    /// No account under this owner carries the requested card
    #[error("Could not generate transaction code")]
    CodeGenerationFailed,

    /// Structurally invalid request body
    #[error("Invalid request: {0}")]
    InvalidParameter(String),

    /// The storage collaborator is down
    #[error("Service temporarily unavailable")]
    Unavailable,

    /// Anything that must not reach the client in detail
    #[error("An internal error occurred")]
    Internal,
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::AccountNotFound => StatusCode::NOT_FOUND,
            Self::TransferRejected | Self::CodeGenerationFailed | Self::InvalidParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body, `{"message": "..."}` on the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message, safe to expose
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound => Self::AccountNotFound,
            CoreError::TransferRejected => Self::TransferRejected,
            CoreError::Store(e) => {
                tracing::error!(error = %e, "store failure at the API boundary");
                Self::Unavailable
            }
        }
    }
}

impl From<corebank_auth::AuthError> for ApiError {
    fn from(err: corebank_auth::AuthError) -> Self {
        use corebank_auth::AuthError;
        match err {
            AuthError::InvalidCredentials => Self::InvalidCredentials,
            AuthError::Config(detail) => {
                tracing::error!(detail = %detail, "token service misconfiguration");
                Self::Internal
            }
            _ => Self::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map(|m| m.as_ref()).unwrap_or("invalid")
                    )
                })
            })
            .collect();
        Self::InvalidParameter(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corebank_store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::AccountNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::TransferRejected.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_client_messages_are_the_canonical_strings() {
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Incorrect username or password"
        );
        assert_eq!(ApiError::AccountNotFound.to_string(), "Account not found");
        assert_eq!(
            ApiError::TransferRejected.to_string(),
            "Sorry, you cannot transfer money"
        );
        assert_eq!(
            ApiError::CodeGenerationFailed.to_string(),
            "Could not generate transaction code"
        );
    }

    #[test]
    fn test_core_errors_map_to_coarse_boundary_errors() {
        assert!(matches!(
            ApiError::from(CoreError::NotFound),
            ApiError::AccountNotFound
        ));
        assert!(matches!(
            ApiError::from(CoreError::TransferRejected),
            ApiError::TransferRejected
        ));
        assert!(matches!(
            ApiError::from(CoreError::Store(StoreError::Unavailable("down".into()))),
            ApiError::Unavailable
        ));
    }

    #[test]
    fn test_internal_detail_never_reaches_the_body() {
        let err = ApiError::from(corebank_auth::AuthError::Config(
            "signing key /etc/corebank/key".to_string(),
        ));
        let body = ErrorResponse::from(&err);
        assert!(!body.message.contains("/etc/corebank"));
    }
}
