//! Storage error types

use rust_decimal::Decimal;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Source and destination are the same account")]
    SameAccount,

    #[error("Source account is not held by the caller")]
    NotOwner,

    #[error("Insufficient funds: have {available}, need {required}")]
    InsufficientFunds {
        available: Decimal,
        required: Decimal,
    },

    #[error("Transaction code mismatch")]
    CodeMismatch,

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
