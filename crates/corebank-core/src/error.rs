//! Domain error types
//!
//! The domain layer collapses storage detail before it crosses outward.
//! `NotFound` covers both "no such account" and "held by someone else";
//! `TransferRejected` covers every transfer guard failure. The precise
//! reasons are logged, never returned.

use corebank_store::StoreError;
use thiserror::Error;

/// Domain operation errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// The account does not exist, or exists but is held by another user.
    /// The two cases are indistinguishable to callers.
    #[error("Account not found")]
    NotFound,

    /// The transfer did not commit. Carries no reason.
    #[error("Sorry, you cannot transfer money")]
    TransferRejected,

    /// The storage collaborator failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for domain operations
pub type CoreResult<T> = Result<T, CoreError>;
