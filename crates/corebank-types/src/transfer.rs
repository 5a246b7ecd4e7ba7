//! Transfer request and receipt types

use crate::account::TransactionCode;
use crate::id::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A requested balance movement between two accounts.
///
/// Value object only; transfers are not persisted as entities. The source
/// must be owned by the initiating user and the presented code must equal
/// the source account's current one-time code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Account to debit, must belong to the initiator
    pub source: AccountId,
    /// Account to credit, any existing account
    pub destination: AccountId,
    /// Amount to move, must be positive
    pub amount: Decimal,
    /// One-time code presented as the secondary authorization factor
    pub transaction_code: TransactionCode,
}

/// Result of a committed transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Debited account
    pub source: AccountId,
    /// Credited account
    pub destination: AccountId,
    /// Amount moved
    pub amount: Decimal,
    /// Source balance after the debit committed
    pub source_balance: Decimal,
    /// Commit timestamp
    pub executed_at: DateTime<Utc>,
}
