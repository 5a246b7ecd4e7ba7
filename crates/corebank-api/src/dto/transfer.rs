//! Transfer DTOs
//!
//! Inbound validation stops at structural checks (present, non-empty).
//! Amount, code, and balance guards all live in the transfer engine so
//! every rejection comes back as the same message.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use corebank_types::{AccountId, TransactionCode, TransferReceipt, TransferRequest};

/// Transfer request body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferModel {
    /// Account to debit, must belong to the caller
    #[validate(length(min = 1, message = "source account id must not be empty"))]
    pub source_account_id: String,
    /// Account to credit
    #[validate(length(min = 1, message = "destination account id must not be empty"))]
    pub destination_account_id: String,
    /// Amount to move
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
    /// One-time code for the source account
    #[validate(length(min = 1, message = "transaction code must not be empty"))]
    pub transaction_code: String,
}

impl From<TransferModel> for TransferRequest {
    fn from(model: TransferModel) -> Self {
        Self {
            source: AccountId::new(model.source_account_id),
            destination: AccountId::new(model.destination_account_id),
            amount: model.amount,
            transaction_code: TransactionCode::new(model.transaction_code),
        }
    }
}

/// Committed transfer, as returned to the initiator
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    /// Debited account
    pub source_account_id: String,
    /// Credited account
    pub destination_account_id: String,
    /// Amount moved, fixed-point decimal string
    pub amount: String,
    /// Source balance after the debit committed
    pub source_balance: String,
    /// Commit timestamp
    pub executed_at: DateTime<Utc>,
}

impl From<TransferReceipt> for TransferResponse {
    fn from(receipt: TransferReceipt) -> Self {
        Self {
            source_account_id: receipt.source.0,
            destination_account_id: receipt.destination.0,
            amount: receipt.amount.to_string(),
            source_balance: receipt.source_balance.to_string(),
            executed_at: receipt.executed_at,
        }
    }
}
