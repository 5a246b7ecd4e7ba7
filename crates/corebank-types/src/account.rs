//! Bank account types

use crate::id::{AccountId, CardId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-time secondary authorization value bound to a single account.
///
/// Short (10 characters, `A-Z0-9`) so it can be read off a card terminal or
/// SMS and typed by hand, unlike the long-form opaque identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionCode(pub String);

impl TransactionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A bank account with exactly one owner.
///
/// Invariants: `balance >= 0` after every committed transfer (overdraft is
/// not allowed) and `owner_id` never changes after creation. The national
/// id is sensitive and must never cross the API boundary; the response DTOs
/// in `corebank-api` deliberately have no field for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Opaque, globally unique identifier
    pub id: AccountId,
    /// Human-facing account number (e.g. "CA-1000-20987")
    pub account_number: String,
    /// Identifier of the physical card attached to this account
    pub card_id: CardId,
    /// Owning user, fixed at creation
    pub owner_id: UserId,
    /// Owner display name, denormalized for statements
    pub owner_name: String,
    /// National identification number. Sensitive; internal use only.
    pub national_id: String,
    /// Current balance, fixed-point decimal
    pub balance: Decimal,
    /// Whether the account is subject to audit review
    pub audited: bool,
    /// Current one-time transaction code, absent until first generated
    pub transaction_code: Option<TransactionCode>,
}

impl BankAccount {
    /// Whether the given user owns this account
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_id == *user_id
    }

    /// Whether the stored one-time code matches a presented value
    pub fn code_matches(&self, presented: &TransactionCode) -> bool {
        self.transaction_code
            .as_ref()
            .is_some_and(|code| code == presented)
    }
}
