//! Account and profile DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use corebank_types::{BankAccount, TransactionCode, User};

/// Bank account as returned to its holder.
///
/// No field exists for the national id or the stored transaction code, so
/// neither can be serialized outward by accident.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountResponse {
    /// Opaque account identifier
    pub id: String,
    /// Human-facing account number
    pub account_number: String,
    /// Card attached to the account
    pub card_id: String,
    /// Owning user
    pub owner_id: String,
    /// Owner display name
    pub owner_name: String,
    /// Current balance as a fixed-point decimal string
    pub balance: String,
    /// Whether the account is subject to audit review
    pub audited: bool,
}

impl From<BankAccount> for BankAccountResponse {
    fn from(account: BankAccount) -> Self {
        Self {
            id: account.id.0,
            account_number: account.account_number,
            card_id: account.card_id.0,
            owner_id: account.owner_id.0,
            owner_name: account.owner_name,
            balance: account.balance.to_string(),
            audited: account.audited,
        }
    }
}

/// User profile as returned by `/api/info` and `/api/account-user/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Opaque user identifier
    pub id: String,
    /// Login name
    pub user_name: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Contact email
    pub email: String,
    /// Role names
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.0,
            user_name: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
            email: user.email,
            roles: user.roles.iter().map(|r| r.as_str().to_string()).collect(),
        }
    }
}

/// Freshly generated one-time transaction code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCodeResponse {
    /// The code to present with the next transfer
    pub transaction_code: String,
}

impl From<TransactionCode> for TransactionCodeResponse {
    fn from(code: TransactionCode) -> Self {
        Self {
            transaction_code: code.0,
        }
    }
}
