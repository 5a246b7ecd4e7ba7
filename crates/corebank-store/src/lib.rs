//! CoreBank Storage Layer
//!
//! Store contracts for users, credentials and accounts, plus the in-memory
//! backend the API server runs on. The contracts are async traits so a
//! database-backed store can replace [`MemoryStore`] without touching the
//! service layer.
//!
//! # Invariants
//!
//! 1. Balances never go negative
//! 2. A transfer debits and credits under one lock scope
//! 3. Every transfer guard is re-checked inside that scope

pub mod error;
pub mod memory;
pub mod password;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use corebank_types::{
    AccountId, BankAccount, CardId, TransactionCode, TransferRequest, User, UserId,
};

/// Balances after a committed transfer
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
    pub executed_at: DateTime<Utc>,
}

/// Read access to user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by login name
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Find a user by id
    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>>;
}

/// Credential checks against stored password hashes
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check a password for a user. `Ok(false)` means the password is
    /// wrong; errors mean the check itself could not run.
    async fn verify(&self, user: &UserId, password: &str) -> StoreResult<bool>;
}

/// Account lookup and mutation
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by id
    async fn find(&self, id: &AccountId) -> StoreResult<Option<BankAccount>>;

    /// Find an account by its owner and card
    async fn find_by_owner_and_card(
        &self,
        owner: &UserId,
        card: &CardId,
    ) -> StoreResult<Option<BankAccount>>;

    /// Store a freshly generated transaction code on an account,
    /// replacing any previous one
    async fn set_transaction_code(
        &self,
        id: &AccountId,
        code: TransactionCode,
    ) -> StoreResult<()>;

    /// Move funds between two accounts.
    ///
    /// Both legs commit atomically. Every guard (ownership, code match,
    /// sufficient funds, account existence) is evaluated inside the same
    /// lock scope as the balance updates, so a concurrent transfer can
    /// never overdraw the source. With `consume_code` the source's
    /// transaction code is cleared as part of the same commit.
    async fn commit_transfer(
        &self,
        transfer: &TransferRequest,
        owner: &UserId,
        consume_code: bool,
    ) -> StoreResult<TransferOutcome>;
}
