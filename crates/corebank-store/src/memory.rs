//! In-memory store backend
//!
//! Backs the API server with plain maps behind `tokio::sync::RwLock`.
//! Thread-safe and designed for concurrent access; the transfer commit
//! holds the account write lock across both legs so balances can never
//! interleave mid-transfer.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use corebank_types::{
    AccountId, BankAccount, CardId, TransactionCode, TransferRequest, User, UserId,
};

use crate::error::{StoreError, StoreResult};
use crate::password::{hash_password, verify_password};
use crate::{AccountStore, CredentialVerifier, TransferOutcome, UserStore};

/// In-memory store for users, credentials and accounts
#[derive(Clone)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    /// Argon2 hashes keyed by user id
    credentials: Arc<RwLock<HashMap<UserId, String>>>,
    accounts: Arc<RwLock<HashMap<AccountId, BankAccount>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            credentials: Arc::new(RwLock::new(HashMap::new())),
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a user with a password. The password is hashed before
    /// storage; the plaintext is dropped here.
    pub async fn insert_user(&self, user: User, password: &str) -> StoreResult<()> {
        let hash = hash_password(password)?;

        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(StoreError::Duplicate(format!("user {}", user.id)));
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate(format!("username {}", user.username)));
        }

        let mut credentials = self.credentials.write().await;
        credentials.insert(user.id.clone(), hash);
        users.insert(user.id.clone(), user);

        Ok(())
    }

    /// Register an account
    pub async fn insert_account(&self, account: BankAccount) -> StoreResult<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.id) {
            return Err(StoreError::Duplicate(format!("account {}", account.id)));
        }

        accounts.insert(account.id.clone(), account);
        Ok(())
    }

    /// Number of registered accounts
    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }
}

#[async_trait]
impl CredentialVerifier for MemoryStore {
    async fn verify(&self, user: &UserId, password: &str) -> StoreResult<bool> {
        let credentials = self.credentials.read().await;
        let hash = credentials
            .get(user)
            .ok_or_else(|| StoreError::NotFound(format!("credentials for user {user}")))?;

        verify_password(password, hash)
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find(&self, id: &AccountId) -> StoreResult<Option<BankAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id).cloned())
    }

    async fn find_by_owner_and_card(
        &self,
        owner: &UserId,
        card: &CardId,
    ) -> StoreResult<Option<BankAccount>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.owner_id == *owner && a.card_id == *card)
            .cloned())
    }

    async fn set_transaction_code(
        &self,
        id: &AccountId,
        code: TransactionCode,
    ) -> StoreResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("account {id}")))?;

        account.transaction_code = Some(code);
        Ok(())
    }

    async fn commit_transfer(
        &self,
        transfer: &TransferRequest,
        owner: &UserId,
        consume_code: bool,
    ) -> StoreResult<TransferOutcome> {
        if transfer.amount <= Decimal::ZERO {
            return Err(StoreError::InvalidAmount(transfer.amount));
        }
        if transfer.source == transfer.destination {
            return Err(StoreError::SameAccount);
        }

        // One write lock across guards and both legs. A racing transfer
        // sees either the pre-commit or post-commit balances, never a
        // debited-but-not-credited state.
        let mut accounts = self.accounts.write().await;

        let source = accounts
            .get(&transfer.source)
            .ok_or_else(|| StoreError::NotFound(format!("account {}", transfer.source)))?;

        if !source.is_owned_by(owner) {
            return Err(StoreError::NotOwner);
        }
        if !source.code_matches(&transfer.transaction_code) {
            return Err(StoreError::CodeMismatch);
        }
        if source.balance < transfer.amount {
            return Err(StoreError::InsufficientFunds {
                available: source.balance,
                required: transfer.amount,
            });
        }
        if !accounts.contains_key(&transfer.destination) {
            return Err(StoreError::NotFound(format!(
                "account {}",
                transfer.destination
            )));
        }

        // All guards passed; apply both legs.
        let source_balance = {
            let source = accounts
                .get_mut(&transfer.source)
                .ok_or_else(|| StoreError::NotFound(format!("account {}", transfer.source)))?;
            source.balance -= transfer.amount;
            if consume_code {
                source.transaction_code = None;
            }
            source.balance
        };

        let destination_balance = {
            let destination = accounts.get_mut(&transfer.destination).ok_or_else(|| {
                StoreError::NotFound(format!("account {}", transfer.destination))
            })?;
            destination.balance += transfer.amount;
            destination.balance
        };

        tracing::debug!(
            source = %transfer.source,
            destination = %transfer.destination,
            amount = %transfer.amount,
            "transfer committed"
        );

        Ok(TransferOutcome {
            source_balance,
            destination_balance,
            executed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use corebank_types::Role;
    use rust_decimal_macros::dec;

    fn billy() -> User {
        User {
            id: UserId::new("u-billy"),
            username: "Billy".to_string(),
            first_name: "Billy".to_string(),
            last_name: "Hunter".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1984, 6, 10).unwrap(),
            email: "garage_inc34@gmail.com".to_string(),
            roles: vec![Role::AccountHolder],
        }
    }

    fn emily() -> User {
        User {
            id: UserId::new("u-emily"),
            username: "Emily".to_string(),
            first_name: "Emily".to_string(),
            last_name: "White".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1984, 1, 24).unwrap(),
            email: "emily.white@gmail.com".to_string(),
            roles: vec![Role::AccountHolder],
        }
    }

    fn account(
        id: &str,
        card: &str,
        owner: &User,
        balance: Decimal,
        code: Option<&str>,
    ) -> BankAccount {
        BankAccount {
            id: AccountId::new(id),
            account_number: format!("CA-1000-{id}"),
            card_id: CardId::new(card),
            owner_id: owner.id.clone(),
            owner_name: owner.full_name(),
            national_id: "000-00-0000".to_string(),
            balance,
            audited: false,
            transaction_code: code.map(TransactionCode::from),
        }
    }

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert_user(billy(), "test").await.unwrap();
        store.insert_user(emily(), "pass").await.unwrap();
        store
            .insert_account(account(
                "acc-billy",
                "card-billy",
                &billy(),
                dec!(5440.50),
                Some("4T2524AULM"),
            ))
            .await
            .unwrap();
        store
            .insert_account(account(
                "acc-emily",
                "card-emily",
                &emily(),
                dec!(145700.00),
                Some("ZKJJEFXZR1"),
            ))
            .await
            .unwrap();
        store
    }

    fn transfer(amount: Decimal, code: &str) -> TransferRequest {
        TransferRequest {
            source: AccountId::new("acc-billy"),
            destination: AccountId::new("acc-emily"),
            amount,
            transaction_code: TransactionCode::from(code),
        }
    }

    #[tokio::test]
    async fn test_find_user_by_username() {
        let store = seeded_store().await;

        let user = store.find_by_username("Billy").await.unwrap().unwrap();
        assert_eq!(user.id, UserId::new("u-billy"));

        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_credential_verification() {
        let store = seeded_store().await;
        let billy_id = UserId::new("u-billy");

        assert!(store.verify(&billy_id, "test").await.unwrap());
        assert!(!store.verify(&billy_id, "wrong").await.unwrap());

        let unknown = UserId::new("u-nobody");
        assert!(matches!(
            store.verify(&unknown, "test").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = seeded_store().await;

        let mut copycat = emily();
        copycat.id = UserId::new("u-other");
        copycat.username = "Billy".to_string();

        assert!(matches!(
            store.insert_user(copycat, "x").await,
            Err(StoreError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_owner_and_card() {
        let store = seeded_store().await;

        let found = store
            .find_by_owner_and_card(&UserId::new("u-billy"), &CardId::new("card-billy"))
            .await
            .unwrap();
        assert_eq!(found.unwrap().id, AccountId::new("acc-billy"));

        // Right card, wrong owner: invisible
        let foreign = store
            .find_by_owner_and_card(&UserId::new("u-emily"), &CardId::new("card-billy"))
            .await
            .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn test_set_transaction_code_replaces_previous() {
        let store = seeded_store().await;
        let id = AccountId::new("acc-billy");

        store
            .set_transaction_code(&id, TransactionCode::from("NEWCODE123"))
            .await
            .unwrap();

        let account = store.find(&id).await.unwrap().unwrap();
        assert!(account.code_matches(&TransactionCode::from("NEWCODE123")));
        assert!(!account.code_matches(&TransactionCode::from("4T2524AULM")));
    }

    #[tokio::test]
    async fn test_set_transaction_code_unknown_account() {
        let store = seeded_store().await;
        let result = store
            .set_transaction_code(&AccountId::new("acc-ghost"), TransactionCode::from("X"))
            .await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_transfer_moves_funds() {
        let store = seeded_store().await;
        let owner = UserId::new("u-billy");

        let outcome = store
            .commit_transfer(&transfer(dec!(100.00), "4T2524AULM"), &owner, false)
            .await
            .unwrap();

        assert_eq!(outcome.source_balance, dec!(5340.50));
        assert_eq!(outcome.destination_balance, dec!(145800.00));

        let source = store.find(&AccountId::new("acc-billy")).await.unwrap().unwrap();
        let destination = store.find(&AccountId::new("acc-emily")).await.unwrap().unwrap();
        assert_eq!(source.balance, dec!(5340.50));
        assert_eq!(destination.balance, dec!(145800.00));
    }

    #[tokio::test]
    async fn test_transfer_rejects_overdraft() {
        let store = seeded_store().await;
        let owner = UserId::new("u-billy");

        let result = store
            .commit_transfer(&transfer(dec!(9999999.00), "4T2524AULM"), &owner, false)
            .await;
        assert!(matches!(result, Err(StoreError::InsufficientFunds { .. })));

        // Nothing moved
        let source = store.find(&AccountId::new("acc-billy")).await.unwrap().unwrap();
        assert_eq!(source.balance, dec!(5440.50));
    }

    #[tokio::test]
    async fn test_transfer_rejects_wrong_code() {
        let store = seeded_store().await;
        let owner = UserId::new("u-billy");

        let result = store
            .commit_transfer(&transfer(dec!(10.00), "WRONGCODE0"), &owner, false)
            .await;
        assert!(matches!(result, Err(StoreError::CodeMismatch)));
    }

    #[tokio::test]
    async fn test_transfer_rejects_when_no_code_generated() {
        let store = seeded_store().await;
        store
            .insert_account(account("acc-bare", "card-bare", &billy(), dec!(50.00), None))
            .await
            .unwrap();

        let request = TransferRequest {
            source: AccountId::new("acc-bare"),
            destination: AccountId::new("acc-emily"),
            amount: dec!(10.00),
            transaction_code: TransactionCode::from("ANYTHING00"),
        };
        let result = store
            .commit_transfer(&request, &UserId::new("u-billy"), false)
            .await;
        assert!(matches!(result, Err(StoreError::CodeMismatch)));
    }

    #[tokio::test]
    async fn test_transfer_rejects_foreign_source() {
        let store = seeded_store().await;

        // Emily attempts to debit Billy's account with Billy's valid code
        let result = store
            .commit_transfer(
                &transfer(dec!(10.00), "4T2524AULM"),
                &UserId::new("u-emily"),
                false,
            )
            .await;
        assert!(matches!(result, Err(StoreError::NotOwner)));
    }

    #[tokio::test]
    async fn test_transfer_rejects_same_account() {
        let store = seeded_store().await;

        let request = TransferRequest {
            source: AccountId::new("acc-billy"),
            destination: AccountId::new("acc-billy"),
            amount: dec!(10.00),
            transaction_code: TransactionCode::from("4T2524AULM"),
        };
        let result = store
            .commit_transfer(&request, &UserId::new("u-billy"), false)
            .await;
        assert!(matches!(result, Err(StoreError::SameAccount)));
    }

    #[tokio::test]
    async fn test_transfer_rejects_non_positive_amounts() {
        let store = seeded_store().await;
        let owner = UserId::new("u-billy");

        for amount in [dec!(0), dec!(-5.00)] {
            let result = store
                .commit_transfer(&transfer(amount, "4T2524AULM"), &owner, false)
                .await;
            assert!(matches!(result, Err(StoreError::InvalidAmount(_))));
        }
    }

    #[tokio::test]
    async fn test_transfer_rejects_unknown_destination() {
        let store = seeded_store().await;

        let request = TransferRequest {
            source: AccountId::new("acc-billy"),
            destination: AccountId::new("acc-ghost"),
            amount: dec!(10.00),
            transaction_code: TransactionCode::from("4T2524AULM"),
        };
        let result = store
            .commit_transfer(&request, &UserId::new("u-billy"), false)
            .await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));

        // The source was not debited
        let source = store.find(&AccountId::new("acc-billy")).await.unwrap().unwrap();
        assert_eq!(source.balance, dec!(5440.50));
    }

    #[tokio::test]
    async fn test_consumed_code_cannot_be_replayed() {
        let store = seeded_store().await;
        let owner = UserId::new("u-billy");

        store
            .commit_transfer(&transfer(dec!(10.00), "4T2524AULM"), &owner, true)
            .await
            .unwrap();

        // Same code again: the commit cleared it
        let result = store
            .commit_transfer(&transfer(dec!(10.00), "4T2524AULM"), &owner, true)
            .await;
        assert!(matches!(result, Err(StoreError::CodeMismatch)));

        let source = store.find(&AccountId::new("acc-billy")).await.unwrap().unwrap();
        assert!(source.transaction_code.is_none());
        assert_eq!(source.balance, dec!(5430.50));
    }

    #[tokio::test]
    async fn test_concurrent_transfers_cannot_overdraw() {
        let store = MemoryStore::new();
        store.insert_user(billy(), "test").await.unwrap();
        store.insert_user(emily(), "pass").await.unwrap();
        store
            .insert_account(account(
                "acc-billy",
                "card-billy",
                &billy(),
                dec!(100.00),
                Some("4T2524AULM"),
            ))
            .await
            .unwrap();
        store
            .insert_account(account("acc-emily", "card-emily", &emily(), dec!(0), None))
            .await
            .unwrap();

        // 10 racing transfers of 30.00 against a balance of 100.00;
        // at most 3 can commit.
        let mut handles = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .commit_transfer(
                        &transfer(dec!(30.00), "4T2524AULM"),
                        &UserId::new("u-billy"),
                        false,
                    )
                    .await
            }));
        }

        let mut committed = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                committed += 1;
            }
        }
        assert!(committed <= 3);

        let source = store.find(&AccountId::new("acc-billy")).await.unwrap().unwrap();
        let destination = store.find(&AccountId::new("acc-emily")).await.unwrap().unwrap();
        assert_eq!(source.balance, dec!(100.00) - dec!(30.00) * Decimal::from(committed));
        assert_eq!(destination.balance, dec!(30.00) * Decimal::from(committed));
        assert!(source.balance >= Decimal::ZERO);
    }
}
