//! Account access control
//!
//! The single ownership gate for account reads. Every operation that
//! touches an account by id goes through here with the requesting user's
//! id; there is no path that fetches an account without it. A missing
//! account and an account held by someone else produce the same
//! [`CoreError::NotFound`], so responses never reveal whether an opaque
//! id is live.

use std::sync::Arc;

use corebank_store::{AccountStore, UserStore};
use corebank_types::{AccountId, BankAccount, User, UserId};

use crate::error::{CoreError, CoreResult};

/// Ownership-gated account reads
pub struct AccountAccess {
    accounts: Arc<dyn AccountStore>,
    users: Arc<dyn UserStore>,
}

impl AccountAccess {
    pub fn new(accounts: Arc<dyn AccountStore>, users: Arc<dyn UserStore>) -> Self {
        Self { accounts, users }
    }

    /// Fetch an account if and only if it is held by `user_id`
    pub async fn account_owned_by(
        &self,
        user_id: &UserId,
        account_id: &AccountId,
    ) -> CoreResult<BankAccount> {
        match self.accounts.find(account_id).await? {
            Some(account) if account.is_owned_by(user_id) => Ok(account),
            Some(_) => {
                tracing::debug!(
                    account = %account_id,
                    user = %user_id,
                    "account access denied, not the holder"
                );
                Err(CoreError::NotFound)
            }
            None => Err(CoreError::NotFound),
        }
    }

    /// Resolve the holder profile behind an owned account
    pub async fn holder_owned_by(
        &self,
        user_id: &UserId,
        account_id: &AccountId,
    ) -> CoreResult<User> {
        let account = self.account_owned_by(user_id, account_id).await?;

        self.users
            .find_by_id(&account.owner_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use corebank_store::MemoryStore;
    use corebank_types::{CardId, Role, TransactionCode};
    use rust_decimal_macros::dec;

    fn user(id: &str, username: &str) -> User {
        User {
            id: UserId::new(id),
            username: username.to_string(),
            first_name: username.to_string(),
            last_name: "Holder".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 3, 2).unwrap(),
            email: format!("{}@example.com", username.to_lowercase()),
            roles: vec![Role::AccountHolder],
        }
    }

    async fn seeded() -> (AccountAccess, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        store.insert_user(user("u-billy", "Billy"), "test").await.unwrap();
        store.insert_user(user("u-emily", "Emily"), "pass").await.unwrap();
        store
            .insert_account(BankAccount {
                id: AccountId::new("acc-billy"),
                account_number: "CA-1000-20987".to_string(),
                card_id: CardId::new("card-billy"),
                owner_id: UserId::new("u-billy"),
                owner_name: "Billy Holder".to_string(),
                national_id: "123-45-6789".to_string(),
                balance: dec!(5440.50),
                audited: false,
                transaction_code: Some(TransactionCode::from("4T2524AULM")),
            })
            .await
            .unwrap();

        let access = AccountAccess::new(store.clone(), store.clone());
        (access, store)
    }

    #[tokio::test]
    async fn test_holder_can_read_own_account() {
        let (access, _) = seeded().await;

        let account = access
            .account_owned_by(&UserId::new("u-billy"), &AccountId::new("acc-billy"))
            .await
            .unwrap();
        assert_eq!(account.balance, dec!(5440.50));
    }

    #[tokio::test]
    async fn test_foreign_and_missing_accounts_are_indistinguishable() {
        let (access, _) = seeded().await;
        let emily = UserId::new("u-emily");

        let foreign = access
            .account_owned_by(&emily, &AccountId::new("acc-billy"))
            .await;
        let missing = access
            .account_owned_by(&emily, &AccountId::new("acc-ghost"))
            .await;

        assert!(matches!(foreign, Err(CoreError::NotFound)));
        assert!(matches!(missing, Err(CoreError::NotFound)));
        assert_eq!(
            foreign.unwrap_err().to_string(),
            missing.unwrap_err().to_string()
        );
    }

    #[tokio::test]
    async fn test_holder_profile_resolution() {
        let (access, _) = seeded().await;

        let holder = access
            .holder_owned_by(&UserId::new("u-billy"), &AccountId::new("acc-billy"))
            .await
            .unwrap();
        assert_eq!(holder.username, "Billy");
    }

    #[tokio::test]
    async fn test_holder_of_foreign_account_is_not_found() {
        let (access, _) = seeded().await;

        let result = access
            .holder_owned_by(&UserId::new("u-emily"), &AccountId::new("acc-billy"))
            .await;
        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
