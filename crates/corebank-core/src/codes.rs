//! Transaction code service
//!
//! Generates the short one-time codes that authorize transfers. Lookup is
//! by card id scoped to the owner, so a card id alone is never enough to
//! rotate someone else's code.

use std::sync::Arc;

use corebank_crypto::transaction_code;
use corebank_store::AccountStore;
use corebank_types::{CardId, TransactionCode, UserId};

use crate::error::{CoreError, CoreResult};

/// Generates and persists one-time transaction codes
pub struct TransactionCodes {
    accounts: Arc<dyn AccountStore>,
}

impl TransactionCodes {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Generate a fresh code for the owner's account carrying this card,
    /// replacing whatever code was stored before
    pub async fn generate(&self, owner: &UserId, card: &CardId) -> CoreResult<TransactionCode> {
        let account = self
            .accounts
            .find_by_owner_and_card(owner, card)
            .await?
            .ok_or(CoreError::NotFound)?;

        let code = TransactionCode::new(transaction_code());
        self.accounts
            .set_transaction_code(&account.id, code.clone())
            .await?;

        tracing::debug!(account = %account.id, owner = %owner, "transaction code rotated");

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use corebank_store::MemoryStore;
    use corebank_types::{AccountId, BankAccount, Role, User};
    use rust_decimal_macros::dec;

    async fn seeded() -> (TransactionCodes, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_user(
                User {
                    id: UserId::new("u-billy"),
                    username: "Billy".to_string(),
                    first_name: "Billy".to_string(),
                    last_name: "Hunter".to_string(),
                    birth_date: NaiveDate::from_ymd_opt(1984, 6, 10).unwrap(),
                    email: "garage_inc34@gmail.com".to_string(),
                    roles: vec![Role::AccountHolder],
                },
                "test",
            )
            .await
            .unwrap();
        store
            .insert_account(BankAccount {
                id: AccountId::new("acc-billy"),
                account_number: "CA-1000-20987".to_string(),
                card_id: CardId::new("card-billy"),
                owner_id: UserId::new("u-billy"),
                owner_name: "Billy Hunter".to_string(),
                national_id: "123-45-6789".to_string(),
                balance: dec!(5440.50),
                audited: false,
                transaction_code: Some(TransactionCode::from("4T2524AULM")),
            })
            .await
            .unwrap();

        (TransactionCodes::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_generates_and_persists_code() {
        let (codes, store) = seeded().await;

        let code = codes
            .generate(&UserId::new("u-billy"), &CardId::new("card-billy"))
            .await
            .unwrap();

        assert_eq!(code.as_str().len(), 10);
        assert!(code
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let account = store
            .find(&AccountId::new("acc-billy"))
            .await
            .unwrap()
            .unwrap();
        assert!(account.code_matches(&code));
        assert!(!account.code_matches(&TransactionCode::from("4T2524AULM")));
    }

    #[tokio::test]
    async fn test_regeneration_invalidates_previous_code() {
        let (codes, store) = seeded().await;
        let billy = UserId::new("u-billy");
        let card = CardId::new("card-billy");

        let first = codes.generate(&billy, &card).await.unwrap();
        let second = codes.generate(&billy, &card).await.unwrap();
        assert_ne!(first, second);

        let account = store
            .find(&AccountId::new("acc-billy"))
            .await
            .unwrap()
            .unwrap();
        assert!(account.code_matches(&second));
        assert!(!account.code_matches(&first));
    }

    #[tokio::test]
    async fn test_foreign_card_is_not_found() {
        let (codes, _) = seeded().await;

        let result = codes
            .generate(&UserId::new("u-emily"), &CardId::new("card-billy"))
            .await;
        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_unknown_card_is_not_found() {
        let (codes, _) = seeded().await;

        let result = codes
            .generate(&UserId::new("u-billy"), &CardId::new("card-ghost"))
            .await;
        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
