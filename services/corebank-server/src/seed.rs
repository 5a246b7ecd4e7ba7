//! Demo data seeding
//!
//! Registers the demo users and accounts on startup so the server is
//! usable out of the box. Fixed account and card identifiers keep demo
//! clients stable across restarts; user identifiers are freshly generated
//! opaque values, since nothing outside the process refers to them.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use corebank_crypto::opaque_id;
use corebank_store::MemoryStore;
use corebank_types::{
    AccountId, BankAccount, CardId, Role, TransactionCode, User, UserId,
};

/// Seed the demo users and their accounts
pub async fn seed_demo_data(store: &Arc<MemoryStore>) -> anyhow::Result<()> {
    let billy = User {
        id: UserId::new(opaque_id()),
        username: "billy".to_string(),
        first_name: "Billy".to_string(),
        last_name: "Hunter".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1984, 6, 10)
            .ok_or_else(|| anyhow::anyhow!("invalid seed birth date"))?,
        email: "garage_inc34@gmail.com".to_string(),
        roles: vec![Role::AccountHolder],
    };
    let emily = User {
        id: UserId::new(opaque_id()),
        username: "emily".to_string(),
        first_name: "Emily".to_string(),
        last_name: "White".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1987, 1, 24)
            .ok_or_else(|| anyhow::anyhow!("invalid seed birth date"))?,
        email: "emily.white@gmail.com".to_string(),
        roles: vec![Role::AccountHolder],
    };
    let michael = User {
        id: UserId::new(opaque_id()),
        username: "michael".to_string(),
        first_name: "Michael".to_string(),
        last_name: "Reed".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1979, 9, 3)
            .ok_or_else(|| anyhow::anyhow!("invalid seed birth date"))?,
        email: "michael.reed@corebank.dev".to_string(),
        roles: vec![Role::Auditor],
    };

    let billy_account = BankAccount {
        id: AccountId::new("gb86hDWnxR2FIX643bXLkAP9K0jRhlL_Xd9_AYlq5ykw"),
        account_number: "CA-1000-20987".to_string(),
        card_id: CardId::new("C3CA7CDA-59F0-4AF3-A10D-C9E29B4AAB70"),
        owner_id: billy.id.clone(),
        owner_name: billy.full_name(),
        national_id: "123-45-6789".to_string(),
        balance: dec!(5440.50),
        audited: false,
        transaction_code: Some(TransactionCode::from("4T2524AULM")),
    };
    let emily_account = BankAccount {
        id: AccountId::new("QgQEPd-97Jtp8HcCwhTFKAjnDsO9A1rfWmNpdUwFZS6Q"),
        account_number: "CA-1000-20988".to_string(),
        card_id: CardId::new("322FAF46-F25E-494D-9015-09DE757B129D"),
        owner_id: emily.id.clone(),
        owner_name: emily.full_name(),
        national_id: "456-78-901".to_string(),
        balance: dec!(145700.00),
        audited: false,
        transaction_code: Some(TransactionCode::from("ZKJJEFXZR1")),
    };

    store.insert_user(billy, "test").await?;
    store.insert_user(emily, "pass").await?;
    store.insert_user(michael, "secret").await?;
    store.insert_account(billy_account).await?;
    store.insert_account(emily_account).await?;

    tracing::info!(
        users = 3,
        accounts = store.account_count().await,
        "Seeded demo data"
    );

    Ok(())
}
