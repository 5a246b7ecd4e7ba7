//! Application state shared across handlers
//!
//! Wires the token service and the four domain services around the store
//! collaborators. Constructed once at startup; handlers see it as
//! `Arc<AppState>`.

use std::sync::Arc;

use corebank_auth::TokenService;
use corebank_core::{
    AccountAccess, IdentityResolver, TransactionCodes, TransferEngine, TransferPolicy,
};
use corebank_store::{AccountStore, CredentialVerifier, UserStore};
use corebank_types::User;

use crate::error::ApiError;

/// Shared application state
pub struct AppState {
    /// Token issuance and validation
    pub tokens: Arc<TokenService>,
    /// User lookup for the login flow
    pub users: Arc<dyn UserStore>,
    /// Password verification (identity-provider collaborator)
    pub credentials: Arc<dyn CredentialVerifier>,
    /// Token subject → user record
    pub identity: IdentityResolver,
    /// The single ownership gate for account reads
    pub access: AccountAccess,
    /// Atomic balance movements
    pub transfers: TransferEngine,
    /// One-time transaction code generation
    pub codes: TransactionCodes,
}

impl AppState {
    /// Wire the services around their collaborators
    pub fn new(
        tokens: Arc<TokenService>,
        users: Arc<dyn UserStore>,
        accounts: Arc<dyn AccountStore>,
        credentials: Arc<dyn CredentialVerifier>,
        transfer_policy: TransferPolicy,
    ) -> Self {
        Self {
            tokens,
            users: users.clone(),
            credentials,
            identity: IdentityResolver::new(users.clone()),
            access: AccountAccess::new(accounts.clone(), users),
            transfers: TransferEngine::with_policy(accounts.clone(), transfer_policy),
            codes: TransactionCodes::new(accounts),
        }
    }

    /// Resolve the authenticated subject to its user record.
    ///
    /// A validated token whose subject no longer maps to a user gets the
    /// same 401 as a forged token; nothing confirms the username existed.
    pub async fn current_user(&self, subject: &str) -> Result<User, ApiError> {
        match self.identity.resolve(subject).await? {
            Some(user) => Ok(user),
            None => {
                tracing::debug!(subject, "token subject has no user record");
                Err(ApiError::InvalidToken)
            }
        }
    }
}
