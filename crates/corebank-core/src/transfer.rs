//! Transfer engine
//!
//! Executes owner-initiated money transfers. The engine itself holds no
//! balances; every guard and both balance legs run inside the store's
//! atomic commit ([`AccountStore::commit_transfer`]), so two racing
//! transfers can never overdraw a source account.
//!
//! Every rejection, whatever the guard that fired, surfaces as the single
//! [`CoreError::TransferRejected`]. A caller probing foreign accounts
//! learns nothing from the response; the concrete reason is only logged.

use std::sync::Arc;

use corebank_store::{AccountStore, StoreError};
use corebank_types::{TransferReceipt, TransferRequest, UserId};

use crate::error::{CoreError, CoreResult};

/// Transfer policy toggles
#[derive(Debug, Clone)]
pub struct TransferPolicy {
    /// Clear the source's transaction code when a transfer commits,
    /// making each code single-use. Off by default: codes stay valid
    /// until the holder generates a new one.
    pub rotate_codes: bool,
}

impl Default for TransferPolicy {
    fn default() -> Self {
        Self {
            rotate_codes: false,
        }
    }
}

/// Executes transfers between accounts
pub struct TransferEngine {
    accounts: Arc<dyn AccountStore>,
    policy: TransferPolicy,
}

impl TransferEngine {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self::with_policy(accounts, TransferPolicy::default())
    }

    pub fn with_policy(accounts: Arc<dyn AccountStore>, policy: TransferPolicy) -> Self {
        Self { accounts, policy }
    }

    /// Execute a transfer on behalf of `initiator`.
    ///
    /// Delegates all guards (source ownership, code match, positive
    /// amount, distinct existing accounts, sufficient funds) to the
    /// store's atomic commit and collapses any guard failure to
    /// `TransferRejected`.
    pub async fn execute(
        &self,
        initiator: &UserId,
        request: &TransferRequest,
    ) -> CoreResult<TransferReceipt> {
        let outcome = self
            .accounts
            .commit_transfer(request, initiator, self.policy.rotate_codes)
            .await
            .map_err(|e| match e {
                StoreError::Unavailable(_) | StoreError::Credential(_) => CoreError::Store(e),
                reason => {
                    tracing::debug!(
                        initiator = %initiator,
                        source = %request.source,
                        destination = %request.destination,
                        %reason,
                        "transfer rejected"
                    );
                    CoreError::TransferRejected
                }
            })?;

        // Audit record for every committed movement
        tracing::info!(
            initiator = %initiator,
            source = %request.source,
            destination = %request.destination,
            amount = %request.amount,
            "transfer executed"
        );

        Ok(TransferReceipt {
            source: request.source.clone(),
            destination: request.destination.clone(),
            amount: request.amount,
            source_balance: outcome.source_balance,
            executed_at: outcome.executed_at,
        })
    }
}
