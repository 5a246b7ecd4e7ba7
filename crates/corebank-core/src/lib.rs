//! CoreBank Domain Services
//!
//! The owner-scoped operations behind the API surface:
//!
//! - **Identity resolution**: token subject → user record
//! - **Account access control**: the single ownership gate for reads,
//!   merging "missing" and "foreign" into one not-found
//! - **Transfer engine**: atomic debit+credit with every failure
//!   collapsed to one rejection
//! - **Transaction codes**: owner-scoped generation of the short
//!   one-time codes that authorize transfers
//!
//! Services hold their collaborators as `Arc<dyn Trait>` store contracts
//! from `corebank-store`; swapping the backend never touches this crate.

pub mod access;
pub mod codes;
pub mod error;
pub mod identity;
pub mod transfer;

pub use access::AccountAccess;
pub use codes::TransactionCodes;
pub use error::{CoreError, CoreResult};
pub use identity::IdentityResolver;
pub use transfer::{TransferEngine, TransferPolicy};
