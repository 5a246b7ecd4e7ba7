//! CoreBank Types - Canonical domain types for the banking backend
//!
//! This crate contains all foundational types for CoreBank with zero
//! dependencies on other corebank crates. It defines:
//!
//! - Identity types (UserId, AccountId, CardId) as opaque string wrappers
//! - User profiles and role names
//! - Bank accounts with their balance and one-time transaction code
//! - Transfer request/receipt value objects
//!
//! # Architectural Invariants
//!
//! These types support the core CoreBank authorization invariants:
//!
//! 1. Every account has exactly one owner and `owner_id` never changes
//! 2. `balance >= 0` after every committed transfer
//! 3. Identifiers are opaque and high-entropy, never sequential
//! 4. The national id never crosses the API boundary

pub mod account;
pub mod id;
pub mod transfer;
pub mod user;

pub use account::*;
pub use id::*;
pub use transfer::*;
pub use user::*;
