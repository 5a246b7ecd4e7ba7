//! CoreBank Crypto - identifier and code generation
//!
//! This crate provides:
//! - Opaque, URL-safe identifier generation (primary keys)
//! - Short one-time transaction code generation (secondary factor)
//!
//! # Security Invariant
//!
//! **Identifiers are never sequential or guessable.** Every identifier
//! carries at least 126 bits of CSPRNG entropy, making enumeration of
//! accounts or users infeasible.

pub mod code;
pub mod opaque;

pub use code::*;
pub use opaque::*;
