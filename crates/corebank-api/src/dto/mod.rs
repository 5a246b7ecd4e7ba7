//! Data Transfer Objects
//!
//! Request and response structures for the API, camelCase on the wire.
//! Response DTOs are built from the domain types and deliberately have no
//! field for the national id or the stored transaction code; the only way
//! a code leaves the system is the code-generation endpoint.

pub mod account;
pub mod auth;
pub mod transfer;

pub use account::*;
pub use auth::*;
pub use transfer::*;
