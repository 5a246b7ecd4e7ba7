//! Identity types for CoreBank
//!
//! All identity types are strongly typed wrappers around opaque strings to
//! prevent accidental mixing of different ID types. The strings themselves
//! are high-entropy, URL-safe values (see `corebank-crypto`) so that
//! identifiers cannot be enumerated or guessed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate opaque string ID types with common implementations
macro_rules! define_id_type {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id_type!(UserId, "Unique identifier for a registered user");
define_id_type!(AccountId, "Unique identifier for a bank account");
define_id_type!(CardId, "Identifier of the physical card attached to an account");
