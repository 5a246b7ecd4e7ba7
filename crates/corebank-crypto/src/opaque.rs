//! Opaque identifier generation
//!
//! Primary keys in CoreBank are unguessable strings rather than sequential
//! integers, so knowing one identifier gives no way to probe for others.

use rand::RngCore;

/// Bytes per block; two independent blocks make up one identifier.
const BLOCK_BYTES: usize = 16;

/// Length of a generated identifier: two 16-byte blocks, each 22 characters
/// after unpadded base64.
pub const OPAQUE_ID_LENGTH: usize = 44;

/// Generate an opaque, URL-safe identifier.
///
/// Draws 256 bits from the thread-local CSPRNG as two independent 128-bit
/// blocks, encodes each with unpadded URL-safe base64 (no `/`, `+`, or `=`)
/// and concatenates them. Calls are independent and share no state, so this
/// is safe from any thread. Exhaustion of the underlying randomness source
/// is fatal by the `getrandom` contract; there is no partial failure mode.
pub fn opaque_id() -> String {
    let mut id = String::with_capacity(OPAQUE_ID_LENGTH);
    for _ in 0..2 {
        let mut block = [0u8; BLOCK_BYTES];
        rand::thread_rng().fill_bytes(&mut block);
        id.push_str(&base64::Engine::encode(
            &base64::engine::general_purpose::URL_SAFE_NO_PAD,
            block,
        ));
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(id: &str) -> bool {
        id.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_id_length_is_deterministic() {
        for _ in 0..100 {
            assert_eq!(opaque_id().len(), OPAQUE_ID_LENGTH);
        }
    }

    #[test]
    fn test_ids_use_url_safe_charset() {
        for _ in 0..1000 {
            let id = opaque_id();
            assert!(is_url_safe(&id), "unexpected character in {id}");
            assert!(!id.contains('/'));
            assert!(!id.contains('+'));
            assert!(!id.contains('='));
        }
    }

    #[test]
    fn test_no_duplicates_across_100k_ids() {
        let mut seen = HashSet::with_capacity(100_000);
        for _ in 0..100_000 {
            assert!(seen.insert(opaque_id()), "duplicate identifier generated");
        }
    }
}
