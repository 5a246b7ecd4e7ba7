//! One-time transaction code generation
//!
//! Codes are a secondary authorization factor entered by hand, so they are
//! deliberately short and restricted to an unambiguous uppercase alphabet.
//! Long-form identifiers come from [`crate::opaque`] instead.

use rand::Rng;

/// Characters a transaction code may contain
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated transaction code
pub const CODE_LENGTH: usize = 10;

/// Generate a 10-character uppercase alphanumeric code.
///
/// Uniform over the alphabet via the thread-local CSPRNG. Roughly 51 bits
/// of entropy, enough for a single-use secondary factor but not for a
/// primary key.
pub fn transaction_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}
