//! Password hashing
//!
//! Argon2id with library defaults. Every stored credential is a salted
//! hash; plaintext passwords never leave the verification path.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{StoreError, StoreResult};

/// Hash a password using Argon2id with a fresh random salt
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::Credential(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> StoreResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| StoreError::Credential(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(StoreError::Credential(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("test-password").unwrap();
        assert!(hash.starts_with("$argon2id$"));

        assert!(verify_password("test-password", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        let hash1 = hash_password("pass").unwrap();
        let hash2 = hash_password("pass").unwrap();

        // Fresh salt every time
        assert_ne!(hash1, hash2);
        assert!(verify_password("pass", &hash1).unwrap());
        assert!(verify_password("pass", &hash2).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(verify_password("pass", "not-a-phc-string").is_err());
    }
}
