//! Password hashing.
//!
//! Passwords are stored only as salted bcrypt hashes; verification compares
//! hash outputs in constant time. The plaintext never leaves the signup and
//! signin handlers.

use anyhow::Result;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String> {
    hash(plain, DEFAULT_COST).map_err(Into::into)
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    verify(plain, hashed).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("hunter2").unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify_password("hunter2", &hashed).unwrap());
    }

    #[test]
    fn test_wrong_password() {
        let hashed = hash_password("hunter2").unwrap();
        assert!(!verify_password("hunter3", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();
        assert_ne!(first, second);
    }
}
