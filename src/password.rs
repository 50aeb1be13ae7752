//! Password hashing for user and admin accounts.
//!
//! `PasswordHash` wraps a bcrypt hash so that raw and hashed passwords cannot
//! be confused at compile time.

use std::fmt::Display;

use bcrypt::{hash, verify};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A salted and hashed password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// An alias for the default encryption cost for hashing passwords.
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    /// Hash a raw password with the specified `cost`.
    ///
    /// `cost` increases the rounds of hashing and therefore the time needed
    /// to verify a password. Pass in [PasswordHash::DEFAULT_COST] to use the
    /// recommended cost.
    ///
    /// # Errors
    /// Returns an [Error::HashingError] if the password could not be hashed.
    pub fn from_raw_password(raw_password: &str, cost: u32) -> Result<Self, Error> {
        match hash(raw_password, cost) {
            Ok(password_hash) => Ok(Self(password_hash)),
            Err(error) => Err(Error::HashingError(error.to_string())),
        }
    }

    /// Create a new `PasswordHash` without any validation.
    ///
    /// The caller should ensure that `raw_password_hash` is a valid bcrypt
    /// hash, e.g. a value read back from the database.
    pub fn new_unchecked(raw_password_hash: &str) -> Self {
        Self(raw_password_hash.to_string())
    }

    /// Check that `raw_password` matches the stored password.
    ///
    /// # Errors
    /// Returns an [Error::HashingError] if the stored hash could not be
    /// parsed by the hashing library.
    pub fn verify(&self, raw_password: &str) -> Result<bool, Error> {
        verify(raw_password, &self.0).map_err(|error| Error::HashingError(error.to_string()))
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod password_hash_tests {
    use super::PasswordHash;

    // The minimum bcrypt cost keeps these tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn verify_accepts_matching_password() {
        let hash = PasswordHash::from_raw_password("hunter2", TEST_COST).unwrap();

        assert!(hash.verify("hunter2").unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = PasswordHash::from_raw_password("hunter2", TEST_COST).unwrap();

        assert!(!hash.verify("hunter3").unwrap());
    }

    #[test]
    fn hashing_is_salted() {
        let first = PasswordHash::from_raw_password("hunter2", TEST_COST).unwrap();
        let second = PasswordHash::from_raw_password("hunter2", TEST_COST).unwrap();

        assert_ne!(first.to_string(), second.to_string());
    }
}
