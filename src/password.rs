//! This file defines the salted and hashed password stored for each user.

use std::fmt::Display;

use bcrypt::{hash, verify};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A salted and hashed password.
///
/// Serializes as the bare hash string, which is how it is written to the user store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// The number of hashing rounds used unless configured otherwise.
    pub const DEFAULT_COST: u32 = 10;

    /// Salt and hash `raw_password` with the specified `cost`.
    ///
    /// `cost` increases the rounds of hashing and therefore the time needed to verify a password.
    /// Pass in [PasswordHash::DEFAULT_COST] to use the default cost.
    ///
    /// # Errors
    ///
    /// This function will return an error if the password could not be hashed,
    /// e.g. if `cost` is outside the range accepted by bcrypt.
    pub fn new(raw_password: &str, cost: u32) -> Result<Self, Error> {
        match hash(raw_password, cost) {
            Ok(password_hash) => Ok(Self(password_hash)),
            Err(e) => Err(Error::HashingError(e.to_string())),
        }
    }

    /// Create a new `PasswordHash` without any validation.
    ///
    /// The caller should ensure that `raw_password_hash` is a valid password hash.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if an invalid hash is provided it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(raw_password_hash: &str) -> Self {
        Self(raw_password_hash.to_string())
    }

    /// Check that `raw_password` matches the stored password.
    ///
    /// # Errors
    ///
    /// Returns [Error::HashingError] if the stored hash is malformed.
    pub fn verify(&self, raw_password: &str) -> Result<bool, Error> {
        verify(raw_password, &self.0).map_err(Error::from)
    }
}

impl Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod password_hash_tests {
    use crate::{Error, PasswordHash};

    #[test]
    fn verify_password_succeeds_for_valid_password() {
        let hash = PasswordHash::new_unchecked(
            "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm",
        );
        let password = "okon";

        assert!(hash.verify(password).unwrap());
    }

    #[test]
    fn verify_password_fails_for_invalid_password() {
        let hash = PasswordHash::new_unchecked(
            "$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm",
        );
        let password = "thewrongpassword";

        assert!(!hash.verify(password).unwrap());
    }

    #[test]
    fn verify_fails_on_malformed_hash() {
        let hash = PasswordHash::new_unchecked("definitelynotahash");

        assert!(matches!(hash.verify("pw"), Err(Error::HashingError(_))));
    }

    #[test]
    fn hash_password_produces_verifiable_hash() {
        let hash = PasswordHash::new("password123456", 4).unwrap();

        assert!(hash.verify("password123456").unwrap());
        assert!(!hash.verify("the_wrong_password").unwrap());
    }

    #[test]
    fn hash_is_not_the_plaintext() {
        let hash = PasswordHash::new("pw", 4).unwrap();

        assert_ne!(hash.as_ref(), "pw");
    }

    #[test]
    fn hash_duplicate_password_produces_unique_hash() {
        let hash = PasswordHash::new("password123456", 4).unwrap();
        let dupe_hash = PasswordHash::new("password123456", 4).unwrap();

        assert_ne!(hash, dupe_hash);
    }

    #[test]
    fn hash_uses_requested_cost() {
        let hash = PasswordHash::new("pw", PasswordHash::DEFAULT_COST).unwrap();

        assert!(hash.as_ref().starts_with("$2b$10$"));
    }

    #[test]
    fn hash_fails_on_invalid_cost() {
        let result = PasswordHash::new("pw", 99);

        assert!(matches!(result, Err(Error::HashingError(_))));
    }
}
