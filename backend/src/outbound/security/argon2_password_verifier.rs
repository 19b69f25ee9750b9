//! Argon2 implementation of the `PasswordVerifier` port.
//!
//! Stored hashes are PHC strings (`$argon2id$v=19$...`); the parameters and
//! salt travel inside the string, so verification needs no configuration.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher, PasswordVerifier as _, SaltString,
};

use crate::domain::ports::{PasswordVerifier, PasswordVerifierError};

/// Verifies passwords against Argon2 PHC hashes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordVerifier;

impl PasswordVerifier for Argon2PasswordVerifier {
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordVerifierError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|err| PasswordVerifierError::malformed_hash(err.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordVerifierError::malformed_hash(err.to_string())),
        }
    }
}

/// Hash a password with Argon2id and a random salt, returning a PHC string.
///
/// Used by provisioning tooling and tests; the API never creates users.
///
/// # Errors
///
/// Returns the underlying `password_hash` error if hashing fails.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}
