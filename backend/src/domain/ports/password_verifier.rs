//! Driven port for checking passwords against stored hashes.

use super::define_port_error;

define_port_error! {
    /// Errors raised while verifying a password.
    pub enum PasswordVerifierError {
        /// The stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Verifies a plaintext password against a stored PHC hash string.
///
/// A mismatch is `Ok(false)`; only unusable hashes are errors.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordVerifierError>;
}
