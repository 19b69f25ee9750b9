//! Credential authentication over stored password hashes.
//!
//! [`CredentialAuthService`] backs both the login flow and the diagnostic
//! probe. Unknown emails and wrong passwords produce the same error so the
//! login endpoint does not reveal which accounts exist.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{AuthProbe, LoginService, PasswordVerifier, UserRepository};
use crate::domain::{AuthProbeReport, Email, Error, LoginCredentials};

/// Message returned for any failed login.
pub const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Authenticates credentials against the user repository.
#[derive(Clone)]
pub struct CredentialAuthService<U, V> {
    users: Arc<U>,
    verifier: Arc<V>,
}

impl<U, V> CredentialAuthService<U, V> {
    /// Create a new service from a user repository and hash verifier.
    pub fn new(users: Arc<U>, verifier: Arc<V>) -> Self {
        Self { users, verifier }
    }
}

#[async_trait]
impl<U, V> LoginService for CredentialAuthService<U, V>
where
    U: UserRepository,
    V: PasswordVerifier,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Email, Error> {
        let stored = self
            .users
            .find_credentials(credentials.email())
            .await
            .map_err(|err| Error::internal(format!("user repository error: {err}")))?
            .ok_or_else(|| Error::unauthorized(INVALID_CREDENTIALS))?;

        let matches = self
            .verifier
            .verify(credentials.password(), stored.password_hash.as_str())
            .map_err(|err| Error::internal(format!("credential check failed: {err}")))?;

        if matches {
            Ok(stored.account.email)
        } else {
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[async_trait]
impl<U, V> AuthProbe for CredentialAuthService<U, V>
where
    U: UserRepository,
    V: PasswordVerifier,
{
    async fn probe(&self, credentials: &LoginCredentials) -> Result<AuthProbeReport, Error> {
        let Some(stored) = self
            .users
            .find_credentials(credentials.email())
            .await
            .map_err(|err| Error::internal(err.to_string()))?
        else {
            return Ok(AuthProbeReport::not_found());
        };

        let password_match = self
            .verifier
            .verify(credentials.password(), stored.password_hash.as_str())
            .map_err(|err| Error::internal(err.to_string()))?;

        Ok(AuthProbeReport {
            found: true,
            password_match,
            account: Some(stored.account),
        })
    }
}
