//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Email, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the email to store in the session.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Email, Error>;
}

/// In-memory authenticator used when no database is configured.
///
/// `player@example.com` / `password` authenticates; anything else is
/// rejected with the same message a real mismatch produces.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

impl FixtureLoginService {
    pub const EMAIL: &'static str = "player@example.com";
    pub const PASSWORD: &'static str = "password";
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Email, Error> {
        if credentials.email().as_ref() == Self::EMAIL && credentials.password() == Self::PASSWORD
        {
            Ok(credentials.email().clone())
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
