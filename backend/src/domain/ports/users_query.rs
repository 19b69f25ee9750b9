//! Driving port for the partner directory.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user-visible data
//! without importing outbound persistence concerns. The result type is the
//! contact projection, so partner links cannot leak through it.

use async_trait::async_trait;

use crate::domain::{Email, Error, UserContact};

/// Domain use-case port for listing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Users the caller may invite as a partner: everyone else without a
    /// partner, ordered by email.
    async fn list_available_partners(&self, caller: &Email) -> Result<Vec<UserContact>, Error>;
}

/// Fixture users query used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_available_partners(&self, caller: &Email) -> Result<Vec<UserContact>, Error> {
        const FIXTURE_EMAIL: &str = "ada@example.com";
        const FIXTURE_NAME: &str = "Ada Lovelace";

        let email = Email::new(FIXTURE_EMAIL)
            .map_err(|err| Error::internal(format!("invalid fixture email: {err}")))?;
        if &email == caller {
            return Ok(Vec::new());
        }
        Ok(vec![UserContact {
            email,
            name: Some(FIXTURE_NAME.to_owned()),
        }])
    }
}
