//! Driving port for the diagnostic credential probe.

use async_trait::async_trait;

use crate::domain::{AuthProbeReport, Error, LoginCredentials};

/// Reports whether credentials would authenticate without creating a session.
///
/// Store failures surface as internal errors whose message is the raw
/// adapter error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProbe: Send + Sync {
    async fn probe(&self, credentials: &LoginCredentials) -> Result<AuthProbeReport, Error>;
}

/// Fixture probe that never finds a user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthProbe;

#[async_trait]
impl AuthProbe for FixtureAuthProbe {
    async fn probe(&self, _credentials: &LoginCredentials) -> Result<AuthProbeReport, Error> {
        Ok(AuthProbeReport::not_found())
    }
}
