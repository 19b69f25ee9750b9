//! Driving port for the confirmed-matches listing.

use async_trait::async_trait;

use crate::domain::{Email, Error, LadderId, Match};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchQuery: Send + Sync {
    /// Confirmed matches, optionally for one ladder, newest first.
    async fn list_matches(
        &self,
        caller: &Email,
        ladder: Option<LadderId>,
    ) -> Result<Vec<Match>, Error>;
}

/// Fixture query with no recorded matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMatchQuery;

#[async_trait]
impl MatchQuery for FixtureMatchQuery {
    async fn list_matches(
        &self,
        _caller: &Email,
        _ladder: Option<LadderId>,
    ) -> Result<Vec<Match>, Error> {
        Ok(Vec::new())
    }
}
