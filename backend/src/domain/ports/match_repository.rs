//! Driven port for reading match results.

use async_trait::async_trait;

use crate::domain::{LadderId, Match};

use super::define_port_error;

define_port_error! {
    /// Errors raised by match repository adapters.
    pub enum MatchRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "match repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "match repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Confirmed matches, optionally restricted to one ladder, newest first.
    ///
    /// Ordering is `start_at` descending with ties broken by descending id.
    async fn list_confirmed(
        &self,
        ladder_id: Option<LadderId>,
    ) -> Result<Vec<Match>, MatchRepositoryError>;
}
