//! Driven port for ladder persistence.

use async_trait::async_trait;

use crate::domain::{Ladder, LadderId, LadderSeed};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ladder repository adapters.
    pub enum LadderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "ladder repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "ladder repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LadderRepository: Send + Sync {
    /// Active ladders ordered by ascending number.
    async fn list_active(&self) -> Result<Vec<Ladder>, LadderRepositoryError>;

    /// Fetch an active ladder by id; inactive ladders read as `None`.
    async fn find_active(&self, id: LadderId) -> Result<Option<Ladder>, LadderRepositoryError>;

    /// Insert each seed whose number is not yet taken.
    ///
    /// Existing ladders are never modified. Returns how many rows were
    /// created, so a second run over the same seeds returns zero.
    async fn insert_missing(&self, seeds: &[LadderSeed]) -> Result<usize, LadderRepositoryError>;
}
