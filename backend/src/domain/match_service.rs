//! Confirmed-match listing service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{MatchQuery, MatchRepository};
use crate::domain::{Email, Error, LadderId, Match, sort_newest_first};

/// Match service implementing [`MatchQuery`].
#[derive(Clone)]
pub struct MatchService<M> {
    matches: Arc<M>,
}

impl<M> MatchService<M> {
    /// Create a new service over the match repository.
    pub fn new(matches: Arc<M>) -> Self {
        Self { matches }
    }
}

#[async_trait]
impl<M> MatchQuery for MatchService<M>
where
    M: MatchRepository,
{
    async fn list_matches(
        &self,
        _caller: &Email,
        ladder: Option<LadderId>,
    ) -> Result<Vec<Match>, Error> {
        let mut matches = self
            .matches
            .list_confirmed(ladder)
            .await
            .map_err(|err| Error::internal(format!("match repository error: {err}")))?;
        matches.retain(|record| record.confirmed);
        sort_newest_first(&mut matches);
        Ok(matches)
    }
}
