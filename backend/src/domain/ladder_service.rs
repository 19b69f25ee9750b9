//! Ladder listing and membership service.
//!
//! Implements [`LadderQuery`] and [`LadderCommand`] over the user and ladder
//! repositories. Every repository failure surfaces as an internal error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    LadderCommand, LadderQuery, LadderRepository, LadderRepositoryError, UserPersistenceError,
    UserRepository,
};
use crate::domain::{Email, Error, Ladder, LadderId, LadderOverview};

/// Ladder service implementing the ladder driving ports.
#[derive(Clone)]
pub struct LadderService<U, L> {
    users: Arc<U>,
    ladders: Arc<L>,
}

impl<U, L> LadderService<U, L> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, ladders: Arc<L>) -> Self {
        Self { users, ladders }
    }
}

fn map_ladder_error(error: LadderRepositoryError) -> Error {
    Error::internal(format!("ladder repository error: {error}"))
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::MissingUser { .. } => Error::not_found("user not found"),
        other => Error::internal(format!("user repository error: {other}")),
    }
}

#[async_trait]
impl<U, L> LadderQuery for LadderService<U, L>
where
    U: UserRepository,
    L: LadderRepository,
{
    async fn list_ladders(&self, caller: &Email) -> Result<LadderOverview, Error> {
        let current_ladder = self
            .users
            .find_current_ladder(caller)
            .await
            .map_err(map_user_error)?;
        let all_ladders = self.ladders.list_active().await.map_err(map_ladder_error)?;
        Ok(LadderOverview {
            current_ladder,
            all_ladders,
        })
    }
}

#[async_trait]
impl<U, L> LadderCommand for LadderService<U, L>
where
    U: UserRepository,
    L: LadderRepository,
{
    async fn join_ladder(&self, caller: &Email, ladder_id: LadderId) -> Result<Ladder, Error> {
        let account = self
            .users
            .find_by_email(caller)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found("user not found"))?;
        let ladder = self
            .ladders
            .find_active(ladder_id)
            .await
            .map_err(map_ladder_error)?
            .ok_or_else(|| Error::not_found(format!("ladder {ladder_id} not found")))?;
        self.users
            .assign_ladder(&account.id, ladder.id)
            .await
            .map_err(map_user_error)?;
        Ok(ladder)
    }
}

#[cfg(test)]
#[path = "ladder_service_tests.rs"]
mod tests;
