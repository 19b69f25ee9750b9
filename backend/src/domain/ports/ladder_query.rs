//! Driving ports for reading and joining ladders.
//!
//! Handlers depend on these traits instead of the service so tests can swap
//! in deterministic doubles.

use async_trait::async_trait;

use crate::domain::{
    Email, Error, Ladder, LadderId, LadderOverview, LadderSeed, default_ladder_seeds,
};

/// Use-case port for listing ladders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LadderQuery: Send + Sync {
    /// Active ladders plus the caller's current ladder.
    async fn list_ladders(&self, caller: &Email) -> Result<LadderOverview, Error>;
}

/// Use-case port for ladder membership changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LadderCommand: Send + Sync {
    /// Assign the caller to an active ladder and return it.
    async fn join_ladder(&self, caller: &Email, ladder: LadderId) -> Result<Ladder, Error>;
}

/// Seed ladders materialised with sequential ids, for running without a
/// database.
pub fn fixture_ladders() -> Result<Vec<Ladder>, Error> {
    let seeds = default_ladder_seeds()
        .map_err(|err| Error::internal(format!("invalid fixture ladder: {err}")))?;
    seeds
        .into_iter()
        .map(|LadderSeed { number, name, end_date }| {
            let id = LadderId::new(number.get())
                .map_err(|err| Error::internal(format!("invalid fixture ladder id: {err}")))?;
            Ok(Ladder {
                id,
                number,
                name,
                end_date,
                is_active: true,
            })
        })
        .collect()
}

/// Fixture query serving the seed ladders with no current ladder.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLadderQuery;

#[async_trait]
impl LadderQuery for FixtureLadderQuery {
    async fn list_ladders(&self, _caller: &Email) -> Result<LadderOverview, Error> {
        Ok(LadderOverview {
            current_ladder: None,
            all_ladders: fixture_ladders()?,
        })
    }
}

/// Fixture command accepting joins to any seed ladder without persisting.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLadderCommand;

#[async_trait]
impl LadderCommand for FixtureLadderCommand {
    async fn join_ladder(&self, _caller: &Email, ladder: LadderId) -> Result<Ladder, Error> {
        fixture_ladders()?
            .into_iter()
            .find(|candidate| candidate.id == ladder)
            .ok_or_else(|| Error::not_found(format!("ladder {ladder} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};

    #[fixture]
    fn caller() -> Email {
        Email::new("ada@example.com").expect("valid email")
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_query_lists_seed_ladders(caller: Email) {
        let overview = FixtureLadderQuery
            .list_ladders(&caller)
            .await
            .expect("fixture overview");
        assert!(overview.current_ladder.is_none());
        assert_eq!(overview.all_ladders.len(), 3);
        assert!(overview.all_ladders.iter().all(|ladder| ladder.is_active));
    }

    #[rstest]
    #[case(2, true)]
    #[case(9, false)]
    #[tokio::test]
    async fn fixture_command_joins_known_ladders(
        caller: Email,
        #[case] raw_id: i32,
        #[case] known: bool,
    ) {
        let id = LadderId::new(raw_id).expect("positive id");
        let result = FixtureLadderCommand.join_ladder(&caller, id).await;
        match (known, result) {
            (true, Ok(ladder)) => assert_eq!(ladder.id, id),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::NotFound),
            (_, other) => panic!("unexpected join outcome: {other:?}"),
        }
    }
}
