//! PostgreSQL-backed `MatchRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MatchRepository, MatchRepositoryError};
use crate::domain::{LadderId, Match, UserId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::MatchRow;
use super::pool::DbPool;
use super::schema::matches;

/// Diesel-backed implementation of the `MatchRepository` port.
#[derive(Clone)]
pub struct DieselMatchRepository {
    pool: DbPool,
}

impl DieselMatchRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_match(row: MatchRow) -> Result<Match, MatchRepositoryError> {
    let ladder_id = row
        .ladder_id
        .map(LadderId::new)
        .transpose()
        .map_err(|err| MatchRepositoryError::query(format!("match row {}: {err}", row.id)))?;
    Ok(Match {
        id: row.id,
        start_at: row.start_at,
        team1_id: UserId::from_uuid(row.team1_id),
        team2_id: UserId::from_uuid(row.team2_id),
        team1_score: row.team1_score,
        team2_score: row.team2_score,
        completed: row.completed,
        confirmed: row.confirmed,
        ladder_id,
    })
}

#[async_trait]
impl MatchRepository for DieselMatchRepository {
    async fn list_confirmed(
        &self,
        ladder_id: Option<LadderId>,
    ) -> Result<Vec<Match>, MatchRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, MatchRepositoryError::connection))?;

        let mut query = matches::table
            .filter(matches::confirmed.eq(true))
            .select(MatchRow::as_select())
            .order((matches::start_at.desc(), matches::id.desc()))
            .into_boxed();
        if let Some(ladder_id) = ladder_id {
            query = query.filter(matches::ladder_id.eq(ladder_id.get()));
        }

        let rows: Vec<MatchRow> = query.load(&mut conn).await.map_err(|err| {
            map_diesel_error(
                err,
                MatchRepositoryError::query,
                MatchRepositoryError::connection,
            )
        })?;
        rows.into_iter().map(row_to_match).collect()
    }
}
