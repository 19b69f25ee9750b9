//! PostgreSQL-backed `LadderRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LadderRepository, LadderRepositoryError};
use crate::domain::{Ladder, LadderId, LadderNumber, LadderSeed};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{LadderRow, NewLadderRow};
use super::pool::{DbPool, PoolError};
use super::schema::ladders;

/// Diesel-backed implementation of the `LadderRepository` port.
#[derive(Clone)]
pub struct DieselLadderRepository {
    pool: DbPool,
}

impl DieselLadderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> LadderRepositoryError {
    map_pool_error(error, LadderRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> LadderRepositoryError {
    map_diesel_error(
        error,
        LadderRepositoryError::query,
        LadderRepositoryError::connection,
    )
}

/// Convert a database row into a domain ladder.
pub(crate) fn row_to_ladder(row: LadderRow) -> Result<Ladder, String> {
    let id = LadderId::new(row.id).map_err(|err| format!("ladder row {}: {err}", row.id))?;
    let number =
        LadderNumber::new(row.number).map_err(|err| format!("ladder row {}: {err}", row.id))?;
    Ok(Ladder {
        id,
        number,
        name: row.name,
        end_date: row.end_date,
        is_active: row.is_active,
    })
}

#[async_trait]
impl LadderRepository for DieselLadderRepository {
    async fn list_active(&self) -> Result<Vec<Ladder>, LadderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<LadderRow> = ladders::table
            .filter(ladders::is_active.eq(true))
            .order(ladders::number.asc())
            .select(LadderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter()
            .map(|row| row_to_ladder(row).map_err(LadderRepositoryError::query))
            .collect()
    }

    async fn find_active(&self, id: LadderId) -> Result<Option<Ladder>, LadderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<LadderRow> = ladders::table
            .filter(ladders::id.eq(id.get()))
            .filter(ladders::is_active.eq(true))
            .select(LadderRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(|row| row_to_ladder(row).map_err(LadderRepositoryError::query))
            .transpose()
    }

    async fn insert_missing(&self, seeds: &[LadderSeed]) -> Result<usize, LadderRepositoryError> {
        if seeds.is_empty() {
            return Ok(0);
        }
        let rows: Vec<NewLadderRow<'_>> = seeds
            .iter()
            .map(|seed| NewLadderRow {
                number: seed.number.get(),
                name: seed.name.as_str(),
                end_date: seed.end_date,
                is_active: true,
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::insert_into(ladders::table)
            .values(&rows)
            .on_conflict(ladders::number)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(diesel_error)
    }
}
