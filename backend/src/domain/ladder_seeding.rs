//! Idempotent bootstrap of the fixed ladders.
//!
//! Seeding inserts each ladder whose number is not yet taken and leaves
//! existing rows alone, so running it repeatedly converges on exactly the
//! seeded set.

use std::sync::Arc;

use crate::domain::ports::LadderRepository;
use crate::domain::{Error, LadderSeed, default_ladder_seeds};

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Ladders inserted by this run.
    pub created: usize,
    /// Ladders that already existed and were left unchanged.
    pub existing: usize,
}

/// Applies ladder seeds through the ladder repository.
#[derive(Clone)]
pub struct LadderSeeder<L> {
    ladders: Arc<L>,
}

impl<L> LadderSeeder<L>
where
    L: LadderRepository,
{
    pub fn new(ladders: Arc<L>) -> Self {
        Self { ladders }
    }

    /// Seed the three default ladders.
    pub async fn seed_defaults(&self) -> Result<SeedReport, Error> {
        let seeds = default_ladder_seeds()
            .map_err(|err| Error::internal(format!("invalid ladder seed: {err}")))?;
        self.seed(&seeds).await
    }

    /// Insert any of `seeds` whose number is not yet present.
    pub async fn seed(&self, seeds: &[LadderSeed]) -> Result<SeedReport, Error> {
        let created = self
            .ladders
            .insert_missing(seeds)
            .await
            .map_err(|err| Error::internal(format!("ladder seeding failed: {err}")))?;
        Ok(SeedReport {
            created,
            existing: seeds.len().saturating_sub(created),
        })
    }
}
