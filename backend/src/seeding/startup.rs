//! Startup seeding orchestration.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{LadderSeeder, SeedReport};
use crate::outbound::persistence::{DbPool, DieselLadderRepository};
use crate::seeding::config::LadderSeedSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Inserting the seed ladders failed.
    #[error("ladder seeding error: {0}")]
    Seeding(#[from] crate::domain::Error),
}

/// Apply the default ladder seeds on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled or no database is configured.
///
/// # Examples
///
/// ```rust,no_run
/// use ladder::seeding::{LadderSeedSettings, seed_ladders_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = LadderSeedSettings { enabled: false };
/// let report = seed_ladders_on_startup(&settings, None).await?;
/// assert!(report.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_ladders_on_startup(
    settings: &LadderSeedSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<SeedReport>, StartupSeedingError> {
    if !settings.is_enabled() {
        info!(reason = "disabled", "ladder seeding skipped");
        return Ok(None);
    }

    let Some(db_pool) = db_pool else {
        warn!("ladder seeding enabled but no database is configured; skipping");
        return Ok(None);
    };

    let repository = DieselLadderRepository::new(db_pool.clone());
    let report = LadderSeeder::new(Arc::new(repository))
        .seed_defaults()
        .await?;

    info!(
        created = report.created,
        existing = report.existing,
        "ladder seeding applied"
    );
    Ok(Some(report))
}
