//! Create the default ladders in the configured database.
//!
//! Safe to run repeatedly: ladders whose number already exists are left
//! untouched.

use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ladder::domain::LadderSeeder;
use ladder::outbound::persistence::{
    DbPool, DieselLadderRepository, PoolConfig, run_pending_migrations,
};
use ladder::settings::ServerSettings;

#[derive(Debug, Parser)]
#[command(name = "seed-ladders", about = "Insert the default ladders if missing")]
struct Cli {
    /// PostgreSQL URL; defaults to LADDER_DATABASE_URL or DATABASE_URL.
    #[arg(long)]
    database_url: Option<String>,
    /// Apply pending migrations before seeding.
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = ServerSettings::load_from_iter([OsString::from("seed-ladders")])?;
    let database_url = cli
        .database_url
        .or_else(|| settings.database_url(&DefaultEnv::new()))
        .ok_or("no database URL; pass --database-url or set LADDER_DATABASE_URL")?;

    if cli.migrate || settings.run_migrations {
        let applied = run_pending_migrations(&database_url).await?;
        info!(applied, "database migrations applied");
    }

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .map_err(|e| e.into_message())?;
    let report = LadderSeeder::new(Arc::new(DieselLadderRepository::new(pool)))
        .seed_defaults()
        .await?;

    info!(
        created = report.created,
        existing = report.existing,
        "ladder seeding complete"
    );
    Ok(())
}
