//! Backend entry-point: loads configuration, prepares the database, and
//! serves the ladder API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ladder::inbound::http::health::HealthState;
use ladder::inbound::http::session_config::{BuildMode, session_settings_from_env};
use ladder::outbound::persistence::{DbPool, run_pending_migrations};
use ladder::seeding::{LadderSeedSettings, seed_ladders_on_startup};
use ladder::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let env = DefaultEnv::new();
    let settings = ServerSettings::load_from_iter(program_name())
        .map_err(|e| std::io::Error::other(format!("invalid server settings: {e}")))?;
    let session = session_settings_from_env(&env, BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    );

    let db_pool = connect_database(&settings, &env).await?;

    let seed_settings = LadderSeedSettings::load_from_iter(program_name())
        .map_err(|e| std::io::Error::other(format!("invalid seed settings: {e}")))?;
    seed_ladders_on_startup(&seed_settings, db_pool.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    info!(bind_addr = %config.bind_addr(), "starting HTTP server");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

/// OrthoConfig also reads CLI flags; the server accepts none, so only the
/// program name is forwarded.
fn program_name() -> [OsString; 1] {
    [std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("ladder"))]
}

async fn connect_database(
    settings: &ServerSettings,
    env: &DefaultEnv,
) -> std::io::Result<Option<DbPool>> {
    let Some(pool_config) = settings.pool_config(env).map_err(std::io::Error::other)? else {
        warn!("no database configured; serving in-memory fixtures");
        return Ok(None);
    };

    if settings.run_migrations {
        let applied = run_pending_migrations(pool_config.database_url())
            .await
            .map_err(std::io::Error::other)?;
        info!(applied, "database migrations applied");
    }

    info!(database = %pool_config.redacted_url(), "connecting to database");
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(e.into_message()))?;
    Ok(Some(pool))
}
