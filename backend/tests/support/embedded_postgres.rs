//! Per-test databases and raw fixture inserts.
//!
//! Each test gets a database cloned from a template that already has the
//! embedded migrations applied. Users and matches are inserted with the
//! synchronous `postgres` client because the service never creates them.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use ladder::outbound::persistence::run_pending_migrations_blocking;
use ladder::outbound::security::hash_password;
use pg_embedded_setup_unpriv::test_support::hash_directory;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Template names embed a hash of the migrations so schema edits rebuild it.
fn template_database_name() -> Result<String, String> {
    let hash = hash_directory(migrations_dir()).map_err(|err| format!("hash migrations: {err}"))?;
    let short_hash = hash.get(..8).unwrap_or(&hash);
    Ok(format!("ladder_template_{short_hash}"))
}

fn ensure_template_database(cluster: &ClusterHandle) -> Result<String, String> {
    let template_name = template_database_name()?;
    let _lock = TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let exists = cluster
        .database_exists(template_name.as_str())
        .map_err(|err| format!("template check: {err:?}"))?;
    if !exists {
        cluster
            .create_database(template_name.as_str())
            .map_err(|err| format!("create template: {err:?}"))?;
        let url = cluster.connection().database_url(&template_name);
        run_pending_migrations_blocking(&url).map_err(|err| err.to_string())?;
    }
    Ok(template_name)
}

/// Provision a fresh migrated database for one test.
pub fn provision_template_database(cluster: &ClusterHandle) -> Result<TemporaryDatabase, String> {
    let template_name = ensure_template_database(cluster)?;
    let db_name = format!("test_{}", Uuid::new_v4().simple());
    cluster
        .temporary_database_from_template(db_name.as_str(), template_name.as_str())
        .map_err(|err| format!("create database from template: {err:?}"))
}

/// A user row inserted for a test, with its clear-text password.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

impl StoredUser {
    pub fn new(email: &str, name: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            name: name.map(str::to_owned),
            password: format!("pw-{email}"),
        }
    }
}

fn connect(url: &str) -> Result<Client, String> {
    Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))
}

/// Insert `user` with an Argon2 hash of its password.
pub fn insert_user(url: &str, user: &StoredUser) -> Result<(), String> {
    let hash = hash_password(&user.password).map_err(|err| err.to_string())?;
    connect(url)?
        .execute(
            "INSERT INTO users (id, email, name, password) VALUES ($1, $2, $3, $4)",
            &[&user.id, &user.email, &user.name, &hash],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

/// Insert a completed match and return its id.
pub fn insert_match(
    url: &str,
    start_at: DateTime<Utc>,
    teams: (Uuid, Uuid),
    ladder_id: Option<i32>,
    confirmed: bool,
) -> Result<i32, String> {
    let row = connect(url)?
        .query_one(
            "INSERT INTO matches \
             (start_at, team1_id, team2_id, team1_score, team2_score, completed, confirmed, ladder_id) \
             VALUES ($1, $2, $3, 6, 4, TRUE, $4, $5) RETURNING id",
            &[&start_at, &teams.0, &teams.1, &confirmed, &ladder_id],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
