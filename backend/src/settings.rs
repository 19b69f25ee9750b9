//! Server settings loaded via OrthoConfig.
//!
//! Values come from `LADDER_*` environment variables (and any configuration
//! file OrthoConfig discovers). The database URL also honours the
//! conventional `DATABASE_URL` variable when `LADDER_DATABASE_URL` is unset.

use std::net::SocketAddr;

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::PoolConfig;

/// Bind address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Fallback environment variable for the database URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while interpreting server settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
    #[error("database pool size must be positive")]
    ZeroPoolSize,
}

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LADDER")]
pub struct ServerSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address the server binds to.
    pub bind_addr: Option<String>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    /// Resolve the database URL, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    pub fn database_url<E: Env>(&self, env: &E) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env.string(DATABASE_URL_ENV))
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
    }

    /// Parse the configured bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).trim();
        raw.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            }
        })
    }

    /// Pool configuration for the resolved database URL, if any.
    pub fn pool_config<E: Env>(&self, env: &E) -> Result<Option<PoolConfig>, SettingsError> {
        let Some(url) = self.database_url(env) else {
            return Ok(None);
        };
        let config = PoolConfig::new(url);
        match self.db_max_connections {
            Some(0) => Err(SettingsError::ZeroPoolSize),
            Some(max) => Ok(Some(config.with_max_size(max))),
            None => Ok(Some(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use mockable::MockEnv;
    use rstest::rstest;

    const SETTINGS_VARS: [&str; 4] = [
        "LADDER_DATABASE_URL",
        "LADDER_BIND_ADDR",
        "LADDER_RUN_MIGRATIONS",
        "LADDER_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    fn settings(database_url: Option<&str>, max: Option<u32>) -> ServerSettings {
        ServerSettings {
            database_url: database_url.map(str::to_owned),
            bind_addr: None,
            run_migrations: false,
            db_max_connections: max,
        }
    }

    fn env_with_database_url(value: Option<&'static str>) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_string()
            .returning(move |key| value.filter(|_| key == DATABASE_URL_ENV).map(str::to_owned));
        env
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(SETTINGS_VARS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert!(settings.database_url.is_none());
        assert!(!settings.run_migrations);
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid literal")
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LADDER_DATABASE_URL", Some("postgres://db/ladder".to_owned())),
            ("LADDER_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("LADDER_RUN_MIGRATIONS", Some("true".to_owned())),
            ("LADDER_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.database_url.as_deref(), Some("postgres://db/ladder"));
        assert!(settings.run_migrations);
        assert_eq!(settings.db_max_connections, Some(4));
        assert_eq!(
            settings.bind_addr().expect("valid bind address").port(),
            9000
        );
    }

    #[rstest]
    #[case(Some("postgres://own"), Some("postgres://fallback"), Some("postgres://own"))]
    #[case(None, Some("postgres://fallback"), Some("postgres://fallback"))]
    #[case(Some("   "), None, None)]
    #[case(None, None, None)]
    fn database_url_prefers_prefixed_value(
        #[case] configured: Option<&str>,
        #[case] fallback: Option<&'static str>,
        #[case] expected: Option<&str>,
    ) {
        let env = env_with_database_url(fallback);
        assert_eq!(
            settings(configured, None).database_url(&env).as_deref(),
            expected
        );
    }

    #[rstest]
    fn invalid_bind_address_is_reported() {
        let mut settings = settings(None, None);
        settings.bind_addr = Some("not-an-address".to_owned());
        let err = settings.bind_addr().expect_err("invalid address");
        assert!(matches!(err, SettingsError::InvalidBindAddr { ref value, .. } if value == "not-an-address"));
    }

    #[rstest]
    fn pool_config_applies_max_connections() {
        let env = env_with_database_url(None);
        let config = settings(Some("postgres://db"), Some(3))
            .pool_config(&env)
            .expect("valid settings")
            .expect("database configured");
        assert_eq!(config.max_size(), 3);
        assert_eq!(config.database_url(), "postgres://db");
    }

    #[rstest]
    fn zero_pool_size_is_rejected() {
        let env = env_with_database_url(None);
        assert_eq!(
            settings(Some("postgres://db"), Some(0))
                .pool_config(&env)
                .expect_err("zero pool size"),
            SettingsError::ZeroPoolSize
        );
    }
}
