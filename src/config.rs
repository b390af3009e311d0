//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Every variable is optional; the
//! defaults match the `db-postgresql` deployment this service ships
//! alongside.

use std::net::SocketAddr;

use anyhow::Context;
use sqlx::postgres::PgConnectOptions;

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL server host.
    pub db_host: String,

    /// PostgreSQL server port.
    pub db_port: u16,

    /// Database name.
    pub db_name: String,

    /// Database user.
    pub db_user: String,

    /// Database password.
    pub db_password: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to working defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()
            .context("invalid LISTEN_ADDR")?;

        let db_host = std::env::var("DB_HOST").unwrap_or_else(|_| "db-postgresql".to_string());
        let db_port = parse_env("DB_PORT", 5432);
        let db_name = std::env::var("DB_NAME").unwrap_or_else(|_| "pedido".to_string());
        let db_user = std::env::var("DB_USER").unwrap_or_else(|_| "pedido_user".to_string());
        let db_password =
            std::env::var("DB_PASSWORD").unwrap_or_else(|_| "pedido_password".to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 10);
        let database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS", 2);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        Ok(Self {
            listen_addr,
            db_host,
            db_port,
            db_name,
            db_user,
            db_password,
            database_max_connections,
            database_min_connections,
            database_connect_timeout_secs,
        })
    }

    /// Builds PostgreSQL connection options from the discrete `DB_*`
    /// settings. Assembled field by field so passwords never need
    /// URL-escaping.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
