use std::str::FromStr;

use meeple_core::config::{ConfigError, ConfigSection, MeepleConfig};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::error::DataError;
use crate::schema;

/// Connection settings for the relational store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLx connection URL (default `sqlite::memory:`).
    pub url: String,
    /// Maximum pool size (default 5).
    pub connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            connections: 5,
        }
    }
}

impl ConfigSection for DatabaseConfig {
    fn prefix() -> &'static str {
        "app.database"
    }

    fn from_config(config: &MeepleConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            url: config.get_or(&Self::key("url"), defaults.url)?,
            connections: config.get_or(&Self::key("connections"), defaults.connections)?,
        })
    }
}

impl DatabaseConfig {
    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

/// Open the process-wide pool and make sure the tables exist.
///
/// Close the pool with `SqlitePool::close` on shutdown.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DataError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.connections.max(1));
    if config.is_in_memory() {
        // Every connection to `:memory:` opens its own database, and that
        // database lives only as long as the connection.
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    info!(url = %config.url, max_connections = config.connections, "database pool ready");

    schema::create_tables(&pool).await?;
    Ok(pool)
}
