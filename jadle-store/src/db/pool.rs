//! Database connection pool management
//!
//! Uses an sqlx SqlitePool with explicit connection limits.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Create a SQLite connection pool.
///
/// File databases are created if missing. In-memory databases are pinned
/// to a single connection that is never recycled, since every SQLite
/// connection to `:memory:` sees its own private database.
///
/// # Errors
///
/// Returns [`StoreError::Config`] for an unparsable URL and
/// [`StoreError::Connection`] if the database cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&StoreConfig::new("sqlite://jadle.db")).await?;
/// ```
pub async fn create_pool(config: &StoreConfig) -> Result<SqlitePool> {
    if !config.database_url.starts_with("sqlite:") {
        return Err(StoreError::Config(format!(
            "unsupported database url '{}': expected a sqlite: URL",
            config.database_url
        )));
    }

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| {
            StoreError::Config(format!(
                "invalid database url '{}': {}",
                config.database_url, e
            ))
        })?
        .create_if_missing(true);

    let max_connections = if config.is_in_memory() {
        1
    } else {
        config.max_connections
    };

    debug!(
        url = %config.database_url,
        max_connections,
        "opening database pool"
    );

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(StoreError::Connection)
}
