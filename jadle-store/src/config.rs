//! Store configuration (environment variables + defaults).
//!
//! Environment variables:
//!   JADLE_DATABASE_URL      # Preferred database URL
//!   DATABASE_URL            # Fallback database URL
//!   JADLE_MAX_CONNECTIONS   # Pool size (default: 1)
//!
//! A `.env` file in the current directory is loaded first; variables that
//! are already set are not overwritten.

use tracing::debug;

use crate::error::{Result, StoreError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://jadle.db";

/// One connection: every operation is issued by a single caller in sequence.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Where the store lives and how many connections it may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// A private in-memory database that disappears with the pool.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL)
    }

    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded .env from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("JADLE_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("JADLE_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(StoreError::Config(format!(
                        "JADLE_MAX_CONNECTIONS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
        };

        Ok(Self {
            database_url,
            max_connections,
        })
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}
