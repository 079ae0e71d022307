//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - One pooled connection by default; callers issue operations in sequence
//! - Association integrity is kept by the repositories, not by foreign keys
//! - Transactions for multi-step operations

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

use sqlx::SqlitePool;
use tracing::info;

use crate::config::StoreConfig;
use crate::error::Result;

/// Handle to a migrated database, handing out per-entity stores.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the configured database and bring its schema up to date.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = create_pool(config).await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, running migrations on it first.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        migrations::run(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn restaurants(&self) -> RestaurantStore<'_> {
        RestaurantStore::new(&self.pool)
    }

    pub fn foodtypes(&self) -> FoodtypeStore<'_> {
        FoodtypeStore::new(&self.pool)
    }

    pub fn reviews(&self) -> ReviewStore<'_> {
        ReviewStore::new(&self.pool)
    }

    /// Empty every table in one transaction, as test teardown does between
    /// cases. On failure no table is touched.
    pub async fn clear_all(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for sql in [
            "DELETE FROM restaurant_foodtype",
            "DELETE FROM restaurant",
            "DELETE FROM foodtype",
            "DELETE FROM review",
        ] {
            sqlx::query(sql).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        info!("cleared all tables");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
