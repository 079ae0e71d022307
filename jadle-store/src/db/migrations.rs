//! Schema migrations for the restaurant, foodtype and review tables
//!
//! Every statement is idempotent, so `run` is safe on each startup.
//! The join table carries no foreign keys; the stores keep it consistent
//! by deleting association rows together with their owners.

use sqlx::SqlitePool;

use crate::Result;

const TABLES: &[(&str, &str)] = &[
    (
        "restaurant",
        r#"
        CREATE TABLE IF NOT EXISTS restaurant (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            zip TEXT NOT NULL,
            phone TEXT NOT NULL,
            website TEXT,
            email TEXT
        )
        "#,
    ),
    (
        "foodtype",
        r#"
        CREATE TABLE IF NOT EXISTS foodtype (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    ),
    (
        "review",
        r#"
        CREATE TABLE IF NOT EXISTS review (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            author TEXT NOT NULL,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            restaurant_id INTEGER NOT NULL,
            created_at INTEGER NOT NULL
        )
        "#,
    ),
    (
        "restaurant_foodtype",
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_foodtype (
            restaurant_id INTEGER NOT NULL,
            foodtype_id INTEGER NOT NULL,
            PRIMARY KEY (restaurant_id, foodtype_id)
        )
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_review_restaurant_created ON review(restaurant_id, created_at)",
    "CREATE INDEX IF NOT EXISTS idx_restaurant_foodtype_foodtype ON restaurant_foodtype(foodtype_id)",
];

/// Run all migrations
pub async fn run(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Running jadle migrations...");

    for (table, ddl) in TABLES {
        tracing::debug!(table, "ensuring table");
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("jadle migrations complete");
    Ok(())
}
