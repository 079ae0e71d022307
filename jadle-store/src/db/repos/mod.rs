//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; one repository value per call site is cheap
//! - Uses JOINs for association lists (no N+1)
//! - Uses transactions for multi-step operations (cascading deletes, guarded links)

pub mod restaurants;
pub mod foodtypes;
pub mod reviews;

pub use restaurants::{RestaurantStore, Restaurant};
pub use foodtypes::{FoodtypeStore, Foodtype};
pub use reviews::{ReviewStore, Review};

use sqlx::SqliteConnection;

use crate::error::Result;
use crate::models::{FoodtypeId, RestaurantId};

pub(crate) async fn restaurant_exists(conn: &mut SqliteConnection, id: RestaurantId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count > 0)
}

pub(crate) async fn foodtype_exists(conn: &mut SqliteConnection, id: FoodtypeId) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM foodtype WHERE id = ?")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count > 0)
}
