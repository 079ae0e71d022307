//! Foodtype repository
//!
//! Mirror image of the restaurant repository: deleting a foodtype removes
//! only the association rows that name it.

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};

use super::restaurants::Restaurant;
use super::{foodtype_exists, restaurant_exists};
use crate::error::{Result, StoreError};
use crate::models::{FoodtypeId, NewFoodtype};

/// Foodtype record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Foodtype {
    pub id: FoodtypeId,
    pub name: String,
}

/// Foodtype repository
pub struct FoodtypeStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FoodtypeStore<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, draft: &NewFoodtype) -> Result<Foodtype> {
        let foodtype: Foodtype =
            sqlx::query_as("INSERT INTO foodtype (name) VALUES (?) RETURNING id, name")
                .bind(draft.name())
                .fetch_one(self.pool)
                .await?;

        debug!(foodtype_id = %foodtype.id, name = %foodtype.name, "added foodtype");
        Ok(foodtype)
    }

    pub async fn get_all(&self) -> Result<Vec<Foodtype>> {
        let foodtypes = sqlx::query_as("SELECT id, name FROM foodtype ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(foodtypes)
    }

    pub async fn find_by_id(&self, id: FoodtypeId) -> Result<Option<Foodtype>> {
        let foodtype = sqlx::query_as("SELECT id, name FROM foodtype WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(foodtype)
    }

    /// Delete a foodtype and its association rows (atomic).
    pub async fn delete_by_id(&self, id: FoodtypeId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM foodtype WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let unlinked = sqlx::query("DELETE FROM restaurant_foodtype WHERE foodtype_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        debug!(foodtype_id = %id, deleted, unlinked, "deleted foodtype");
        Ok(())
    }

    pub async fn clear_all(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM foodtype")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurant_foodtype")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(deleted, "cleared foodtypes");
        Ok(())
    }

    /// Associate a stored foodtype with a stored restaurant.
    pub async fn add_foodtype_to_restaurant(
        &self,
        foodtype: &Foodtype,
        restaurant: &Restaurant,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        if !foodtype_exists(&mut *tx, foodtype.id).await? {
            return Err(StoreError::not_found("foodtype", foodtype.id));
        }
        if !restaurant_exists(&mut *tx, restaurant.id).await? {
            return Err(StoreError::not_found("restaurant", restaurant.id));
        }

        sqlx::query(
            r#"
            INSERT INTO restaurant_foodtype (restaurant_id, foodtype_id)
            VALUES (?, ?)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(restaurant.id)
        .bind(foodtype.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(foodtype_id = %foodtype.id, restaurant_id = %restaurant.id, "linked foodtype to restaurant");
        Ok(())
    }

    /// Restaurants serving a foodtype, ordered by restaurant id.
    pub async fn get_all_restaurants_for_a_foodtype(&self, id: FoodtypeId) -> Result<Vec<Restaurant>> {
        let restaurants = sqlx::query_as(
            r#"
            SELECT r.id, r.name, r.address, r.zip, r.phone, r.website, r.email
            FROM restaurant r
            JOIN restaurant_foodtype rf ON rf.restaurant_id = r.id
            WHERE rf.foodtype_id = ?
            ORDER BY r.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;
        Ok(restaurants)
    }
}
