//! Restaurant repository
//!
//! Handles restaurant CRUD plus the restaurant side of the
//! `restaurant_foodtype` association:
//! - add: INSERT ... RETURNING (id assigned by the database)
//! - delete_by_id / clear_all: owner rows and join rows in one transaction
//! - get_all_foodtypes_by_restaurant: single JOIN

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use tracing::{debug, info};

use super::foodtypes::Foodtype;
use super::{foodtype_exists, restaurant_exists};
use crate::error::{Result, StoreError};
use crate::models::{NewRestaurant, RestaurantId};

/// Restaurant record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub zip: String,
    pub phone: String,
    pub website: Option<String>,
    pub email: Option<String>,
}

/// Restaurant repository
pub struct RestaurantStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RestaurantStore<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a restaurant, returning the stored record with its new id.
    pub async fn add(&self, draft: &NewRestaurant) -> Result<Restaurant> {
        let restaurant: Restaurant = sqlx::query_as(
            r#"
            INSERT INTO restaurant (name, address, zip, phone, website, email)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, address, zip, phone, website, email
            "#,
        )
        .bind(draft.name())
        .bind(draft.address())
        .bind(draft.zip())
        .bind(draft.phone())
        .bind(draft.website())
        .bind(draft.email())
        .fetch_one(self.pool)
        .await?;

        debug!(restaurant_id = %restaurant.id, name = %restaurant.name, "added restaurant");
        Ok(restaurant)
    }

    /// All restaurants, oldest id first.
    pub async fn get_all(&self) -> Result<Vec<Restaurant>> {
        let restaurants = sqlx::query_as(
            "SELECT id, name, address, zip, phone, website, email FROM restaurant ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(restaurants)
    }

    pub async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        let restaurant = sqlx::query_as(
            "SELECT id, name, address, zip, phone, website, email FROM restaurant WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;
        Ok(restaurant)
    }

    /// Delete a restaurant and every association row that mentions it.
    ///
    /// Deleting an id that does not exist is not an error.
    pub async fn delete_by_id(&self, id: RestaurantId) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM restaurant WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let unlinked = sqlx::query("DELETE FROM restaurant_foodtype WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        debug!(restaurant_id = %id, deleted, unlinked, "deleted restaurant");
        Ok(())
    }

    /// Remove all restaurants along with the whole association table.
    pub async fn clear_all(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM restaurant")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurant_foodtype")
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(deleted, "cleared restaurants");
        Ok(())
    }

    /// Associate a stored restaurant with a stored foodtype.
    ///
    /// Both rows must still exist; linking the same pair twice is a no-op.
    pub async fn add_restaurant_to_foodtype(
        &self,
        restaurant: &Restaurant,
        foodtype: &Foodtype,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        if !restaurant_exists(&mut *tx, restaurant.id).await? {
            return Err(StoreError::not_found("restaurant", restaurant.id));
        }
        if !foodtype_exists(&mut *tx, foodtype.id).await? {
            return Err(StoreError::not_found("foodtype", foodtype.id));
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

        debug!(restaurant_id = %restaurant.id, foodtype_id = %foodtype.id, "linked restaurant to foodtype");
        Ok(())
    }

    /// Foodtypes associated with a restaurant, ordered by foodtype id.
    pub async fn get_all_foodtypes_by_restaurant(&self, id: RestaurantId) -> Result<Vec<Foodtype>> {
        let foodtypes = sqlx::query_as(
            r#"
            SELECT f.id, f.name
            FROM foodtype f
            JOIN restaurant_foodtype rf ON rf.foodtype_id = f.id
            WHERE rf.restaurant_id = ?
            ORDER BY f.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;
        Ok(foodtypes)
    }
}
