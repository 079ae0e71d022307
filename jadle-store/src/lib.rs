//! jadle-store: data-access layer for the jadle restaurant-review app
//!
//! Restaurants, foodtypes and reviews live in three tables plus the
//! `restaurant_foodtype` join table. Each entity has a store exposing
//! add / get_all / delete_by_id / clear_all; restaurant and foodtype stores
//! also maintain the association and cascade it on delete.
//!
//! ```ignore
//! let db = Database::connect(&StoreConfig::from_env()?).await?;
//! let sushi = db.foodtypes().add(&NewFoodtype::new("Sushi")?).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::StoreConfig;
pub use db::{Database, Foodtype, FoodtypeStore, Restaurant, RestaurantStore, Review, ReviewStore};
pub use error::{Result, StoreError};
pub use models::{
    FoodtypeId, NewFoodtype, NewRestaurant, NewReview, Rating, RestaurantId, ReviewId,
    ValidationError,
};
