//! Domain models with validation at construction
//!
//! Drafts (`New*`) are what callers build; the stores turn them into
//! persisted records carrying a database-assigned id.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod ids;
pub mod restaurant;
pub mod foodtype;
pub mod review;

pub use validation::ValidationError;
pub use ids::{FoodtypeId, RestaurantId, ReviewId};
pub use restaurant::NewRestaurant;
pub use foodtype::NewFoodtype;
pub use review::{format_created_at, NewReview, Rating};
