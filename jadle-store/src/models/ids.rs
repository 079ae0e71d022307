//! Surrogate ids assigned by the database on insert

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

surrogate_id!(
    /// Primary key of the `restaurant` table
    RestaurantId
);
surrogate_id!(
    /// Primary key of the `foodtype` table
    FoodtypeId
);
surrogate_id!(
    /// Primary key of the `review` table
    ReviewId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_raw_value() {
        assert_eq!(RestaurantId::new(42).to_string(), "42");
        assert_eq!(FoodtypeId::from(7).get(), 7);
    }
}
