//! Review draft validation and timestamp handling
//!
//! Creation time is stamped when the draft is built, not by the database,
//! and truncated to whole milliseconds so that the value written to the
//! `created_at` column reads back identically.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::validation::required;
use super::{RestaurantId, ValidationError};

const MAX_CONTENT_LEN: usize = 4096;
const MAX_AUTHOR_LEN: usize = 128;

/// Display format for review timestamps, always rendered in UTC.
const CREATED_AT_FORMAT: &str = "%m/%d/%Y @ %I:%M %p";

/// Star rating from 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Rating(i32);

impl Rating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                min: Self::MIN.into(),
                max: Self::MAX.into(),
                value: value.into(),
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// A review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    content: String,
    author: String,
    rating: Rating,
    restaurant_id: RestaurantId,
    created_at: DateTime<Utc>,
}

impl NewReview {
    /// Create a review draft stamped with the current time.
    ///
    /// # Example
    /// ```
    /// use jadle_store::models::{NewReview, RestaurantId};
    ///
    /// let review = NewReview::new("foodcoma!", "Captain Kirk", 3, RestaurantId::new(1)).unwrap();
    /// assert_eq!(review.rating().get(), 3);
    /// assert!(NewReview::new("great", "Kim", 6, RestaurantId::new(1)).is_err());
    /// ```
    pub fn new(
        content: &str,
        author: &str,
        rating: i32,
        restaurant_id: RestaurantId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            content: required("content", content, MAX_CONTENT_LEN)?,
            author: required("author", author, MAX_AUTHOR_LEN)?,
            rating: Rating::new(rating)?,
            restaurant_id,
            created_at: Utc::now().trunc_subsecs(3),
        })
    }

    /// Override the creation time (e.g. when importing historical reviews).
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at.trunc_subsecs(3);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn creation_time(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn formatted_created_at(&self) -> String {
        format_created_at(&self.created_at)
    }
}

/// Render a review timestamp for display, e.g. `03/14/2024 @ 09:26 PM`.
pub fn format_created_at(at: &DateTime<Utc>) -> String {
    at.format(CREATED_AT_FORMAT).to_string()
}
