//! Review repository
//!
//! Reviews are insert-only: add, list, delete. `created_at` is persisted as
//! INTEGER milliseconds since the epoch (UTC) so the value a caller stamped
//! on the draft is exactly the value read back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{format_created_at, NewReview, Rating, RestaurantId, ReviewId};

/// Review record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: ReviewId,
    pub content: String,
    pub author: String,
    pub rating: Rating,
    pub restaurant_id: RestaurantId,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creation time as stored: milliseconds since the Unix epoch.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }

    pub fn formatted_created_at(&self) -> String {
        format_created_at(&self.created_at)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Review {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            author: row.try_get("author")?,
            rating: row.try_get("rating")?,
            restaurant_id: row.try_get("restaurant_id")?,
            created_at: millis_to_datetime(row.try_get("created_at")?)?,
        })
    }
}

fn millis_to_datetime(millis: i64) -> sqlx::Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "created_at".to_owned(),
        source: format!("timestamp out of range: {}", millis).into(),
    })
}

const REVIEW_COLUMNS: &str = "id, content, author, rating, restaurant_id, created_at";

/// Review repository
pub struct ReviewStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewStore<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a review, keeping the draft's creation time.
    ///
    /// The owning restaurant is not checked; a review may point at a
    /// restaurant id that was never stored.
    pub async fn add(&self, draft: &NewReview) -> Result<Review> {
        let sql = format!(
            "INSERT INTO review (content, author, rating, restaurant_id, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            REVIEW_COLUMNS
        );
        let review: Review = sqlx::query_as(&sql)
            .bind(draft.content())
            .bind(draft.author())
            .bind(draft.rating())
            .bind(draft.restaurant_id())
            .bind(draft.creation_time().timestamp_millis())
            .fetch_one(self.pool)
            .await?;

        debug!(
            review_id = %review.id,
            restaurant_id = %review.restaurant_id,
            rating = review.rating.get(),
            "added review"
        );
        Ok(review)
    }

    pub async fn get_all(&self) -> Result<Vec<Review>> {
        let sql = format!("SELECT {} FROM review ORDER BY id", REVIEW_COLUMNS);
        let reviews = sqlx::query_as(&sql).fetch_all(self.pool).await?;
        Ok(reviews)
    }

    pub async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>> {
        let sql = format!("SELECT {} FROM review WHERE id = ?", REVIEW_COLUMNS);
        let review = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(review)
    }

    /// Reviews for one restaurant in insertion order.
    pub async fn get_all_reviews_by_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT {} FROM review WHERE restaurant_id = ? ORDER BY id",
            REVIEW_COLUMNS
        );
        let reviews = sqlx::query_as(&sql)
            .bind(restaurant_id)
            .fetch_all(self.pool)
            .await?;
        Ok(reviews)
    }

    /// Reviews for one restaurant, newest first.
    ///
    /// Reviews sharing a timestamp are ordered by id, most recent insert first.
    pub async fn get_all_reviews_by_restaurant_sorted_newest_to_oldest(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT {} FROM review WHERE restaurant_id = ? ORDER BY created_at DESC, id DESC",
            REVIEW_COLUMNS
        );
        let reviews = sqlx::query_as(&sql)
            .bind(restaurant_id)
            .fetch_all(self.pool)
            .await?;
        Ok(reviews)
    }

    /// Delete a single review. Unknown ids are ignored.
    pub async fn delete_by_id(&self, id: ReviewId) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM review WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        debug!(review_id = %id, deleted, "deleted review");
        Ok(())
    }

    pub async fn clear_all(&self) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM review")
            .execute(self.pool)
            .await?
            .rows_affected();

        info!(deleted, "cleared reviews");
        Ok(())
    }
}
