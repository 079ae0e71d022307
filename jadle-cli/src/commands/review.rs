//! Review commands

use anyhow::Result;
use clap::{Parser, Subcommand};
use jadle_store::{Database, NewReview, RestaurantId, ReviewId};

use crate::output::{print_json, print_lines, review_line};

#[derive(Parser, Debug)]
pub struct ReviewArgs {
    #[command(subcommand)]
    pub command: ReviewCommand,
}

#[derive(Subcommand, Debug)]
pub enum ReviewCommand {
    /// Add a review for a restaurant
    Add {
        /// Review text
        content: String,
        /// Restaurant id the review belongs to
        #[arg(long)]
        restaurant: i64,
        /// Reviewer name
        #[arg(long)]
        author: String,
        /// Rating from 1 to 5
        #[arg(long)]
        rating: i32,
    },
    /// List reviews, optionally for one restaurant
    List {
        /// Only reviews for this restaurant id
        #[arg(long)]
        restaurant: Option<i64>,
        /// Sort newest first (requires --restaurant)
        #[arg(long, requires = "restaurant")]
        newest_first: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a review
    Delete {
        /// Review id
        id: i64,
    },
}

pub async fn run_review(db: &Database, args: ReviewArgs) -> Result<()> {
    let store = db.reviews();
    match args.command {
        ReviewCommand::Add {
            content,
            restaurant,
            author,
            rating,
        } => {
            let draft = NewReview::new(&content, &author, rating, RestaurantId::new(restaurant))?;
            let review = store.add(&draft).await?;
            println!("Added review #{} at {}", review.id, review.formatted_created_at());
        }
        ReviewCommand::List {
            restaurant,
            newest_first,
            json,
        } => {
            let reviews = match restaurant.map(RestaurantId::new) {
                Some(id) if newest_first => {
                    store
                        .get_all_reviews_by_restaurant_sorted_newest_to_oldest(id)
                        .await?
                }
                Some(id) => store.get_all_reviews_by_restaurant(id).await?,
                None => store.get_all().await?,
            };
            if json {
                print_json(&reviews)?;
            } else {
                print_lines(&reviews, "No reviews", review_line);
            }
        }
        ReviewCommand::Delete { id } => {
            store.delete_by_id(ReviewId::new(id)).await?;
            println!("Deleted review #{}", id);
        }
    }
    Ok(())
}
