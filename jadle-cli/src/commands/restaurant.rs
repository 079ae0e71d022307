//! Restaurant commands

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jadle_store::{Database, FoodtypeId, NewRestaurant, RestaurantId};
use serde::Serialize;

use crate::output::{foodtype_line, print_json, print_lines, restaurant_line};

#[derive(Parser, Debug)]
pub struct RestaurantArgs {
    #[command(subcommand)]
    pub command: RestaurantCommand,
}

#[derive(Subcommand, Debug)]
pub enum RestaurantCommand {
    /// Add a restaurant and print its id
    Add(AddArgs),
    /// List all restaurants
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one restaurant with its foodtypes
    Show {
        /// Restaurant id
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a restaurant and its foodtype associations
    Delete {
        /// Restaurant id
        id: i64,
    },
    /// Associate a restaurant with a foodtype
    Tag {
        /// Restaurant id
        restaurant: i64,
        /// Foodtype id
        foodtype: i64,
    },
    /// List the foodtypes of a restaurant
    Foodtypes {
        /// Restaurant id
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Restaurant name
    #[arg(long)]
    pub name: String,
    /// Street address
    #[arg(long)]
    pub address: String,
    /// Postal code
    #[arg(long)]
    pub zip: String,
    /// Phone number
    #[arg(long)]
    pub phone: String,
    /// Website URL (http:// or https://)
    #[arg(long)]
    pub website: Option<String>,
    /// Contact email
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct RestaurantDetail<'a> {
    #[serde(flatten)]
    restaurant: &'a jadle_store::Restaurant,
    foodtypes: &'a [jadle_store::Foodtype],
}

pub async fn run_restaurant(db: &Database, args: RestaurantArgs) -> Result<()> {
    let store = db.restaurants();
    match args.command {
        RestaurantCommand::Add(add) => {
            let mut draft = NewRestaurant::new(&add.name, &add.address, &add.zip, &add.phone)?;
            if let Some(website) = &add.website {
                draft = draft.with_website(website)?;
            }
            if let Some(email) = &add.email {
                draft = draft.with_email(email)?;
            }
            let restaurant = store.add(&draft).await?;
            println!("Added restaurant #{}", restaurant.id);
        }
        RestaurantCommand::List { json } => {
            let restaurants = store.get_all().await?;
            if json {
                print_json(&restaurants)?;
            } else {
                print_lines(&restaurants, "No restaurants", restaurant_line);
            }
        }
        RestaurantCommand::Show { id, json } => {
            let id = RestaurantId::new(id);
            let restaurant = store
                .find_by_id(id)
                .await?
                .with_context(|| format!("Restaurant #{} not found", id))?;
            let foodtypes = store.get_all_foodtypes_by_restaurant(id).await?;
            if json {
                print_json(&RestaurantDetail {
                    restaurant: &restaurant,
                    foodtypes: &foodtypes,
                })?;
            } else {
                println!("{}", restaurant_line(&restaurant));
                print_lines(&foodtypes, "  (no foodtypes)", |f| {
                    format!("  {}", foodtype_line(f))
                });
            }
        }
        RestaurantCommand::Delete { id } => {
            store.delete_by_id(RestaurantId::new(id)).await?;
            println!("Deleted restaurant #{}", id);
        }
        RestaurantCommand::Tag {
            restaurant,
            foodtype,
        } => {
            let restaurant = store
                .find_by_id(RestaurantId::new(restaurant))
                .await?
                .with_context(|| format!("Restaurant #{} not found", restaurant))?;
            let foodtype = db
                .foodtypes()
                .find_by_id(FoodtypeId::new(foodtype))
                .await?
                .with_context(|| format!("Foodtype #{} not found", foodtype))?;
            store.add_restaurant_to_foodtype(&restaurant, &foodtype).await?;
            println!("Tagged restaurant #{} as {}", restaurant.id, foodtype.name);
        }
        RestaurantCommand::Foodtypes { id, json } => {
            let foodtypes = store
                .get_all_foodtypes_by_restaurant(RestaurantId::new(id))
                .await?;
            if json {
                print_json(&foodtypes)?;
            } else {
                print_lines(&foodtypes, "No foodtypes", foodtype_line);
            }
        }
    }
    Ok(())
}
