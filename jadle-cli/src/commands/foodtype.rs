//! Foodtype commands

use anyhow::Result;
use clap::{Parser, Subcommand};
use jadle_store::{Database, FoodtypeId, NewFoodtype};

use crate::output::{foodtype_line, print_json, print_lines, restaurant_line};

#[derive(Parser, Debug)]
pub struct FoodtypeArgs {
    #[command(subcommand)]
    pub command: FoodtypeCommand,
}

#[derive(Subcommand, Debug)]
pub enum FoodtypeCommand {
    /// Add a foodtype and print its id
    Add {
        /// Foodtype name (e.g. "Sushi")
        name: String,
    },
    /// List all foodtypes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a foodtype and its restaurant associations
    Delete {
        /// Foodtype id
        id: i64,
    },
    /// List restaurants serving a foodtype
    Restaurants {
        /// Foodtype id
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run_foodtype(db: &Database, args: FoodtypeArgs) -> Result<()> {
    let store = db.foodtypes();
    match args.command {
        FoodtypeCommand::Add { name } => {
            let foodtype = store.add(&NewFoodtype::new(&name)?).await?;
            println!("Added foodtype #{}", foodtype.id);
        }
        FoodtypeCommand::List { json } => {
            let foodtypes = store.get_all().await?;
            if json {
                print_json(&foodtypes)?;
            } else {
                print_lines(&foodtypes, "No foodtypes", foodtype_line);
            }
        }
        FoodtypeCommand::Delete { id } => {
            store.delete_by_id(FoodtypeId::new(id)).await?;
            println!("Deleted foodtype #{}", id);
        }
        FoodtypeCommand::Restaurants { id, json } => {
            let restaurants = store
                .get_all_restaurants_for_a_foodtype(FoodtypeId::new(id))
                .await?;
            if json {
                print_json(&restaurants)?;
            } else {
                print_lines(&restaurants, "No restaurants", restaurant_line);
            }
        }
    }
    Ok(())
}
