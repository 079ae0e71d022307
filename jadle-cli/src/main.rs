//! jadle CLI - inspect and edit the restaurant-review store
//!
//! Thin wrapper over `jadle-store`:
//! - Restaurants (`restaurant` subcommand), including foodtype tagging
//! - Foodtypes (`foodtype` subcommand)
//! - Reviews (`review` subcommand), optionally newest-first per restaurant
//! - Wiping every table (`clear`)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jadle_store::{Database, StoreConfig};
use tracing::debug;

mod commands;
mod output;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "jadle",
    author,
    version,
    about = "Manage restaurants, foodtypes and reviews in the jadle store"
)]
struct Cli {
    /// Database URL (e.g. sqlite://jadle.db); defaults to JADLE_DATABASE_URL, then DATABASE_URL
    #[arg(long, global = true, env = "JADLE_DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add, list, show, delete and tag restaurants
    Restaurant(commands::restaurant::RestaurantArgs),
    /// Add, list and delete foodtypes
    Foodtype(commands::foodtype::FoodtypeArgs),
    /// Add, list and delete reviews
    Review(commands::review::ReviewArgs),
    /// Delete every restaurant, foodtype, review and association
    Clear(commands::ClearArgs),
}

fn store_config(database_url: Option<String>) -> Result<StoreConfig> {
    match database_url {
        Some(url) => Ok(StoreConfig::new(url)),
        None => StoreConfig::from_env().context("Failed to load store configuration"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    let config = store_config(cli.database_url)?;
    debug!(url = %config.database_url, "connecting");
    let db = Database::connect(&config)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let result = match cli.command {
        Commands::Restaurant(args) => commands::run_restaurant(&db, args).await,
        Commands::Foodtype(args) => commands::run_foodtype(&db, args).await,
        Commands::Review(args) => commands::run_review(&db, args).await,
        Commands::Clear(args) => commands::run_clear(&db, args).await,
    };

    db.close().await;
    result
}
