//! Command implementations for the jadle CLI

pub mod foodtype;
pub mod restaurant;
pub mod review;

use anyhow::{bail, Result};
use clap::Parser;
use jadle_store::Database;

// Re-export main dispatcher functions for flat access from main.rs
pub use foodtype::run_foodtype;
pub use restaurant::run_restaurant;
pub use review::run_review;

#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Confirm deleting all data
    #[arg(long)]
    pub yes: bool,
}

pub async fn run_clear(db: &Database, args: ClearArgs) -> Result<()> {
    if !args.yes {
        bail!("Refusing to clear the database without --yes");
    }
    db.clear_all().await?;
    println!("Cleared all restaurants, foodtypes and reviews");
    Ok(())
}
