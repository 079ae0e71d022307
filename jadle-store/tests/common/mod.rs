//! Shared fixtures for store integration tests

#![allow(dead_code)]

use jadle_store::{Database, NewFoodtype, NewRestaurant, Restaurant, StoreConfig};

/// Fresh, migrated in-memory database per test.
pub async fn database() -> Database {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("jadle_store=debug")
        .with_test_writer()
        .try_init();

    Database::connect(&StoreConfig::in_memory())
        .await
        .expect("in-memory database should open")
}

pub fn new_restaurant() -> NewRestaurant {
    NewRestaurant::new("Fish Witch", "214 NE Broadway", "97232", "503-402-9874")
        .unwrap()
        .with_website("http://fishwitch.com")
        .unwrap()
        .with_email("hellofishy@fishwitch.com")
        .unwrap()
}

pub fn new_alt_restaurant() -> NewRestaurant {
    NewRestaurant::new("Fish Omena", "214 NE Ngara", "97232", "254-402-9874").unwrap()
}

pub fn new_foodtype(name: &str) -> NewFoodtype {
    NewFoodtype::new(name).unwrap()
}

pub async fn stored_restaurant(db: &Database) -> Restaurant {
    db.restaurants().add(&new_restaurant()).await.unwrap()
}
