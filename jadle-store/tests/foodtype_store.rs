mod common;

use common::{database, new_alt_restaurant, new_foodtype, stored_restaurant};
use jadle_store::{FoodtypeId, StoreError};

#[tokio::test]
async fn adding_foodtype_sets_id() {
    let db = database().await;
    let foodtype = db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();

    assert_ne!(foodtype.id, FoodtypeId::new(0));
    assert_eq!(foodtype.name, "Sushi");
}

#[tokio::test]
async fn added_foodtypes_are_returned_from_get_all() {
    let db = database().await;
    db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();

    assert_eq!(db.foodtypes().get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn no_foodtypes_returns_empty_list() {
    let db = database().await;
    assert!(db.foodtypes().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_by_id_deletes_correct_foodtype() {
    let db = database().await;
    let foodtype = db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();

    db.foodtypes().delete_by_id(foodtype.id).await.unwrap();

    assert!(db.foodtypes().get_all().await.unwrap().is_empty());
    assert_eq!(db.foodtypes().find_by_id(foodtype.id).await.unwrap(), None);
}

#[tokio::test]
async fn clear_all() {
    let db = database().await;
    db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();
    db.foodtypes().add(&new_foodtype("Seafood")).await.unwrap();

    db.foodtypes().clear_all().await.unwrap();

    assert!(db.foodtypes().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn add_foodtype_to_restaurant_adds_type_correctly() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let alt = db.restaurants().add(&new_alt_restaurant()).await.unwrap();
    let sushi = db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();

    db.foodtypes().add_foodtype_to_restaurant(&sushi, &restaurant).await.unwrap();
    db.foodtypes().add_foodtype_to_restaurant(&sushi, &alt).await.unwrap();

    let restaurants = db
        .foodtypes()
        .get_all_restaurants_for_a_foodtype(sushi.id)
        .await
        .unwrap();
    assert_eq!(restaurants.len(), 2);
    assert_eq!(restaurants, vec![restaurant, alt]);
}

#[tokio::test]
async fn both_sides_see_the_same_association() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let sushi = db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();

    db.foodtypes().add_foodtype_to_restaurant(&sushi, &restaurant).await.unwrap();

    assert_eq!(
        db.restaurants()
            .get_all_foodtypes_by_restaurant(restaurant.id)
            .await
            .unwrap(),
        vec![sushi]
    );
}

#[tokio::test]
async fn deleting_foodtype_also_updates_join_table() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let sushi = db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();
    let japanese = db.foodtypes().add(&new_foodtype("Japanese")).await.unwrap();

    db.foodtypes().add_foodtype_to_restaurant(&sushi, &restaurant).await.unwrap();
    db.foodtypes().add_foodtype_to_restaurant(&japanese, &restaurant).await.unwrap();

    db.foodtypes().delete_by_id(sushi.id).await.unwrap();

    assert!(db
        .foodtypes()
        .get_all_restaurants_for_a_foodtype(sushi.id)
        .await
        .unwrap()
        .is_empty());
    // the restaurant's other foodtype survives
    assert_eq!(
        db.restaurants()
            .get_all_foodtypes_by_restaurant(restaurant.id)
            .await
            .unwrap(),
        vec![japanese]
    );
}

#[tokio::test]
async fn linking_to_deleted_restaurant_fails() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let sushi = db.foodtypes().add(&new_foodtype("Sushi")).await.unwrap();
    db.restaurants().delete_by_id(restaurant.id).await.unwrap();

    let err = db
        .foodtypes()
        .add_foodtype_to_restaurant(&sushi, &restaurant)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound { resource: "restaurant", .. }));
}
