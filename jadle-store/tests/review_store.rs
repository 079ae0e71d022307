mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{database, stored_restaurant};
use jadle_store::{Database, NewReview, Restaurant, RestaurantId, Review, ReviewId};

async fn stored_review(db: &Database, restaurant_id: RestaurantId) -> Review {
    let draft = NewReview::new("great", "Kim", 4, restaurant_id).unwrap();
    db.reviews().add(&draft).await.unwrap()
}

async fn review_for(db: &Database, restaurant: &Restaurant) -> Review {
    stored_review(db, restaurant.id).await
}

#[tokio::test]
async fn adding_review_sets_id() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let draft = NewReview::new("call", "Rose", 2, restaurant.id).unwrap();

    let review = db.reviews().add(&draft).await.unwrap();

    assert_ne!(review.id, ReviewId::new(0));
    assert_eq!(review.content, "call");
    assert_eq!(review.author, "Rose");
    assert_eq!(review.rating.get(), 2);
    assert_eq!(review.restaurant_id, restaurant.id);
}

#[tokio::test]
async fn get_all() {
    let db = database().await;
    // restaurant 555 was never stored; reviews do not require it
    stored_review(&db, RestaurantId::new(555)).await;
    stored_review(&db, RestaurantId::new(555)).await;

    assert_eq!(db.reviews().get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn get_all_reviews_by_restaurant() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let other = stored_restaurant(&db).await;
    review_for(&db, &restaurant).await;
    review_for(&db, &restaurant).await;
    review_for(&db, &other).await;

    let reviews = db
        .reviews()
        .get_all_reviews_by_restaurant(restaurant.id)
        .await
        .unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r.restaurant_id == restaurant.id));
}

#[tokio::test]
async fn delete_by_id() {
    let db = database().await;
    let doomed = stored_review(&db, RestaurantId::new(555)).await;
    let kept = stored_review(&db, RestaurantId::new(555)).await;
    assert_eq!(db.reviews().get_all().await.unwrap().len(), 2);

    db.reviews().delete_by_id(doomed.id).await.unwrap();

    assert_eq!(db.reviews().get_all().await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn delete_of_unknown_id_is_a_no_op() {
    let db = database().await;
    stored_review(&db, RestaurantId::new(1)).await;

    db.reviews().delete_by_id(ReviewId::new(999)).await.unwrap();

    assert_eq!(db.reviews().get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn clear_all() {
    let db = database().await;
    stored_review(&db, RestaurantId::new(555)).await;
    stored_review(&db, RestaurantId::new(555)).await;

    db.reviews().clear_all().await.unwrap();

    assert!(db.reviews().get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn time_stamp_is_returned_correctly() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let draft = NewReview::new("foodcoma!", "Captain Kirk", 3, restaurant.id).unwrap();
    let creation_time = draft.creation_time();
    let formatted_creation_time = draft.formatted_created_at();

    db.reviews().add(&draft).await.unwrap();

    let saved = db.reviews().get_all().await.unwrap().remove(0);
    assert_eq!(saved.created_at, creation_time);
    assert_eq!(saved.created_at_millis(), creation_time.timestamp_millis());
    assert_eq!(saved.formatted_created_at(), formatted_creation_time);
}

#[tokio::test]
async fn reviews_are_returned_in_correct_order() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let t1 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let drafts = [
        ("Caggo", "fred", 2, t1),
        ("sweep", "shivane", 3, t1 + Duration::seconds(2)),
        ("Scotty", "mogusu", 4, t1 + Duration::seconds(4)),
        ("I prefer home cooking", "water", 5, t1 + Duration::seconds(6)),
    ];
    // insert out of chronological order so id order can't mask the sort
    for idx in [2, 0, 3, 1] {
        let (content, author, rating, at) = drafts[idx];
        let draft = NewReview::new(content, author, rating, restaurant.id)
            .unwrap()
            .created_at(at);
        db.reviews().add(&draft).await.unwrap();
    }

    assert_eq!(
        db.reviews()
            .get_all_reviews_by_restaurant(restaurant.id)
            .await
            .unwrap()
            .len(),
        4
    );

    let sorted = db
        .reviews()
        .get_all_reviews_by_restaurant_sorted_newest_to_oldest(restaurant.id)
        .await
        .unwrap();
    let contents: Vec<&str> = sorted.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["I prefer home cooking", "Scotty", "sweep", "Caggo"]
    );
}

#[tokio::test]
async fn equal_timestamps_put_latest_insert_first() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let first = NewReview::new("first", "a", 3, restaurant.id).unwrap().created_at(at);
    let second = NewReview::new("second", "b", 3, restaurant.id).unwrap().created_at(at);
    db.reviews().add(&first).await.unwrap();
    db.reviews().add(&second).await.unwrap();

    let sorted = db
        .reviews()
        .get_all_reviews_by_restaurant_sorted_newest_to_oldest(restaurant.id)
        .await
        .unwrap();
    assert_eq!(sorted[0].content, "second");
}

#[tokio::test]
async fn deleting_restaurant_leaves_reviews() {
    let db = database().await;
    let restaurant = stored_restaurant(&db).await;
    review_for(&db, &restaurant).await;

    db.restaurants().delete_by_id(restaurant.id).await.unwrap();

    assert_eq!(
        db.reviews()
            .get_all_reviews_by_restaurant(restaurant.id)
            .await
            .unwrap()
            .len(),
        1
    );
}
