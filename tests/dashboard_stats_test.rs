use catalog_admin::actor::Actor;
use catalog_admin::db;
use catalog_admin::models::rating;
use catalog_admin::services::{audit, stats_service};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn reviewer() -> Actor {
    Actor {
        id: "7f1b6a80-1111-4a2a-9e1e-000000000001".to_string(),
        email: "reviewer@example.com".to_string(),
    }
}

// Insert a rating directly so the sentiment label can be controlled without
// a classifier in the loop.
async fn insert_rating(
    db: &DatabaseConnection,
    is_positive: Option<bool>,
    sentiment: Option<&str>,
) -> String {
    let actor = reviewer();
    let now = audit::now_rfc3339();
    let id = audit::new_id();
    let model = rating::ActiveModel {
        id: Set(id.clone()),
        product_id: Set(None),
        type_id: Set(None),
        user_id: Set(actor.id.clone()),
        comment: Set(Some("test comment".to_string())),
        status: Set(rating::STATUS_PENDING.to_string()),
        is_positive: Set(is_positive),
        comment_sentiment: Set(sentiment.map(str::to_string)),
        created_by: Set(Some(audit::actor_json(&actor))),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };
    model.insert(db).await.expect("Failed to insert rating");
    id
}

#[tokio::test]
async fn counters_partition_by_label() {
    let db = setup_test_db().await;

    insert_rating(&db, Some(true), Some("Positive")).await;
    insert_rating(&db, Some(true), Some("Neutral")).await;
    insert_rating(&db, Some(false), Some("Negative")).await;
    insert_rating(&db, None, None).await;

    assert_eq!(stats_service::count_ratings(&db).await.unwrap(), 4);
    assert_eq!(stats_service::count_positive_ratings(&db).await.unwrap(), 2);
    assert_eq!(stats_service::count_negative_ratings(&db).await.unwrap(), 1);
    assert_eq!(
        stats_service::count_comments_by_sentiment(&db, "Positive")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        stats_service::count_comments_by_sentiment(&db, "Negative")
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        stats_service::count_comments_by_sentiment(&db, "Neutral")
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn counters_exclude_soft_deleted_ratings() {
    let db = setup_test_db().await;

    insert_rating(&db, Some(true), Some("Positive")).await;
    let doomed = insert_rating(&db, Some(true), Some("Positive")).await;

    catalog_admin::services::rating_service::remove(&db, &doomed, &reviewer())
        .await
        .unwrap();

    assert_eq!(stats_service::count_ratings(&db).await.unwrap(), 1);
    assert_eq!(stats_service::count_positive_ratings(&db).await.unwrap(), 1);
    assert_eq!(
        stats_service::count_comments_by_sentiment(&db, "Positive")
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn catalog_counters_start_at_zero() {
    let db = setup_test_db().await;

    assert_eq!(stats_service::count_products(&db).await.unwrap(), 0);
    assert_eq!(stats_service::count_types(&db).await.unwrap(), 0);
    assert_eq!(stats_service::count_users(&db).await.unwrap(), 0);
    assert_eq!(stats_service::count_interactions(&db).await.unwrap(), 0);
}
