use catalog_admin::actor::Actor;
use catalog_admin::db;
use catalog_admin::domain::ServiceError;
use catalog_admin::services::product_service::{self, CreateProduct, UpdateProduct};
use catalog_admin::services::rating_service::{self, CreateRating, UpdateRating};
use sea_orm::DatabaseConnection;

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn actor_a() -> Actor {
    Actor {
        id: "7f1b6a80-1111-4a2a-9e1e-000000000001".to_string(),
        email: "moderator-a@example.com".to_string(),
    }
}

fn actor_b() -> Actor {
    Actor {
        id: "7f1b6a80-2222-4a2a-9e1e-000000000002".to_string(),
        email: "moderator-b@example.com".to_string(),
    }
}

async fn create_latte(db: &DatabaseConnection, actor: &Actor) -> String {
    product_service::create(
        db,
        CreateProduct {
            name: "Latte".to_string(),
            type_id: None,
            price: 45000,
            description: None,
            is_active: None,
            image: None,
        },
        actor,
    )
    .await
    .expect("Failed to create product")
    .id
}

#[tokio::test]
async fn create_returns_id_and_stamps_creator() {
    let db = setup_test_db().await;
    let actor = actor_a();

    let created = product_service::create(
        &db,
        CreateProduct {
            name: "Latte".to_string(),
            type_id: None,
            price: 45000,
            description: None,
            is_active: None,
            image: None,
        },
        &actor,
    )
    .await
    .unwrap();
    assert!(!created.id.is_empty());
    assert!(!created.created_at.is_empty());

    let product = product_service::find_one(&db, &created.id).await.unwrap();
    assert_eq!(product.name, "Latte");
    assert_eq!(product.price, 45000);
    let created_by = product.created_by.expect("created_by must be stamped");
    assert_eq!(created_by.email, actor.email);
    assert_eq!(created_by.id, actor.id);
    assert!(product.updated_by.is_none());
}

#[tokio::test]
async fn update_stamps_the_acting_actor() {
    let db = setup_test_db().await;
    let id = create_latte(&db, &actor_a()).await;

    product_service::update(
        &db,
        &id,
        UpdateProduct {
            price: Some(50000),
            ..Default::default()
        },
        &actor_b(),
    )
    .await
    .unwrap();

    let product = product_service::find_one(&db, &id).await.unwrap();
    assert_eq!(product.price, 50000);
    assert_eq!(product.created_by.unwrap().email, actor_a().email);
    assert_eq!(product.updated_by.unwrap().email, actor_b().email);
}

#[tokio::test]
async fn remove_hides_the_record_but_keeps_it() {
    let db = setup_test_db().await;
    let actor = actor_a();
    let id = create_latte(&db, &actor).await;

    product_service::remove(&db, &id, &actor).await.unwrap();

    // Default list excludes the removed record
    let page = product_service::list(&db, 1, 10, "").await.unwrap();
    assert_eq!(page.meta.total, 0);

    // Explicit opt-in still sees it, fully stamped
    let page = product_service::list(&db, 1, 10, "includeDeleted=true")
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
    let product = &page.result[0];
    assert!(product.is_deleted);
    assert!(product.deleted_at.is_some());
    assert_eq!(product.deleted_by.as_ref().unwrap().email, actor.email);

    // Point lookup behaves like a default query
    let err = product_service::find_one(&db, &id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn remove_is_safely_redriveable() {
    let db = setup_test_db().await;
    let actor = actor_a();
    let id = create_latte(&db, &actor).await;

    product_service::remove(&db, &id, &actor).await.unwrap();
    // Re-driving the whole sequence (stamp + soft delete) must succeed
    product_service::remove(&db, &id, &actor).await.unwrap();

    let page = product_service::list(&db, 1, 10, "includeDeleted=true")
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
}

#[tokio::test]
async fn malformed_ids_never_reach_the_store() {
    let db = setup_test_db().await;
    let actor = actor_a();

    let err = product_service::find_one(&db, "not-a-uuid").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = product_service::update(&db, "not-a-uuid", Default::default(), &actor)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = product_service::remove(&db, "not-a-uuid", &actor).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn absent_uuid_is_not_found_not_validation() {
    let db = setup_test_db().await;

    let err = product_service::find_one(&db, "7f1b6a80-9999-4a2a-9e1e-000000000009")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn rating_status_transitions_append_history_in_order() {
    let db = setup_test_db().await;

    let created = rating_service::create(
        &db,
        None,
        CreateRating {
            product_id: None,
            type_id: None,
            comment: Some("Really smooth".to_string()),
            is_positive: Some(true),
        },
        &actor_a(),
    )
    .await
    .unwrap();

    let rating = rating_service::find_one(&db, &created.id).await.unwrap();
    assert_eq!(rating.status, "PENDING");
    assert!(rating.history.as_ref().unwrap().is_empty());

    rating_service::update(
        &db,
        &created.id,
        UpdateRating {
            status: "APPROVED".to_string(),
        },
        &actor_a(),
    )
    .await
    .unwrap();

    rating_service::update(
        &db,
        &created.id,
        UpdateRating {
            status: "REJECTED".to_string(),
        },
        &actor_b(),
    )
    .await
    .unwrap();

    let rating = rating_service::find_one(&db, &created.id).await.unwrap();
    assert_eq!(rating.status, "REJECTED");

    let history = rating.history.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status, "APPROVED");
    assert_eq!(history[0].updated_by.as_ref().unwrap().email, actor_a().email);
    assert_eq!(history[1].status, "REJECTED");
    assert_eq!(history[1].updated_by.as_ref().unwrap().email, actor_b().email);
}

#[tokio::test]
async fn rating_rejects_unknown_status() {
    let db = setup_test_db().await;

    let created = rating_service::create(
        &db,
        None,
        CreateRating {
            product_id: None,
            type_id: None,
            comment: None,
            is_positive: None,
        },
        &actor_a(),
    )
    .await
    .unwrap();

    let err = rating_service::update(
        &db,
        &created.id,
        UpdateRating {
            status: "SHIPPED".to_string(),
        },
        &actor_a(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn my_ratings_are_scoped_to_the_actor_newest_first() {
    let db = setup_test_db().await;

    for comment in ["first", "second"] {
        rating_service::create(
            &db,
            None,
            CreateRating {
                product_id: None,
                type_id: None,
                comment: Some(comment.to_string()),
                is_positive: None,
            },
            &actor_a(),
        )
        .await
        .unwrap();
    }
    rating_service::create(
        &db,
        None,
        CreateRating {
            product_id: None,
            type_id: None,
            comment: Some("someone else's".to_string()),
            is_positive: None,
        },
        &actor_b(),
    )
    .await
    .unwrap();

    let mine = rating_service::find_by_user(&db, &actor_a()).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].comment.as_deref(), Some("second"));
    assert_eq!(mine[1].comment.as_deref(), Some("first"));
    assert!(mine.iter().all(|r| r.user_id == actor_a().id));
}
