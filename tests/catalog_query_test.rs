use catalog_admin::actor::Actor;
use catalog_admin::db;
use catalog_admin::services::product_service::{self, CreateProduct};
use sea_orm::DatabaseConnection;

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn test_actor() -> Actor {
    Actor {
        id: "7f1b6a80-1111-4a2a-9e1e-000000000001".to_string(),
        email: "admin@example.com".to_string(),
    }
}

async fn create_test_product(db: &DatabaseConnection, name: &str, price: i64) -> String {
    let created = product_service::create(
        db,
        CreateProduct {
            name: name.to_string(),
            type_id: None,
            price,
            description: None,
            is_active: None,
            image: None,
        },
        &test_actor(),
    )
    .await
    .expect("Failed to create product");
    created.id
}

#[tokio::test]
async fn pagination_meta_is_exact() {
    let db = setup_test_db().await;

    for i in 0..25i64 {
        create_test_product(&db, &format!("Product {i:02}"), 1000 + i).await;
    }

    let page = product_service::list(&db, 2, 10, "").await.unwrap();
    assert_eq!(page.meta.current, 2);
    assert_eq!(page.meta.page_size, 10);
    assert_eq!(page.meta.total, 25);
    assert_eq!(page.meta.pages, 3);
    assert_eq!(page.result.len(), 10);

    // Last page carries the remainder
    let page = product_service::list(&db, 3, 10, "").await.unwrap();
    assert_eq!(page.result.len(), 5);
}

#[tokio::test]
async fn page_below_one_is_clamped() {
    let db = setup_test_db().await;

    for i in 0..5 {
        create_test_product(&db, &format!("Product {i}"), 1000).await;
    }

    let first = product_service::list(&db, 1, 3, "").await.unwrap();
    let clamped = product_service::list(&db, 0, 3, "").await.unwrap();
    let negative = product_service::list(&db, -7, 3, "").await.unwrap();

    assert_eq!(clamped.meta.current, 1);
    assert_eq!(negative.meta.current, 1);

    let ids = |page: &catalog_admin::services::listing::Page<catalog_admin::models::Product>| {
        page.result.iter().map(|p| p.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&clamped));
    assert_eq!(ids(&first), ids(&negative));
}

#[tokio::test]
async fn page_size_defaults_to_ten() {
    let db = setup_test_db().await;

    for i in 0..15 {
        create_test_product(&db, &format!("Product {i:02}"), 1000).await;
    }

    for bad_size in [0, -5] {
        let page = product_service::list(&db, 1, bad_size, "").await.unwrap();
        assert_eq!(page.meta.page_size, 10);
        assert_eq!(page.result.len(), 10);
        assert_eq!(page.meta.pages, 2);
    }
}

#[tokio::test]
async fn empty_catalog_has_zero_pages() {
    let db = setup_test_db().await;

    let page = product_service::list(&db, 1, 10, "").await.unwrap();
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.pages, 0);
    assert!(page.result.is_empty());
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() {
    let db = setup_test_db().await;

    create_test_product(&db, "Green Tea", 25000).await;
    create_test_product(&db, "TEA TIME", 30000).await;
    create_test_product(&db, "Espresso", 30000).await;

    let page = product_service::list(&db, 1, 10, "name=tea").await.unwrap();
    assert_eq!(page.meta.total, 2);

    let mut names: Vec<String> = page.result.into_iter().map(|p| p.name).collect();
    names.sort();
    assert_eq!(names, vec!["Green Tea".to_string(), "TEA TIME".to_string()]);
}

#[tokio::test]
async fn equality_filters_apply_to_allow_listed_fields() {
    let db = setup_test_db().await;

    create_test_product(&db, "Latte", 45000).await;
    create_test_product(&db, "Espresso", 30000).await;

    let page = product_service::list(&db, 1, 10, "price=45000").await.unwrap();
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.result[0].name, "Latte");
}

#[tokio::test]
async fn unknown_filter_fields_are_ignored() {
    let db = setup_test_db().await;

    create_test_product(&db, "Latte", 45000).await;
    create_test_product(&db, "Espresso", 30000).await;

    // junk keys and pagination controls must not constrain the result
    let page = product_service::list(&db, 1, 10, "wibble=42&current=9&pageSize=1")
        .await
        .unwrap();
    assert_eq!(page.meta.total, 2);
}

#[tokio::test]
async fn default_sort_is_most_recently_updated_first() {
    let db = setup_test_db().await;

    let first = create_test_product(&db, "First", 1000).await;
    let second = create_test_product(&db, "Second", 2000).await;

    // Touch the older record so it becomes the most recently updated
    product_service::update(&db, &first, Default::default(), &test_actor())
        .await
        .unwrap();

    let page = product_service::list(&db, 1, 10, "").await.unwrap();
    assert_eq!(page.result[0].id, first);
    assert_eq!(page.result[1].id, second);

    // Explicit ascending sort flips the order back
    let page = product_service::list(&db, 1, 10, "sort=updatedAt").await.unwrap();
    assert_eq!(page.result[0].id, second);
}

#[tokio::test]
async fn sort_accepts_allow_listed_fields_only() {
    let db = setup_test_db().await;

    create_test_product(&db, "Banh Mi", 20000).await;
    create_test_product(&db, "Americano", 35000).await;

    let page = product_service::list(&db, 1, 10, "sort=name").await.unwrap();
    assert_eq!(page.result[0].name, "Americano");

    let page = product_service::list(&db, 1, 10, "sort=-price").await.unwrap();
    assert_eq!(page.result[0].name, "Americano");

    // Unknown sort keys fall back to the default instead of erroring
    let page = product_service::list(&db, 1, 10, "sort=-no_such_field").await;
    assert!(page.is_ok());
}
