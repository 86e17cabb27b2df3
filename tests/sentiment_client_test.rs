use catalog_admin::actor::Actor;
use catalog_admin::db;
use catalog_admin::sentiment::{SentimentClient, SentimentLabel};
use catalog_admin::services::rating_service::{self, CreateRating};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn reviewer() -> Actor {
    Actor {
        id: "7f1b6a80-1111-4a2a-9e1e-000000000001".to_string(),
        email: "reviewer@example.com".to_string(),
    }
}

#[tokio::test]
async fn classify_parses_the_label() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .and(body_json(serde_json::json!({ "comment": "Great coffee" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "Positive"
        })))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri());
    let label = client.classify("Great coffee").await.unwrap();
    assert_eq!(label, SentimentLabel::Positive);
}

#[tokio::test]
async fn classify_surfaces_unknown_labels_as_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "Confused"
        })))
        .mount(&server)
        .await;

    let client = SentimentClient::new(server.uri());
    assert!(client.classify("hmm").await.is_err());
}

#[tokio::test]
async fn rating_create_stores_the_classifier_label() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "label": "Negative"
        })))
        .mount(&server)
        .await;

    let db = db::init_db("sqlite::memory:").await.expect("Failed to init DB");
    let client = SentimentClient::new(server.uri());

    let created = rating_service::create(
        &db,
        Some(&client),
        CreateRating {
            product_id: None,
            type_id: None,
            comment: Some("Burnt and bitter".to_string()),
            is_positive: Some(false),
        },
        &reviewer(),
    )
    .await
    .unwrap();

    let rating = rating_service::find_one(&db, &created.id).await.unwrap();
    assert_eq!(rating.comment_sentiment.as_deref(), Some("Negative"));
}

#[tokio::test]
async fn classifier_failure_does_not_block_rating_creation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let db = db::init_db("sqlite::memory:").await.expect("Failed to init DB");
    let client = SentimentClient::new(server.uri());

    let created = rating_service::create(
        &db,
        Some(&client),
        CreateRating {
            product_id: None,
            type_id: None,
            comment: Some("no opinion".to_string()),
            is_positive: None,
        },
        &reviewer(),
    )
    .await
    .expect("creation must survive a classifier failure");

    let rating = rating_service::find_one(&db, &created.id).await.unwrap();
    assert_eq!(rating.comment_sentiment, None);
}
