use axum::{extract::State, Json};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::domain::ServiceError;
use crate::services::stats_service;

/// Admin dashboard summary. The counters are independent failure domains:
/// they are fetched concurrently and a failed one degrades to zero instead
/// of blocking the rest.
pub async fn summary(State(db): State<DatabaseConnection>) -> Json<Value> {
    let (
        total_ratings,
        positive_ratings,
        negative_ratings,
        positive_comments,
        negative_comments,
        neutral_comments,
        products,
        types,
        users,
        interactions,
    ) = tokio::join!(
        stats_service::count_ratings(&db),
        stats_service::count_positive_ratings(&db),
        stats_service::count_negative_ratings(&db),
        stats_service::count_comments_by_sentiment(&db, "Positive"),
        stats_service::count_comments_by_sentiment(&db, "Negative"),
        stats_service::count_comments_by_sentiment(&db, "Neutral"),
        stats_service::count_products(&db),
        stats_service::count_types(&db),
        stats_service::count_users(&db),
        stats_service::count_interactions(&db),
    );

    Json(json!({
        "ratings": {
            "total": or_zero(total_ratings, "ratings.total"),
            "positive": or_zero(positive_ratings, "ratings.positive"),
            "negative": or_zero(negative_ratings, "ratings.negative"),
        },
        "comments": {
            "positive": or_zero(positive_comments, "comments.positive"),
            "negative": or_zero(negative_comments, "comments.negative"),
            "neutral": or_zero(neutral_comments, "comments.neutral"),
        },
        "catalog": {
            "products": or_zero(products, "catalog.products"),
            "types": or_zero(types, "catalog.types"),
            "users": or_zero(users, "catalog.users"),
            "interactions": or_zero(interactions, "catalog.interactions"),
        },
    }))
}

fn or_zero(result: Result<u64, ServiceError>, counter: &str) -> u64 {
    match result {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!("{} counter failed: {}", counter, e);
            0
        }
    }
}
