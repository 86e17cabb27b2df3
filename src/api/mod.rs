pub mod dashboard;
pub mod health;
pub mod interactions;
pub mod products;
pub mod ratings;
pub mod types;
pub mod users;

use axum::{
    extract::FromRef,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;

use crate::domain::ServiceError;
use crate::sentiment::SentimentClient;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub sentiment: Option<SentimentClient>,
}

/// Pagination control parameters. Bound separately from the filter so the
/// query engine can strip them before filtering.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub current: Option<i64>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<i64>,
}

impl Pagination {
    pub fn current(&self) -> i64 {
        self.current.unwrap_or(0)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(0)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::External(_) => StatusCode::BAD_GATEWAY,
        };

        // Store failures are logged here, once, before the caller sees an
        // opaque internal error.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("store failure: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Products
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        // Product types
        .route("/types", get(types::list_types).post(types::create_type))
        .route(
            "/types/:id",
            get(types::get_type)
                .put(types::update_type)
                .delete(types::delete_type),
        )
        // Ratings
        .route(
            "/ratings",
            get(ratings::list_ratings).post(ratings::create_rating),
        )
        .route("/ratings/mine", get(ratings::list_my_ratings))
        .route(
            "/ratings/:id",
            get(ratings::get_rating)
                .put(ratings::update_rating)
                .delete(ratings::delete_rating),
        )
        // Interactions
        .route(
            "/interactions",
            get(interactions::list_interactions).post(interactions::create_interaction),
        )
        .route(
            "/interactions/:id",
            get(interactions::get_interaction)
                .put(interactions::update_interaction)
                .delete(interactions::delete_interaction),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Admin dashboard
        .route("/dashboard/summary", get(dashboard::summary))
        .with_state(state)
}
