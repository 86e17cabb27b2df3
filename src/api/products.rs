use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use super::Pagination;
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::services::product_service::{self, CreateProduct, UpdateProduct};

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Paginated product list with meta")
    )
)]
pub async fn list_products(
    State(db): State<DatabaseConnection>,
    Query(pagination): Query<Pagination>,
    RawQuery(qs): RawQuery,
) -> Result<impl IntoResponse, ServiceError> {
    let page = product_service::list(
        &db,
        pagination.current(),
        pagination.page_size(),
        qs.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/api/products",
    responses(
        (status = 201, description = "Product created, returns id and createdAt"),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_product(
    State(db): State<DatabaseConnection>,
    actor: Actor,
    Json(payload): Json<CreateProduct>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = product_service::create(&db, payload, &actor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    responses(
        (status = 200, description = "The product"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No product with this id")
    )
)]
pub async fn get_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = product_service::find_one(&db, &id).await?;
    Ok(Json(product))
}

pub async fn update_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
    Json(payload): Json<UpdateProduct>,
) -> Result<impl IntoResponse, ServiceError> {
    product_service::update(&db, &id, payload, &actor).await?;
    Ok(Json(json!({ "message": "Product updated successfully" })))
}

pub async fn delete_product(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
) -> Result<impl IntoResponse, ServiceError> {
    product_service::remove(&db, &id, &actor).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
