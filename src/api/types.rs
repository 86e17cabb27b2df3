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
use crate::services::type_service::{self, CreateType, UpdateType};

pub async fn list_types(
    State(db): State<DatabaseConnection>,
    Query(pagination): Query<Pagination>,
    RawQuery(qs): RawQuery,
) -> Result<impl IntoResponse, ServiceError> {
    let page = type_service::list(
        &db,
        pagination.current(),
        pagination.page_size(),
        qs.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(page))
}

pub async fn create_type(
    State(db): State<DatabaseConnection>,
    actor: Actor,
    Json(payload): Json<CreateType>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = type_service::create(&db, payload, &actor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_type(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let product_type = type_service::find_one(&db, &id).await?;
    Ok(Json(product_type))
}

pub async fn update_type(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
    Json(payload): Json<UpdateType>,
) -> Result<impl IntoResponse, ServiceError> {
    type_service::update(&db, &id, payload, &actor).await?;
    Ok(Json(json!({ "message": "Type updated successfully" })))
}

pub async fn delete_type(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
) -> Result<impl IntoResponse, ServiceError> {
    type_service::remove(&db, &id, &actor).await?;
    Ok(Json(json!({ "message": "Type deleted successfully" })))
}
