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
use crate::services::user_service::{self, CreateUser, UpdateUser};

pub async fn list_users(
    State(db): State<DatabaseConnection>,
    Query(pagination): Query<Pagination>,
    RawQuery(qs): RawQuery,
) -> Result<impl IntoResponse, ServiceError> {
    let page = user_service::list(
        &db,
        pagination.current(),
        pagination.page_size(),
        qs.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(page))
}

pub async fn create_user(
    State(db): State<DatabaseConnection>,
    actor: Actor,
    Json(payload): Json<CreateUser>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = user_service::create(&db, payload, &actor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let user = user_service::find_one(&db, &id).await?;
    Ok(Json(user))
}

pub async fn update_user(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
    Json(payload): Json<UpdateUser>,
) -> Result<impl IntoResponse, ServiceError> {
    user_service::update(&db, &id, payload, &actor).await?;
    Ok(Json(json!({ "message": "User updated successfully" })))
}

pub async fn delete_user(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
) -> Result<impl IntoResponse, ServiceError> {
    user_service::remove(&db, &id, &actor).await?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
