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
use crate::services::interaction_service::{self, CreateInteraction, UpdateInteraction};

pub async fn list_interactions(
    State(db): State<DatabaseConnection>,
    Query(pagination): Query<Pagination>,
    RawQuery(qs): RawQuery,
) -> Result<impl IntoResponse, ServiceError> {
    let page = interaction_service::list(
        &db,
        pagination.current(),
        pagination.page_size(),
        qs.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(page))
}

pub async fn create_interaction(
    State(db): State<DatabaseConnection>,
    actor: Actor,
    Json(payload): Json<CreateInteraction>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = interaction_service::create(&db, payload, &actor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_interaction(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let interaction = interaction_service::find_one(&db, &id).await?;
    Ok(Json(interaction))
}

pub async fn update_interaction(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
    Json(payload): Json<UpdateInteraction>,
) -> Result<impl IntoResponse, ServiceError> {
    interaction_service::update(&db, &id, payload, &actor).await?;
    Ok(Json(json!({ "message": "Interaction updated successfully" })))
}

pub async fn delete_interaction(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
) -> Result<impl IntoResponse, ServiceError> {
    interaction_service::remove(&db, &id, &actor).await?;
    Ok(Json(json!({ "message": "Interaction deleted successfully" })))
}
