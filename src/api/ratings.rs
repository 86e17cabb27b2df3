use axum::{
    extract::{Path, Query, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use serde_json::json;

use super::{AppState, Pagination};
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::services::rating_service::{self, CreateRating, UpdateRating};

pub async fn list_ratings(
    State(db): State<DatabaseConnection>,
    Query(pagination): Query<Pagination>,
    RawQuery(qs): RawQuery,
) -> Result<impl IntoResponse, ServiceError> {
    let page = rating_service::list(
        &db,
        pagination.current(),
        pagination.page_size(),
        qs.as_deref().unwrap_or(""),
    )
    .await?;
    Ok(Json(page))
}

// Rating creation is the one handler that needs the sentiment client too,
// so it takes the whole state.
pub async fn create_rating(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateRating>,
) -> Result<impl IntoResponse, ServiceError> {
    let created =
        rating_service::create(&state.db, state.sentiment.as_ref(), payload, &actor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_my_ratings(
    State(db): State<DatabaseConnection>,
    actor: Actor,
) -> Result<impl IntoResponse, ServiceError> {
    let ratings = rating_service::find_by_user(&db, &actor).await?;
    Ok(Json(ratings))
}

pub async fn get_rating(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let rating = rating_service::find_one(&db, &id).await?;
    Ok(Json(rating))
}

pub async fn update_rating(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
    Json(payload): Json<UpdateRating>,
) -> Result<impl IntoResponse, ServiceError> {
    rating_service::update(&db, &id, payload, &actor).await?;
    Ok(Json(json!({ "message": "Rating updated successfully" })))
}

pub async fn delete_rating(
    State(db): State<DatabaseConnection>,
    Path(id): Path<String>,
    actor: Actor,
) -> Result<impl IntoResponse, ServiceError> {
    rating_service::remove(&db, &id, &actor).await?;
    Ok(Json(json!({ "message": "Rating deleted successfully" })))
}
