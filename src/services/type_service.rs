//! Product-type service
//! Mirrored from product_service.rs

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use super::audit;
use super::listing::{self, ListQuery, Page};
use super::Created;
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::models::product_type::{self, Entity as TypeEntity, ProductType};

const ENTITY: &str = "ProductType";

#[derive(Debug, Deserialize)]
pub struct CreateType {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateType {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}

pub async fn create(
    db: &DatabaseConnection,
    payload: CreateType,
    actor: &Actor,
) -> Result<Created, ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "type name is required".to_string(),
        ));
    }

    let now = audit::now_rfc3339();
    let new_type = product_type::ActiveModel {
        id: Set(audit::new_id()),
        name: Set(payload.name),
        description: Set(payload.description),
        logo: Set(payload.logo),
        created_by: Set(Some(audit::actor_json(actor))),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };

    let saved = new_type.insert(db).await?;

    Ok(Created {
        id: saved.id,
        created_at: saved.created_at,
    })
}

pub async fn list(
    db: &DatabaseConnection,
    current: i64,
    page_size: i64,
    qs: &str,
) -> Result<Page<ProductType>, ServiceError> {
    let query = ListQuery::parse(qs);
    let page = listing::run::<TypeEntity>(db, current, page_size, &query).await?;
    Ok(page.map(ProductType::from))
}

pub async fn find_one(db: &DatabaseConnection, id: &str) -> Result<ProductType, ServiceError> {
    let model = listing::find_by_id::<TypeEntity>(db, id, ENTITY).await?;
    Ok(ProductType::from(model))
}

pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    payload: UpdateType,
    actor: &Actor,
) -> Result<(), ServiceError> {
    let model = listing::find_by_id::<TypeEntity>(db, id, ENTITY).await?;

    let mut active: product_type::ActiveModel = model.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(logo) = payload.logo {
        active.logo = Set(Some(logo));
    }

    active.updated_by = Set(Some(audit::actor_json(actor)));
    active.updated_at = Set(audit::now_rfc3339());
    active.update(db).await?;

    Ok(())
}

pub async fn remove(db: &DatabaseConnection, id: &str, actor: &Actor) -> Result<(), ServiceError> {
    audit::remove::<TypeEntity>(db, id, actor, ENTITY).await
}
