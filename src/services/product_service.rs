//! Product service - catalog CRUD over the products table

use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

use super::audit;
use super::listing::{self, ListQuery, Page};
use super::Created;
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::models::product::{self, Entity as ProductEntity, Product};
use crate::models::product_type::{self, Entity as TypeEntity};

const ENTITY: &str = "Product";

#[derive(Debug, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub type_id: Option<String>,
    pub price: i64,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub type_id: Option<String>,
    pub price: Option<i64>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub image: Option<String>,
}

pub async fn create(
    db: &DatabaseConnection,
    payload: CreateProduct,
    actor: &Actor,
) -> Result<Created, ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "product name is required".to_string(),
        ));
    }
    if let Some(type_id) = &payload.type_id {
        audit::validate_id(type_id, "ProductType")?;
    }

    let now = audit::now_rfc3339();
    let new_product = product::ActiveModel {
        id: Set(audit::new_id()),
        name: Set(payload.name),
        type_id: Set(payload.type_id),
        price: Set(payload.price),
        description: Set(payload.description),
        is_active: Set(payload.is_active.unwrap_or(true)),
        image: Set(payload.image),
        created_by: Set(Some(audit::actor_json(actor))),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };

    let saved = new_product.insert(db).await?;

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
) -> Result<Page<Product>, ServiceError> {
    let query = ListQuery::parse(qs);
    let page = listing::run::<ProductEntity>(db, current, page_size, &query).await?;

    let type_names = if query.populates("type") {
        let type_ids: Vec<String> = page
            .result
            .iter()
            .filter_map(|p| p.type_id.clone())
            .collect();
        resolve_type_names(db, type_ids).await?
    } else {
        HashMap::new()
    };

    Ok(page.map(|model| {
        let mut dto = Product::from(model);
        if let Some(type_id) = &dto.type_id {
            dto.type_name = type_names.get(type_id).cloned();
        }
        dto
    }))
}

pub async fn find_one(db: &DatabaseConnection, id: &str) -> Result<Product, ServiceError> {
    let model = listing::find_by_id::<ProductEntity>(db, id, ENTITY).await?;
    Ok(Product::from(model))
}

pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    payload: UpdateProduct,
    actor: &Actor,
) -> Result<(), ServiceError> {
    let model = listing::find_by_id::<ProductEntity>(db, id, ENTITY).await?;

    let mut active: product::ActiveModel = model.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(type_id) = payload.type_id {
        audit::validate_id(&type_id, "ProductType")?;
        active.type_id = Set(Some(type_id));
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }

    // updated_by is stamped on every update call, whatever changed
    active.updated_by = Set(Some(audit::actor_json(actor)));
    active.updated_at = Set(audit::now_rfc3339());
    active.update(db).await?;

    Ok(())
}

pub async fn remove(db: &DatabaseConnection, id: &str, actor: &Actor) -> Result<(), ServiceError> {
    audit::remove::<ProductEntity>(db, id, actor, ENTITY).await
}

async fn resolve_type_names(
    db: &DatabaseConnection,
    type_ids: Vec<String>,
) -> Result<HashMap<String, String>, ServiceError> {
    let mut names = HashMap::new();

    if !type_ids.is_empty() {
        let types = TypeEntity::find()
            .filter(product_type::Column::Id.is_in(type_ids))
            .all(db)
            .await?;
        for t in types {
            names.insert(t.id, t.name);
        }
    }

    Ok(names)
}
