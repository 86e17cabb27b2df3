//! Interaction service - engagement counters per user/product pair.
//! Mirrored from product_service.rs

use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

use super::audit;
use super::listing::{self, ListQuery, Page};
use super::Created;
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::models::interaction::{self, Entity as InteractionEntity, Interaction};
use crate::models::product::{self, Entity as ProductEntity};
use crate::models::user::{self, Entity as UserEntity};

const ENTITY: &str = "Interaction";

#[derive(Debug, Deserialize)]
pub struct CreateInteraction {
    pub user_id: String,
    pub product_id: String,
    pub clicks: Option<i64>,
    pub views: Option<i64>,
    pub purchased: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInteraction {
    pub clicks: Option<i64>,
    pub views: Option<i64>,
    pub purchased: Option<i64>,
}

pub async fn create(
    db: &DatabaseConnection,
    payload: CreateInteraction,
    actor: &Actor,
) -> Result<Created, ServiceError> {
    audit::validate_id(&payload.user_id, "User")?;
    audit::validate_id(&payload.product_id, "Product")?;

    let now = audit::now_rfc3339();
    let new_interaction = interaction::ActiveModel {
        id: Set(audit::new_id()),
        user_id: Set(payload.user_id),
        product_id: Set(payload.product_id),
        clicks: Set(payload.clicks.unwrap_or(0)),
        views: Set(payload.views.unwrap_or(0)),
        purchased: Set(payload.purchased.unwrap_or(0)),
        created_by: Set(Some(audit::actor_json(actor))),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };

    let saved = new_interaction.insert(db).await?;

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
) -> Result<Page<Interaction>, ServiceError> {
    let query = ListQuery::parse(qs);
    let page = listing::run::<InteractionEntity>(db, current, page_size, &query).await?;

    let mut product_names = HashMap::new();
    if query.populates("product") {
        let ids: Vec<String> = page.result.iter().map(|i| i.product_id.clone()).collect();
        if !ids.is_empty() {
            for p in ProductEntity::find()
                .filter(product::Column::Id.is_in(ids))
                .all(db)
                .await?
            {
                product_names.insert(p.id, p.name);
            }
        }
    }

    let mut user_names = HashMap::new();
    if query.populates("user") {
        let ids: Vec<String> = page.result.iter().map(|i| i.user_id.clone()).collect();
        if !ids.is_empty() {
            for u in UserEntity::find()
                .filter(user::Column::Id.is_in(ids))
                .all(db)
                .await?
            {
                user_names.insert(u.id, u.name);
            }
        }
    }

    Ok(page.map(|model| {
        let mut dto = Interaction::from(model);
        dto.product_name = product_names.get(&dto.product_id).cloned();
        dto.user_name = user_names.get(&dto.user_id).cloned();
        dto
    }))
}

pub async fn find_one(db: &DatabaseConnection, id: &str) -> Result<Interaction, ServiceError> {
    let model = listing::find_by_id::<InteractionEntity>(db, id, ENTITY).await?;
    Ok(Interaction::from(model))
}

pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    payload: UpdateInteraction,
    actor: &Actor,
) -> Result<(), ServiceError> {
    let model = listing::find_by_id::<InteractionEntity>(db, id, ENTITY).await?;

    let mut active: interaction::ActiveModel = model.into();
    if let Some(clicks) = payload.clicks {
        active.clicks = Set(clicks);
    }
    if let Some(views) = payload.views {
        active.views = Set(views);
    }
    if let Some(purchased) = payload.purchased {
        active.purchased = Set(purchased);
    }

    active.updated_by = Set(Some(audit::actor_json(actor)));
    active.updated_at = Set(audit::now_rfc3339());
    active.update(db).await?;

    Ok(())
}

pub async fn remove(db: &DatabaseConnection, id: &str, actor: &Actor) -> Result<(), ServiceError> {
    audit::remove::<InteractionEntity>(db, id, actor, ENTITY).await
}
