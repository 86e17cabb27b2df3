//! Rating service - review workflow over products.
//!
//! Ratings carry a moderation status (PENDING until approved or rejected)
//! and an append-only history of status transitions. The comment is run
//! through the external sentiment classifier at creation time when one is
//! configured.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;

use super::audit;
use super::listing::{self, ListQuery, Page};
use super::Created;
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::models::product::{self, Entity as ProductEntity};
use crate::models::product_type::{self, Entity as TypeEntity};
use crate::models::rating::{self, Entity as RatingEntity, HistoryEntry, Rating};
use crate::models::rating_history::{self, Entity as HistoryEntity};
use crate::models::user::{self, Entity as UserEntity};
use crate::sentiment::SentimentClient;

const ENTITY: &str = "Rating";

#[derive(Debug, Deserialize)]
pub struct CreateRating {
    pub product_id: Option<String>,
    pub type_id: Option<String>,
    pub comment: Option<String>,
    pub is_positive: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRating {
    pub status: String,
}

pub async fn create(
    db: &DatabaseConnection,
    sentiment: Option<&SentimentClient>,
    payload: CreateRating,
    actor: &Actor,
) -> Result<Created, ServiceError> {
    if let Some(product_id) = &payload.product_id {
        audit::validate_id(product_id, "Product")?;
    }
    if let Some(type_id) = &payload.type_id {
        audit::validate_id(type_id, "ProductType")?;
    }

    // Classifier failure is non-fatal: the rating is stored without a label
    // and simply stays invisible to the sentiment counters.
    let comment_sentiment = match (sentiment, payload.comment.as_deref()) {
        (Some(client), Some(comment)) if !comment.is_empty() => {
            match client.classify(comment).await {
                Ok(label) => Some(label.as_str().to_string()),
                Err(e) => {
                    tracing::warn!("sentiment classification failed: {}", e);
                    None
                }
            }
        }
        _ => None,
    };

    let now = audit::now_rfc3339();
    let new_rating = rating::ActiveModel {
        id: Set(audit::new_id()),
        product_id: Set(payload.product_id),
        type_id: Set(payload.type_id),
        user_id: Set(actor.id.clone()),
        comment: Set(payload.comment),
        status: Set(rating::STATUS_PENDING.to_string()),
        is_positive: Set(payload.is_positive),
        comment_sentiment: Set(comment_sentiment),
        created_by: Set(Some(audit::actor_json(actor))),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };

    let saved = new_rating.insert(db).await?;

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
) -> Result<Page<Rating>, ServiceError> {
    let query = ListQuery::parse(qs);
    let page = listing::run::<RatingEntity>(db, current, page_size, &query).await?;

    let refs = RelatedNames::resolve(db, &query, &page.result).await?;

    Ok(page.map(|model| refs.apply(Rating::from(model))))
}

/// Point lookup, history included.
pub async fn find_one(db: &DatabaseConnection, id: &str) -> Result<Rating, ServiceError> {
    let model = listing::find_by_id::<RatingEntity>(db, id, ENTITY).await?;

    let history = HistoryEntity::find()
        .filter(rating_history::Column::RatingId.eq(id))
        .order_by_asc(rating_history::Column::Id)
        .all(db)
        .await?;

    let mut dto = Rating::from(model);
    dto.history = Some(history.into_iter().map(HistoryEntry::from).collect());
    Ok(dto)
}

/// The acting user's own ratings, newest first, with product and type
/// names resolved.
pub async fn find_by_user(db: &DatabaseConnection, actor: &Actor) -> Result<Vec<Rating>, ServiceError> {
    let models = RatingEntity::find()
        .filter(rating::Column::UserId.eq(actor.id.as_str()))
        .filter(rating::Column::IsDeleted.eq(false))
        .order_by_desc(rating::Column::CreatedAt)
        .all(db)
        .await?;

    let query = ListQuery {
        populate: vec!["product".to_string(), "type".to_string()],
        ..Default::default()
    };
    let refs = RelatedNames::resolve(db, &query, &models).await?;

    Ok(models
        .into_iter()
        .map(|model| refs.apply(Rating::from(model)))
        .collect())
}

/// Status transition: stamps the audit fields and appends exactly one
/// history entry. Only the status changes here; ratings have no other
/// mutable fields once created.
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    payload: UpdateRating,
    actor: &Actor,
) -> Result<(), ServiceError> {
    if !rating::is_known_status(&payload.status) {
        return Err(ServiceError::Validation(format!(
            "unknown rating status: {}",
            payload.status
        )));
    }

    let model = listing::find_by_id::<RatingEntity>(db, id, ENTITY).await?;

    let now = audit::now_rfc3339();
    let mut active: rating::ActiveModel = model.into();
    active.status = Set(payload.status.clone());
    active.updated_by = Set(Some(audit::actor_json(actor)));
    active.updated_at = Set(now.clone());
    active.update(db).await?;

    append_history(db, id, &payload.status, &now, actor).await?;

    Ok(())
}

pub async fn remove(db: &DatabaseConnection, id: &str, actor: &Actor) -> Result<(), ServiceError> {
    audit::remove::<RatingEntity>(db, id, actor, ENTITY).await
}

async fn append_history(
    db: &DatabaseConnection,
    rating_id: &str,
    status: &str,
    at: &str,
    actor: &Actor,
) -> Result<(), ServiceError> {
    let entry = rating_history::ActiveModel {
        rating_id: Set(rating_id.to_string()),
        status: Set(status.to_string()),
        updated_at: Set(at.to_string()),
        updated_by: Set(Some(audit::actor_json(actor))),
        ..Default::default()
    };
    entry.insert(db).await?;
    Ok(())
}

/// Resolved names for the relation paths a list call asked to populate.
struct RelatedNames {
    products: HashMap<String, String>,
    types: HashMap<String, String>,
    users: HashMap<String, String>,
}

impl RelatedNames {
    async fn resolve(
        db: &DatabaseConnection,
        query: &ListQuery,
        models: &[rating::Model],
    ) -> Result<Self, ServiceError> {
        let mut products = HashMap::new();
        let mut types = HashMap::new();
        let mut users = HashMap::new();

        if query.populates("product") {
            let ids: Vec<String> = models.iter().filter_map(|r| r.product_id.clone()).collect();
            if !ids.is_empty() {
                for p in ProductEntity::find()
                    .filter(product::Column::Id.is_in(ids))
                    .all(db)
                    .await?
                {
                    products.insert(p.id, p.name);
                }
            }
        }

        if query.populates("type") {
            let ids: Vec<String> = models.iter().filter_map(|r| r.type_id.clone()).collect();
            if !ids.is_empty() {
                for t in TypeEntity::find()
                    .filter(product_type::Column::Id.is_in(ids))
                    .all(db)
                    .await?
                {
                    types.insert(t.id, t.name);
                }
            }
        }

        if query.populates("user") {
            let ids: Vec<String> = models.iter().map(|r| r.user_id.clone()).collect();
            if !ids.is_empty() {
                for u in UserEntity::find()
                    .filter(user::Column::Id.is_in(ids))
                    .all(db)
                    .await?
                {
                    users.insert(u.id, u.name);
                }
            }
        }

        Ok(Self {
            products,
            types,
            users,
        })
    }

    fn apply(&self, mut dto: Rating) -> Rating {
        if let Some(product_id) = &dto.product_id {
            dto.product_name = self.products.get(product_id).cloned();
        }
        if let Some(type_id) = &dto.type_id {
            dto.type_name = self.types.get(type_id).cloned();
        }
        dto.user_name = self.users.get(&dto.user_id).cloned();
        dto
    }
}
