//! Aggregate counters for the admin dashboard.
//!
//! Each counter is an independent count query with a fixed equality filter;
//! there is no shared state between them, and the dashboard caller decides
//! how to combine (and how to degrade) them.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::domain::ServiceError;
use crate::models::{interaction, product, product_type, rating, user};

pub async fn count_ratings(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = rating::Entity::find()
        .filter(rating::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn count_positive_ratings(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    count_by_positivity(db, true).await
}

pub async fn count_negative_ratings(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    count_by_positivity(db, false).await
}

async fn count_by_positivity(
    db: &DatabaseConnection,
    positive: bool,
) -> Result<u64, ServiceError> {
    let count = rating::Entity::find()
        .filter(rating::Column::IsDeleted.eq(false))
        .filter(rating::Column::IsPositive.eq(positive))
        .count(db)
        .await?;
    Ok(count)
}

/// Count comments the external classifier labeled `label`
/// (Positive / Negative / Neutral). Unlabeled comments count nowhere.
pub async fn count_comments_by_sentiment(
    db: &DatabaseConnection,
    label: &str,
) -> Result<u64, ServiceError> {
    let count = rating::Entity::find()
        .filter(rating::Column::IsDeleted.eq(false))
        .filter(rating::Column::CommentSentiment.eq(label))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn count_products(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = product::Entity::find()
        .filter(product::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn count_types(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = product_type::Entity::find()
        .filter(product_type::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn count_users(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = user::Entity::find()
        .filter(user::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn count_interactions(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = interaction::Entity::find()
        .filter(interaction::Column::IsDeleted.eq(false))
        .count(db)
        .await?;
    Ok(count)
}
