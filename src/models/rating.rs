use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::actor::ActorRef;

/// Rating workflow states. Every transition is appended to the rating's
/// history; the history itself is never mutated.
pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_REJECTED: &str = "REJECTED";

pub fn is_known_status(status: &str) -> bool {
    matches!(status, STATUS_PENDING | STATUS_APPROVED | STATUS_REJECTED)
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_id: Option<String>,
    pub type_id: Option<String>,
    pub user_id: String,
    pub comment: Option<String>,
    pub status: String,
    pub is_positive: Option<bool>,
    pub comment_sentiment: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub is_deleted: bool,
    pub deleted_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rating_history::Entity")]
    History,
}

impl Related<super::rating_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::History.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl CatalogEntity for Entity {
    fn id_column() -> Column {
        Column::Id
    }
    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }
    fn updated_by_column() -> Column {
        Column::UpdatedBy
    }
    fn deleted_column() -> Column {
        Column::IsDeleted
    }
    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }
    fn deleted_by_column() -> Column {
        Column::DeletedBy
    }
    fn filter_column(field: &str) -> Option<Column> {
        match field {
            "product_id" => Some(Column::ProductId),
            "type_id" => Some(Column::TypeId),
            "user_id" => Some(Column::UserId),
            "status" => Some(Column::Status),
            "is_positive" => Some(Column::IsPositive),
            "comment_sentiment" => Some(Column::CommentSentiment),
            "created_at" => Some(Column::CreatedAt),
            "updated_at" => Some(Column::UpdatedAt),
            _ => None,
        }
    }
}

/// One status transition, as exposed in API responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub status: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<ActorRef>,
}

impl From<super::rating_history::Model> for HistoryEntry {
    fn from(model: super::rating_history::Model) -> Self {
        Self {
            status: model.status,
            updated_at: model.updated_at,
            updated_by: ActorRef::from_column(&model.updated_by),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    pub product_id: Option<String>,
    pub type_id: Option<String>,
    pub user_id: String,
    pub comment: Option<String>,
    pub status: String,
    pub is_positive: Option<bool>,
    pub comment_sentiment: Option<String>,
    /// Resolved names, present only when the caller asked for population
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Workflow audit trail, present only on point lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ActorRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<ActorRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<ActorRef>,
    pub created_at: String,
    pub updated_at: String,
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl From<Model> for Rating {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            product_id: model.product_id,
            type_id: model.type_id,
            user_id: model.user_id,
            comment: model.comment,
            status: model.status,
            is_positive: model.is_positive,
            comment_sentiment: model.comment_sentiment,
            product_name: None,
            type_name: None,
            user_name: None,
            history: None,
            created_by: ActorRef::from_column(&model.created_by),
            updated_by: ActorRef::from_column(&model.updated_by),
            deleted_by: ActorRef::from_column(&model.deleted_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at,
        }
    }
}
