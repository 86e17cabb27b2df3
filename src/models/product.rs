use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::CatalogEntity;
use crate::actor::ActorRef;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub type_id: Option<String>,
    pub price: i64,
    pub description: Option<String>,
    pub is_active: bool,
    pub image: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub deleted_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub is_deleted: bool,
    pub deleted_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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
    fn fuzzy_column() -> Option<Column> {
        Some(Column::Name)
    }
    fn filter_column(field: &str) -> Option<Column> {
        match field {
            "name" => Some(Column::Name),
            "type_id" => Some(Column::TypeId),
            "price" => Some(Column::Price),
            "is_active" => Some(Column::IsActive),
            "created_at" => Some(Column::CreatedAt),
            "updated_at" => Some(Column::UpdatedAt),
            _ => None,
        }
    }
}

// DTO for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub type_id: Option<String>,
    pub price: i64,
    pub description: Option<String>,
    pub is_active: bool,
    pub image: Option<String>,
    /// Resolved type name, present only when the caller asked for population
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
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

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            type_id: model.type_id,
            price: model.price,
            description: model.description,
            is_active: model.is_active,
            image: model.image,
            type_name: None,
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
