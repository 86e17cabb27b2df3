use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only log of rating status transitions. Rows are inserted once and
/// never updated or deleted; insertion order is the transition order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rating_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rating_id: String,
    pub status: String,
    pub updated_at: String,
    pub updated_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rating::Entity",
        from = "Column::RatingId",
        to = "super::rating::Column::Id"
    )]
    Rating,
}

impl Related<super::rating::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rating.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
