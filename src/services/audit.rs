//! Actor stamping and the shared soft-delete sequence.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::models::CatalogEntity;

pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Serialize the actor snapshot for an audit column.
pub fn actor_json(actor: &Actor) -> String {
    serde_json::to_string(&actor.snapshot()).unwrap_or_default()
}

/// Caller-supplied identifiers are format-checked before any store call;
/// a malformed id never reaches the database.
pub fn validate_id(id: &str, entity: &str) -> Result<(), ServiceError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| ServiceError::Validation(format!("invalid {} id: {}", entity, id)))
}

/// Soft-remove a record: stamp `deleted_by`, then flip `is_deleted` and set
/// `deleted_at`. The two steps are separate store updates, not a
/// transaction; both are idempotent, so a caller that saw a failure between
/// them re-drives the whole sequence safely.
pub async fn remove<E>(
    db: &DatabaseConnection,
    id: &str,
    actor: &Actor,
    entity: &str,
) -> Result<(), ServiceError>
where
    E: CatalogEntity,
    E::Model: Sync,
{
    validate_id(id, entity)?;

    // The lookup deliberately includes already-deleted rows: a retry after
    // a partial failure must find the stamped record.
    let exists = E::find()
        .filter(E::id_column().eq(id))
        .one(db)
        .await?
        .is_some();
    if !exists {
        return Err(ServiceError::NotFound(entity.to_string()));
    }

    E::update_many()
        .col_expr(E::deleted_by_column(), Expr::value(actor_json(actor)))
        .filter(E::id_column().eq(id))
        .exec(db)
        .await?;

    E::update_many()
        .col_expr(E::deleted_column(), Expr::value(true))
        .col_expr(E::deleted_at_column(), Expr::value(now_rfc3339()))
        .filter(E::id_column().eq(id))
        .exec(db)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_ids() {
        assert!(validate_id("not-a-uuid", "Product").is_err());
        assert!(validate_id("", "Product").is_err());
        assert!(validate_id("123", "Product").is_err());
    }

    #[test]
    fn accepts_uuid_ids() {
        let id = new_id();
        assert!(validate_id(&id, "Product").is_ok());
    }
}
