//! User service - admin-facing CRUD over catalog users.
//! Credentials and sessions live in the upstream gateway, not here.

use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Deserialize;

use super::audit;
use super::listing::{self, ListQuery, Page};
use super::Created;
use crate::actor::Actor;
use crate::domain::ServiceError;
use crate::models::user::{self, Entity as UserEntity, User};

const ENTITY: &str = "User";

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub async fn create(
    db: &DatabaseConnection,
    payload: CreateUser,
    actor: &Actor,
) -> Result<Created, ServiceError> {
    if payload.name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "user name is required".to_string(),
        ));
    }
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(ServiceError::Validation(
            "a valid email is required".to_string(),
        ));
    }

    let now = audit::now_rfc3339();
    let new_user = user::ActiveModel {
        id: Set(audit::new_id()),
        name: Set(payload.name),
        email: Set(payload.email),
        role: Set(payload.role.unwrap_or_else(|| "user".to_string())),
        address: Set(payload.address),
        phone: Set(payload.phone),
        created_by: Set(Some(audit::actor_json(actor))),
        updated_by: Set(None),
        deleted_by: Set(None),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        is_deleted: Set(false),
        deleted_at: Set(None),
    };

    let saved = new_user.insert(db).await?;

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
) -> Result<Page<User>, ServiceError> {
    let query = ListQuery::parse(qs);
    let page = listing::run::<UserEntity>(db, current, page_size, &query).await?;
    Ok(page.map(User::from))
}

pub async fn find_one(db: &DatabaseConnection, id: &str) -> Result<User, ServiceError> {
    let model = listing::find_by_id::<UserEntity>(db, id, ENTITY).await?;
    Ok(User::from(model))
}

pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    payload: UpdateUser,
    actor: &Actor,
) -> Result<(), ServiceError> {
    let model = listing::find_by_id::<UserEntity>(db, id, ENTITY).await?;

    let mut active: user::ActiveModel = model.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(email) = payload.email {
        if !email.contains('@') {
            return Err(ServiceError::Validation(
                "a valid email is required".to_string(),
            ));
        }
        active.email = Set(email);
    }
    if let Some(role) = payload.role {
        active.role = Set(role);
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }

    active.updated_by = Set(Some(audit::actor_json(actor)));
    active.updated_at = Set(audit::now_rfc3339());
    active.update(db).await?;

    Ok(())
}

pub async fn remove(db: &DatabaseConnection, id: &str, actor: &Actor) -> Result<(), ServiceError> {
    audit::remove::<UserEntity>(db, id, actor, ENTITY).await
}
