//! Services Layer
//!
//! Business logic between the HTTP handlers and the store. One generic
//! listing/audit core shared by every entity, plus thin per-entity wrappers
//! holding the field allow-lists.

pub mod audit;
pub mod interaction_service;
pub mod listing;
pub mod product_service;
pub mod rating_service;
pub mod stats_service;
pub mod type_service;
pub mod user_service;

use serde::Serialize;

/// Returned by every create call: just the new id and creation timestamp.
/// Callers that need the full record re-fetch it by id.
#[derive(Debug, Serialize)]
pub struct Created {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
