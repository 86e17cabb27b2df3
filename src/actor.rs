//! Acting identity for mutations.
//!
//! Authentication lives in the upstream gateway; this layer only consumes
//! the identity it forwards and snapshots it into audit fields. The snapshot
//! is denormalized on purpose: audit history must survive actor deletion.

use axum::{
    async_trait,
    extract::{FromRequestParts, Json},
    http::{request::Parts, StatusCode},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The authenticated identity performing a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: String,
    pub email: String,
}

/// Immutable `{id, email}` snapshot embedded in `created_by` / `updated_by` /
/// `deleted_by` columns at mutation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: String,
    pub email: String,
}

impl Actor {
    pub fn snapshot(&self) -> ActorRef {
        ActorRef {
            id: self.id.clone(),
            email: self.email.clone(),
        }
    }
}

impl ActorRef {
    /// Parse a stored audit column back into a snapshot. Malformed stored
    /// JSON degrades to `None` rather than failing the read.
    pub fn from_column(raw: &Option<String>) -> Option<ActorRef> {
        raw.as_deref().and_then(|s| serde_json::from_str(s).ok())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string())
        };

        let id = header("x-actor-id");
        let email = header("x-actor-email");

        match (id, email) {
            (Some(id), Some(email)) if !id.is_empty() && !email.is_empty() => {
                Ok(Actor { id, email })
            }
            _ => Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Missing actor identity headers" })),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trips_through_a_column() {
        let actor = Actor {
            id: "a1".to_string(),
            email: "admin@example.com".to_string(),
        };
        let stored = serde_json::to_string(&actor.snapshot()).unwrap();
        let parsed = ActorRef::from_column(&Some(stored)).unwrap();
        assert_eq!(parsed, actor.snapshot());
    }

    #[test]
    fn malformed_column_parses_to_none() {
        assert_eq!(ActorRef::from_column(&Some("not json".to_string())), None);
        assert_eq!(ActorRef::from_column(&None), None);
    }
}
