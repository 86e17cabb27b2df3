//! Service error types
//!
//! One error taxonomy for every entity service: malformed input, missing
//! record, store failure, external collaborator failure. Point lookups on a
//! valid-but-absent id return `NotFound`; a malformed id is a `Validation`
//! error and never reaches the store.

use std::fmt;

#[derive(Debug)]
pub enum ServiceError {
    /// Malformed identifier or missing/invalid field in a request
    Validation(String),
    /// Valid-format identifier that matches no record
    NotFound(String),
    /// Database/persistence error
    Database(String),
    /// External collaborator (sentiment classifier) error
    External(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ServiceError::NotFound(what) => write!(f, "{} not found", what),
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
            ServiceError::External(msg) => write!(f, "External service error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

// Conversion from SeaORM errors (used throughout the services layer)
impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Database(e.to_string())
    }
}
