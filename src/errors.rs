// errors.rs
use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure, reported back in 400 responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, Hospitable).
#[derive(Debug, Error)]
pub enum ServerError {
    /// Carries the kind of thing that was missing, e.g. "Property".
    #[error("{0} not found")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid {subject} data")]
    Validation {
        subject: String,
        errors: Vec<FieldError>,
    },

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Upstream Error: {0}")]
    Upstream(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn not_found(what: &str) -> Self {
        ServerError::NotFound(what.to_string())
    }

    pub fn validation(subject: &str, errors: Vec<FieldError>) -> Self {
        ServerError::Validation {
            subject: subject.to_string(),
            errors,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::BadRequest(_) | ServerError::Validation { .. } => 400,
            ServerError::DbError(_) | ServerError::Upstream(_) | ServerError::InternalError => 500,
        }
    }

    /// Message safe to show to a caller. 500s collapse to a generic line.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::DbError(_) | ServerError::Upstream(_) | ServerError::InternalError => {
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(e: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("invalid JSON: {e}"))
    }
}
