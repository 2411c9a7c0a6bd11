//! JSON endpoints under `/api`. Each handler maps one route onto a store
//! or proxy call and serializes the result.
pub mod cities;
pub mod favorites;
pub mod hospitable;
pub mod neighborhoods;
pub mod properties;
pub mod reviews;
pub mod users;

use serde::Serialize;

/// `{"success": true}` body for deletes.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

pub const SUCCESS: Success = Success { success: true };
