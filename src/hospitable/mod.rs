//! Thin client for the Hospitable public API.
//!
//! Requests are forwarded as-is and the `data` member of the response
//! envelope is handed back to the caller as JSON.
pub mod client;
pub mod models;

pub use client::HospitableClient;
pub use models::{BookingFilter, StatusUpdate};
