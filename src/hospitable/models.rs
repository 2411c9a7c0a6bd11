use serde::{Deserialize, Serialize};

/// Every Hospitable response wraps its payload in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body returned by the upstream on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamError {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Body of `PATCH /bookings/:id/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

/// Optional filters for the bookings listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub property_id: Option<String>,
    pub customer_id: Option<String>,
}
