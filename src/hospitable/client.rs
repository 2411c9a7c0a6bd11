// client.rs
use crate::errors::ServerError;
use crate::hospitable::models::{BookingFilter, Envelope, StatusUpdate, UpstreamError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;

pub const CONNECT_VERSION: &str = "2024-01";

#[derive(Debug, Clone)]
pub struct HospitableClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HospitableClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, ServerError> {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        // tests talk to a stub on loopback and must not be routed through HTTP_PROXY
        #[cfg(test)]
        let builder = builder.no_proxy();
        let client = builder
            .build()
            .map_err(|e| ServerError::Upstream(format!("client init failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Absolute URL for an API path, with or without a leading `/`.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn headers(&self) -> Result<HeaderMap, ServerError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| ServerError::Upstream("API token is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("connect-version"),
            HeaderValue::from_static(CONNECT_VERSION),
        );
        Ok(headers)
    }

    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ServerError> {
        let url = self.url_for(path);
        tracing::debug!(%method, %url, "hospitable request");

        let mut req = self.client.request(method, &url).headers(self.headers()?);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().map_err(|e| {
            tracing::warn!(%url, error = %e, "hospitable request failed");
            ServerError::Upstream(e.to_string())
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ServerError::Upstream(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(status.as_u16(), &text);
            tracing::warn!(%url, status = status.as_u16(), %message, "hospitable returned an error");
            return Err(ServerError::Upstream(message));
        }

        let envelope: Envelope<Value> = serde_json::from_str(&text)
            .map_err(|e| ServerError::Upstream(format!("unexpected response shape: {e}")))?;
        Ok(envelope.data)
    }

    pub fn properties(&self) -> Result<Value, ServerError> {
        self.request(Method::GET, "/properties", None)
    }

    pub fn property(&self, id: &str) -> Result<Value, ServerError> {
        self.request(Method::GET, &format!("/properties/{}", encode(id)), None)
    }

    pub fn customers(&self) -> Result<Value, ServerError> {
        self.request(Method::GET, "/customers", None)
    }

    pub fn customer(&self, id: &str) -> Result<Value, ServerError> {
        self.request(Method::GET, &format!("/customers/{}", encode(id)), None)
    }

    pub fn create_customer(&self, customer: &Value) -> Result<Value, ServerError> {
        self.request(Method::POST, "/customers", Some(customer))
    }

    pub fn bookings(&self, filter: &BookingFilter) -> Result<Value, ServerError> {
        self.request(Method::GET, &bookings_path(filter), None)
    }

    pub fn create_booking(&self, booking: &Value) -> Result<Value, ServerError> {
        self.request(Method::POST, "/bookings", Some(booking))
    }

    pub fn update_booking_status(&self, id: &str, update: StatusUpdate) -> Result<Value, ServerError> {
        let body = serde_json::to_value(update)?;
        self.request(
            Method::PATCH,
            &format!("/bookings/{}/status", encode(id)),
            Some(&body),
        )
    }
}

/// `/bookings?propertyId=..&customerId=..`, keeping only the filters that are set.
pub fn bookings_path(filter: &BookingFilter) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(id) = filter.property_id.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("propertyId", id);
    }
    if let Some(id) = filter.customer_id.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("customerId", id);
    }
    format!("/bookings?{}", query.finish())
}

/// Upstream `message` if the body carries one, else a status line.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<UpstreamError>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

fn encode(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}
