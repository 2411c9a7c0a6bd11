// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as a 200 JSON response.
pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    json_with_status(200, value)
}

pub fn json_created<T: Serialize>(value: &T) -> ResultResp {
    json_with_status(201, value)
}

fn json_with_status<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        tracing::error!("response serialization failed: {e}");
        ServerError::InternalError
    })?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
