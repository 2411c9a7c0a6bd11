use crate::errors::ServerError;
use crate::templates;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a response. API paths get a JSON body,
/// everything else an HTML error page.
pub fn error_to_response(err: ServerError, path: &str) -> Response {
    match &err {
        ServerError::DbError(msg) => tracing::error!(%path, "database failure: {msg}"),
        ServerError::Upstream(msg) => tracing::warn!(%path, "hospitable proxy failure: {msg}"),
        ServerError::InternalError => tracing::error!(%path, "internal error"),
        _ => {}
    }

    if path.starts_with("/api/") || path == "/api" {
        json_error_response(&err)
    } else {
        templates::html_error_response(&err)
    }
}

/// `{"message": ...}` plus an `errors` list for validation failures.
pub fn json_error_response(err: &ServerError) -> Response {
    let body = match err {
        ServerError::Validation { errors, .. } => json!({
            "message": err.public_message(),
            "errors": errors,
        }),
        _ => json!({ "message": err.public_message() }),
    };

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
