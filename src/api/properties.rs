use crate::api::SUCCESS;
use crate::db::{properties, reviews};
use crate::domain::{PropertyInput, PropertyPatch};
use crate::errors::ServerError;
use crate::request::{json_body, parse_id, QueryParams};
use crate::responses::{json_created, json_response, ResultResp};
use crate::search::SearchRequest;
use crate::state::AppState;
use astra::Request;

pub fn list(query: &QueryParams, state: &AppState) -> ResultResp {
    let (limit, offset) = (query.limit(10), query.offset());
    let found = state
        .db
        .with_conn(|conn| properties::list(conn, limit, offset))?;
    json_response(&found)
}

pub fn featured(query: &QueryParams, state: &AppState) -> ResultResp {
    let limit = query.limit(4);
    let found = state.db.with_conn(|conn| properties::featured(conn, limit))?;
    json_response(&found)
}

/// `q`, individual filter params, and an optional `filters=<json>` object.
pub fn search(query: &QueryParams, state: &AppState) -> ResultResp {
    let search = SearchRequest::from_api_query(query)?;
    let filter = search.to_sql();
    let found = state
        .db
        .with_conn(|conn| properties::search(conn, &filter, None))?;
    json_response(&found)
}

pub fn get(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "property")?;
    let property = state
        .db
        .with_conn(|conn| properties::get(conn, id))?
        .ok_or_else(|| ServerError::not_found("Property"))?;
    json_response(&property)
}

pub fn create(req: &mut Request, state: &AppState) -> ResultResp {
    let input: PropertyInput = json_body(req)?;
    let new = input.validate()?;
    let created = state.db.with_conn(|conn| properties::create(conn, &new))?;
    tracing::info!(id = created.id, name = %created.name, "property created");
    json_created(&created)
}

pub fn update(raw_id: &str, req: &mut Request, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "property")?;
    let patch: PropertyPatch = json_body(req)?;
    let patch = patch.validate()?;
    let updated = state
        .db
        .with_conn(|conn| properties::update(conn, id, &patch))?
        .ok_or_else(|| ServerError::not_found("Property"))?;
    json_response(&updated)
}

pub fn delete(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "property")?;
    if !state.db.with_conn(|conn| properties::soft_delete(conn, id))? {
        return Err(ServerError::not_found("Property"));
    }
    json_response(&SUCCESS)
}

pub fn reviews(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "property")?;
    let found = state
        .db
        .with_conn(|conn| reviews::list_for_property(conn, id))?;
    json_response(&found)
}
