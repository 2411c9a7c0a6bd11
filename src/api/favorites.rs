use crate::api::SUCCESS;
use crate::db::favorites;
use crate::domain::{FavoriteInput, FavoriteKey};
use crate::errors::ServerError;
use crate::request::{json_body, parse_id, QueryParams};
use crate::responses::{json_created, json_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use serde_json::json;

pub fn for_user(raw_user_id: &str, state: &AppState) -> ResultResp {
    let user_id = parse_id(raw_user_id, "user")?;
    let found = state
        .db
        .with_conn(|conn| favorites::list_for_user(conn, user_id))?;
    json_response(&found)
}

pub fn add(req: &mut Request, state: &AppState) -> ResultResp {
    let input: FavoriteInput = json_body(req)?;
    let new = input.validate()?;
    let created = state.db.with_conn(|conn| favorites::add(conn, new))?;
    json_created(&created)
}

pub fn remove(req: &mut Request, state: &AppState) -> ResultResp {
    let key: FavoriteKey = json_body(req)?;
    let (user_id, property_id) = key
        .ids()
        .ok_or_else(|| ServerError::BadRequest("userId and propertyId are required".into()))?;

    if !state
        .db
        .with_conn(|conn| favorites::remove(conn, user_id, property_id))?
    {
        return Err(ServerError::not_found("Favorite"));
    }
    json_response(&SUCCESS)
}

pub fn check(query: &QueryParams, state: &AppState) -> ResultResp {
    let user_id = parse_id(query.get("userId").unwrap_or_default(), "user")?;
    let property_id = parse_id(query.get("propertyId").unwrap_or_default(), "property")?;
    let is_favorite = state
        .db
        .with_conn(|conn| favorites::is_favorite(conn, user_id, property_id))?;
    json_response(&json!({ "isFavorite": is_favorite }))
}
