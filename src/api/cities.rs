use crate::api::SUCCESS;
use crate::db::{cities, neighborhoods, properties};
use crate::domain::{CityInput, CityPatch};
use crate::errors::ServerError;
use crate::request::{json_body, parse_id, QueryParams};
use crate::responses::{json_created, json_response, ResultResp};
use crate::state::AppState;
use astra::Request;

pub fn list(query: &QueryParams, state: &AppState) -> ResultResp {
    let limit = query.limit(10);
    let found = state.db.with_conn(|conn| cities::list(conn, limit))?;
    json_response(&found)
}

pub fn featured(query: &QueryParams, state: &AppState) -> ResultResp {
    let limit = query.limit(4);
    let found = state.db.with_conn(|conn| cities::featured(conn, limit))?;
    json_response(&found)
}

pub fn by_name(name: &str, state: &AppState) -> ResultResp {
    let city = state
        .db
        .with_conn(|conn| cities::get_by_name(conn, name))?
        .ok_or_else(|| ServerError::not_found("City"))?;
    json_response(&city)
}

pub fn create(req: &mut Request, state: &AppState) -> ResultResp {
    let input: CityInput = json_body(req)?;
    let new = input.validate()?;
    let created = state.db.with_conn(|conn| cities::create(conn, &new))?;
    json_created(&created)
}

pub fn update(raw_id: &str, req: &mut Request, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "city")?;
    let patch: CityPatch = json_body(req)?;
    let updated = state
        .db
        .with_conn(|conn| cities::update(conn, id, &patch))?
        .ok_or_else(|| ServerError::not_found("City"))?;
    json_response(&updated)
}

pub fn delete(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "city")?;
    if !state.db.with_conn(|conn| cities::delete(conn, id))? {
        return Err(ServerError::not_found("City"));
    }
    json_response(&SUCCESS)
}

/// Active properties whose city contains `name`.
pub fn properties(name: &str, query: &QueryParams, state: &AppState) -> ResultResp {
    let (limit, offset) = (query.limit(10), query.offset());
    let found = state
        .db
        .with_conn(|conn| properties::by_city(conn, name, limit, offset))?;
    json_response(&found)
}

pub fn neighborhoods(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "city")?;
    let found = state
        .db
        .with_conn(|conn| neighborhoods::list_for_city(conn, id))?;
    json_response(&found)
}
