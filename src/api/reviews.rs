use crate::api::SUCCESS;
use crate::db::reviews;
use crate::domain::ReviewInput;
use crate::errors::ServerError;
use crate::request::{json_body, parse_id};
use crate::responses::{json_created, json_response, ResultResp};
use crate::state::AppState;
use astra::Request;

pub fn create(req: &mut Request, state: &AppState) -> ResultResp {
    let input: ReviewInput = json_body(req)?;
    let new = input.validate()?;
    let created = state.db.with_conn(|conn| reviews::create(conn, &new))?;
    json_created(&created)
}

pub fn delete(raw_id: &str, state: &AppState) -> ResultResp {
    let id = parse_id(raw_id, "review")?;
    if !state.db.with_conn(|conn| reviews::delete(conn, id))? {
        return Err(ServerError::not_found("Review"));
    }
    json_response(&SUCCESS)
}
