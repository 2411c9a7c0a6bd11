use crate::db::neighborhoods;
use crate::domain::NeighborhoodInput;
use crate::request::json_body;
use crate::responses::{json_created, ResultResp};
use crate::state::AppState;
use astra::Request;

pub fn create(req: &mut Request, state: &AppState) -> ResultResp {
    let input: NeighborhoodInput = json_body(req)?;
    let new = input.validate()?;
    let created = state
        .db
        .with_conn(|conn| neighborhoods::create(conn, &new))?;
    json_created(&created)
}
