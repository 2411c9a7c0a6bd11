use crate::db::users;
use crate::domain::UserInput;
use crate::request::json_body;
use crate::responses::{json_created, ResultResp};
use crate::state::AppState;
use astra::Request;

/// Register a user. The response never includes the password.
pub fn create(req: &mut Request, state: &AppState) -> ResultResp {
    let input: UserInput = json_body(req)?;
    let new = input.validate()?;
    let user = state.db.with_conn(|conn| users::create(conn, &new))?;
    json_created(&user)
}
