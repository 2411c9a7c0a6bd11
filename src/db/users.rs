// src/db/users.rs
use crate::auth::password::hash_password;
use crate::domain::{NewUser, User};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};

fn from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: row.get(2)?,
    })
}

/// Store a new user with a salted password hash.
pub fn create(conn: &Connection, user: &NewUser) -> Result<User, ServerError> {
    if get_by_username(conn, &user.username)?.is_some() {
        return Err(taken());
    }

    let now = Utc::now().naive_utc();
    let hashed = hash_password(&user.password);

    let inserted = conn.execute(
        "INSERT INTO users (username, password, created_at) VALUES (?1, ?2, ?3)",
        params![user.username, hashed, now],
    );
    match inserted {
        Ok(_) => {}
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            return Err(taken());
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(username = %user.username, "user created");
    get(conn, conn.last_insert_rowid())?.ok_or(ServerError::InternalError)
}

fn taken() -> ServerError {
    ServerError::BadRequest("Username already taken".to_string())
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<User>, ServerError> {
    Ok(conn
        .query_row(
            "SELECT id, username, created_at FROM users WHERE id = ?1",
            params![id],
            from_row,
        )
        .optional()?)
}

pub fn get_by_username(conn: &Connection, username: &str) -> Result<Option<User>, ServerError> {
    Ok(conn
        .query_row(
            "SELECT id, username, created_at FROM users WHERE username = ?1",
            params![username.trim()],
            from_row,
        )
        .optional()?)
}
