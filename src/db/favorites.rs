use crate::db::properties;
use crate::db::rows::collect_rows;
use crate::domain::{Favorite, NewFavorite, Property};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

/// Properties the user has saved, most recent first.
pub fn list_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Property>, ServerError> {
    let sql = format!(
        r#"
        SELECT {}
        FROM favorites f
        JOIN properties p ON p.id = f.property_id
        WHERE f.user_id = ?1
        ORDER BY f.created_at DESC, f.id DESC
        "#,
        properties::columns(Some("p"))
    );
    let mut stmt = conn.prepare(&sql)?;
    Ok(collect_rows(&mut stmt, params![user_id], properties::from_row)?)
}

pub fn add(conn: &Connection, fav: NewFavorite) -> Result<Favorite, ServerError> {
    if !properties::exists(conn, fav.property_id)? {
        return Err(ServerError::not_found("Property"));
    }

    let now = Utc::now().naive_utc();
    let inserted = conn.execute(
        "INSERT INTO favorites (user_id, property_id, created_at) VALUES (?1, ?2, ?3)",
        params![fav.user_id, fav.property_id, now],
    );
    match inserted {
        Ok(_) => {}
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            return Err(ServerError::BadRequest(
                "Property is already a favorite".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(Favorite {
        id: conn.last_insert_rowid(),
        user_id: fav.user_id,
        property_id: fav.property_id,
        created_at: now,
    })
}

/// `false` when the pair was not saved.
pub fn remove(conn: &Connection, user_id: i64, property_id: i64) -> Result<bool, ServerError> {
    let n = conn.execute(
        "DELETE FROM favorites WHERE user_id = ?1 AND property_id = ?2",
        params![user_id, property_id],
    )?;
    Ok(n > 0)
}

pub fn is_favorite(conn: &Connection, user_id: i64, property_id: i64) -> Result<bool, ServerError> {
    let hit: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM favorites WHERE user_id = ?1 AND property_id = ?2",
            params![user_id, property_id],
            |r| r.get(0),
        )
        .optional()?;
    Ok(hit.is_some())
}
