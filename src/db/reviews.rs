use crate::db::properties;
use crate::db::rows::collect_rows;
use crate::domain::review::aggregate_rating;
use crate::domain::{NewReview, Review};
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

fn from_row(row: &Row) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        property_id: row.get(1)?,
        user_id: row.get(2)?,
        user_name: row.get(3)?,
        user_image: row.get(4)?,
        rating: row.get(5)?,
        comment: row.get(6)?,
        date: row.get(7)?,
    })
}

pub fn list_for_property(conn: &Connection, property_id: i64) -> Result<Vec<Review>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, property_id, user_id, user_name, user_image, rating, comment, date
        FROM reviews
        WHERE property_id = ?1
        ORDER BY date DESC, id DESC
        "#,
    )?;
    Ok(collect_rows(&mut stmt, params![property_id], from_row)?)
}

/// Insert a review and refresh the property's rating in one transaction.
pub fn create(conn: &mut Connection, review: &NewReview) -> Result<Review, ServerError> {
    let tx = conn.transaction()?;

    if !properties::exists(&tx, review.property_id)? {
        return Err(ServerError::not_found("Property"));
    }

    let now = Utc::now().naive_utc();
    tx.execute(
        r#"
        INSERT INTO reviews (property_id, user_id, user_name, user_image, rating, comment, date)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
            review.property_id,
            review.user_id,
            review.user_name,
            review.user_image,
            review.rating,
            review.comment,
            now,
        ],
    )?;
    let id = tx.last_insert_rowid();
    recompute_rating(&tx, review.property_id)?;
    tx.commit()?;

    tracing::debug!(review_id = id, property_id = review.property_id, "review created");
    Ok(Review {
        id,
        property_id: review.property_id,
        user_id: review.user_id,
        user_name: review.user_name.clone(),
        user_image: review.user_image.clone(),
        rating: review.rating,
        comment: review.comment.clone(),
        date: now,
    })
}

/// Remove a review and refresh its property's rating. `false` when absent.
pub fn delete(conn: &mut Connection, id: i64) -> Result<bool, ServerError> {
    let tx = conn.transaction()?;

    let property_id: Option<i64> = tx
        .query_row(
            "SELECT property_id FROM reviews WHERE id = ?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?;
    let Some(property_id) = property_id else {
        return Ok(false);
    };

    tx.execute("DELETE FROM reviews WHERE id = ?1", params![id])?;
    recompute_rating(&tx, property_id)?;
    tx.commit()?;
    Ok(true)
}

fn recompute_rating(conn: &Connection, property_id: i64) -> Result<(), ServerError> {
    let mut stmt = conn.prepare("SELECT rating FROM reviews WHERE property_id = ?1")?;
    let ratings: Vec<f64> = collect_rows(&mut stmt, params![property_id], |r| r.get(0))?;
    let (rating, count) = aggregate_rating(&ratings);
    properties::set_rating(conn, property_id, rating, count)
}
