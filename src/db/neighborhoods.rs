use crate::db::rows::collect_rows;
use crate::domain::{Neighborhood, NewNeighborhood};
use crate::errors::ServerError;
use rusqlite::{params, Connection, Row};

fn from_row(row: &Row) -> rusqlite::Result<Neighborhood> {
    Ok(Neighborhood {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        city_id: row.get(3)?,
        description: row.get(4)?,
        image_url: row.get(5)?,
        property_count: row.get(6)?,
    })
}

pub fn list_for_city(conn: &Connection, city_id: i64) -> Result<Vec<Neighborhood>, ServerError> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, name, slug, city_id, description, image_url, property_count
        FROM neighborhoods
        WHERE city_id = ?1
        ORDER BY name COLLATE NOCASE
        "#,
    )?;
    Ok(collect_rows(&mut stmt, params![city_id], from_row)?)
}

/// Insert a neighborhood. An unknown city is a 404.
pub fn create(conn: &Connection, n: &NewNeighborhood) -> Result<Neighborhood, ServerError> {
    if crate::db::cities::get(conn, n.city_id)?.is_none() {
        return Err(ServerError::not_found("City"));
    }

    conn.execute(
        r#"
        INSERT INTO neighborhoods (name, slug, city_id, description, image_url, property_count)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            n.name,
            n.slug,
            n.city_id,
            n.description,
            n.image_url,
            n.property_count
        ],
    )?;

    Ok(Neighborhood {
        id: conn.last_insert_rowid(),
        name: n.name.clone(),
        slug: n.slug.clone(),
        city_id: n.city_id,
        description: n.description.clone(),
        image_url: n.image_url.clone(),
        property_count: n.property_count,
    })
}
