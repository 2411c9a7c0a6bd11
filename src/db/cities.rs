use crate::db::rows::collect_rows;
use crate::domain::city::CityPatch;
use crate::domain::{City, NewCity};
use crate::errors::ServerError;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const SELECT_CITY: &str = r#"
    SELECT id, name, slug, country, description, long_description, image_url,
           property_count, featured
    FROM cities
"#;

fn from_row(row: &Row) -> rusqlite::Result<City> {
    Ok(City {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        country: row.get(3)?,
        description: row.get(4)?,
        long_description: row.get(5)?,
        image_url: row.get(6)?,
        property_count: row.get(7)?,
        featured: row.get(8)?,
    })
}

pub fn list(conn: &Connection, limit: i64) -> Result<Vec<City>, ServerError> {
    let mut stmt = conn.prepare(&format!("{SELECT_CITY} ORDER BY id LIMIT ?1"))?;
    Ok(collect_rows(&mut stmt, params![limit], from_row)?)
}

pub fn featured(conn: &Connection, limit: i64) -> Result<Vec<City>, ServerError> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_CITY} WHERE featured = 1 ORDER BY name COLLATE NOCASE LIMIT ?1"
    ))?;
    Ok(collect_rows(&mut stmt, params![limit], from_row)?)
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<City>, ServerError> {
    Ok(conn
        .query_row(&format!("{SELECT_CITY} WHERE id = ?1"), params![id], from_row)
        .optional()?)
}

/// Case-insensitive exact name match. Slugs ("blue-ridge") are accepted too.
pub fn get_by_name(conn: &Connection, name: &str) -> Result<Option<City>, ServerError> {
    let name = name.trim();
    Ok(conn
        .query_row(
            &format!(
                "{SELECT_CITY} WHERE name = ?1 COLLATE NOCASE OR slug = lower(?1) \
                 ORDER BY id LIMIT 1"
            ),
            params![name],
            from_row,
        )
        .optional()?)
}

pub fn create(conn: &Connection, city: &NewCity) -> Result<City, ServerError> {
    conn.execute(
        r#"
        INSERT INTO cities (name, slug, country, description, long_description,
                            image_url, property_count, featured)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
        params![
            city.name,
            city.slug,
            city.country,
            city.description,
            city.long_description,
            city.image_url,
            city.property_count,
            city.featured,
        ],
    )?;
    get(conn, conn.last_insert_rowid())?.ok_or(ServerError::InternalError)
}

/// `Ok(None)` when the city does not exist.
pub fn update(conn: &Connection, id: i64, patch: &CityPatch) -> Result<Option<City>, ServerError> {
    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    let texts = [
        ("name = ?", &patch.name),
        ("country = ?", &patch.country),
        ("description = ?", &patch.description),
        ("long_description = ?", &patch.long_description),
        ("image_url = ?", &patch.image_url),
    ];
    for (set, value) in texts {
        if let Some(v) = value {
            sets.push(set);
            values.push(Value::Text(v.clone()));
        }
    }
    if let Some(n) = patch.property_count {
        sets.push("property_count = ?");
        values.push(Value::Integer(n));
    }
    if let Some(f) = patch.featured {
        sets.push("featured = ?");
        values.push(Value::Integer(f as i64));
    }

    if sets.is_empty() {
        return get(conn, id);
    }
    values.push(Value::Integer(id));
    let sql = format!("UPDATE cities SET {} WHERE id = ?", sets.join(", "));
    if conn.execute(&sql, params_from_iter(values.iter()))? == 0 {
        return Ok(None);
    }
    get(conn, id)
}

/// Hard delete; neighborhoods go with it. `false` when nothing was removed.
pub fn delete(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    Ok(conn.execute("DELETE FROM cities WHERE id = ?1", params![id])? > 0)
}
