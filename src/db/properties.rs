// src/db/properties.rs
use crate::db::rows::{collect_rows, json_list, to_json_list};
use crate::domain::{NewProperty, Property, PropertyPatch};
use crate::errors::ServerError;
use crate::search::SqlFilter;
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const COLUMNS: [&str; 25] = [
    "id",
    "name",
    "slug",
    "description",
    "location",
    "city",
    "country",
    "price",
    "rating",
    "review_count",
    "image_url",
    "additional_images",
    "bedrooms",
    "bathrooms",
    "max_guests",
    "property_type",
    "amenities",
    "host_id",
    "host_name",
    "host_image",
    "booking_widget_url",
    "review_widget_code",
    "is_featured",
    "is_active",
    "created_at",
];

/// Column list for SELECTs, optionally qualified with a table alias.
pub fn columns(alias: Option<&str>) -> String {
    COLUMNS
        .iter()
        .map(|c| match alias {
            Some(a) => format!("{a}.{c}"),
            None => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Map a row selected with [`columns`] into a `Property`.
pub fn from_row(row: &Row) -> rusqlite::Result<Property> {
    Ok(Property {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        city: row.get(5)?,
        country: row.get(6)?,
        price: row.get(7)?,
        rating: row.get(8)?,
        review_count: row.get(9)?,
        image_url: row.get(10)?,
        additional_images: json_list(row, 11)?,
        bedrooms: row.get(12)?,
        bathrooms: row.get(13)?,
        max_guests: row.get(14)?,
        property_type: row.get(15)?,
        amenities: json_list(row, 16)?,
        host_id: row.get(17)?,
        host_name: row.get(18)?,
        host_image: row.get(19)?,
        booking_widget_url: row.get(20)?,
        review_widget_code: row.get(21)?,
        is_featured: row.get(22)?,
        is_active: row.get(23)?,
        created_at: row.get(24)?,
    })
}

/// Active properties, newest first.
pub fn list(conn: &Connection, limit: i64, offset: i64) -> Result<Vec<Property>, ServerError> {
    let sql = format!(
        "SELECT {} FROM properties WHERE is_active = 1 \
         ORDER BY created_at DESC, id DESC LIMIT ?1 OFFSET ?2",
        columns(None)
    );
    let mut stmt = conn.prepare(&sql)?;
    Ok(collect_rows(&mut stmt, params![limit, offset], from_row)?)
}

/// Active, featured properties, best rated first.
pub fn featured(conn: &Connection, limit: i64) -> Result<Vec<Property>, ServerError> {
    let sql = format!(
        "SELECT {} FROM properties WHERE is_active = 1 AND is_featured = 1 \
         ORDER BY COALESCE(rating, 0) DESC, id ASC LIMIT ?1",
        columns(None)
    );
    let mut stmt = conn.prepare(&sql)?;
    Ok(collect_rows(&mut stmt, params![limit], from_row)?)
}

/// Lookup by id. Soft-deleted rows are still returned.
pub fn get(conn: &Connection, id: i64) -> Result<Option<Property>, ServerError> {
    let sql = format!("SELECT {} FROM properties WHERE id = ?1", columns(None));
    Ok(conn.query_row(&sql, params![id], from_row).optional()?)
}

pub fn exists(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM properties WHERE id = ?1", params![id], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

/// Active properties whose city contains `city_name`, case-insensitively.
pub fn by_city(
    conn: &Connection,
    city_name: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Property>, ServerError> {
    let mut filter = SqlFilter::active();
    filter.push(
        "city LIKE ? ESCAPE '\\'",
        [Value::Text(crate::search::query::contains_pattern(
            city_name.trim(),
        ))],
    );
    search(conn, &filter, Some((limit, offset)))
}

/// Run a search filter. `page` is `(limit, offset)`; `None` returns everything.
pub fn search(
    conn: &Connection,
    filter: &SqlFilter,
    page: Option<(i64, i64)>,
) -> Result<Vec<Property>, ServerError> {
    let mut values: Vec<Value> = filter.params().to_vec();
    let mut sql = format!(
        "SELECT {} FROM properties {} ORDER BY COALESCE(rating, 0) DESC, id ASC",
        columns(None),
        filter.where_sql()
    );
    if let Some((limit, offset)) = page {
        sql.push_str(" LIMIT ? OFFSET ?");
        values.push(Value::Integer(limit));
        values.push(Value::Integer(offset));
    }

    let mut stmt = conn.prepare(&sql)?;
    Ok(collect_rows(&mut stmt, params_from_iter(values.iter()), from_row)?)
}

pub fn count(conn: &Connection, filter: &SqlFilter) -> Result<i64, ServerError> {
    let sql = format!("SELECT COUNT(*) FROM properties {}", filter.where_sql());
    Ok(conn.query_row(&sql, params_from_iter(filter.params().iter()), |r| {
        r.get(0)
    })?)
}

pub fn create(conn: &Connection, p: &NewProperty) -> Result<Property, ServerError> {
    let now = Utc::now().naive_utc();
    conn.execute(
        r#"
        INSERT INTO properties (
            name, slug, description, location, city, country, price, rating, review_count,
            image_url, additional_images, bedrooms, bathrooms, max_guests, property_type,
            amenities, host_id, host_name, host_image, booking_widget_url, review_widget_code,
            is_featured, is_active, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, 0, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                  ?16, ?17, ?18, ?19, ?20, 1, ?21)
        "#,
        params![
            p.name,
            p.slug,
            p.description,
            p.location,
            p.city,
            p.country,
            p.price,
            p.image_url,
            to_json_list(&p.additional_images),
            p.bedrooms,
            p.bathrooms,
            p.max_guests,
            p.property_type,
            to_json_list(&p.amenities),
            p.host_id,
            p.host_name,
            p.host_image,
            p.booking_widget_url,
            p.review_widget_code,
            p.is_featured,
            now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    get(conn, id)?.ok_or(ServerError::InternalError)
}

/// Apply a partial update. `Ok(None)` when the property does not exist.
pub fn update(
    conn: &Connection,
    id: i64,
    patch: &PropertyPatch,
) -> Result<Option<Property>, ServerError> {
    if patch.is_empty() {
        return get(conn, id);
    }

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    macro_rules! set_text {
        ($field:ident, $column:expr) => {
            if let Some(v) = &patch.$field {
                sets.push(concat!($column, " = ?"));
                values.push(Value::Text(v.clone()));
            }
        };
    }
    macro_rules! set_int {
        ($field:ident, $column:expr) => {
            if let Some(v) = patch.$field {
                sets.push(concat!($column, " = ?"));
                values.push(Value::Integer(v as i64));
            }
        };
    }
    macro_rules! set_list {
        ($field:ident, $column:expr) => {
            if let Some(v) = &patch.$field {
                sets.push(concat!($column, " = ?"));
                values.push(Value::Text(to_json_list(v)));
            }
        };
    }

    set_text!(name, "name");
    set_text!(slug, "slug");
    set_text!(description, "description");
    set_text!(location, "location");
    set_text!(city, "city");
    set_text!(country, "country");
    set_int!(price, "price");
    set_text!(image_url, "image_url");
    set_list!(additional_images, "additional_images");
    set_int!(bedrooms, "bedrooms");
    set_int!(bathrooms, "bathrooms");
    set_int!(max_guests, "max_guests");
    set_text!(property_type, "property_type");
    set_list!(amenities, "amenities");
    set_int!(host_id, "host_id");
    set_text!(host_name, "host_name");
    set_text!(host_image, "host_image");
    set_text!(booking_widget_url, "booking_widget_url");
    set_text!(review_widget_code, "review_widget_code");
    set_int!(is_featured, "is_featured");
    set_int!(is_active, "is_active");

    let sql = format!("UPDATE properties SET {} WHERE id = ?", sets.join(", "));
    values.push(Value::Integer(id));
    let changed = conn.execute(&sql, params_from_iter(values.iter()))?;

    if changed == 0 {
        return Ok(None);
    }
    get(conn, id)
}

/// Hide a property from every listing. `false` when there is no such row.
pub fn soft_delete(conn: &Connection, id: i64) -> Result<bool, ServerError> {
    let changed = conn.execute(
        "UPDATE properties SET is_active = 0 WHERE id = ?1",
        params![id],
    )?;
    Ok(changed > 0)
}

/// Store the derived rating columns.
pub fn set_rating(
    conn: &Connection,
    id: i64,
    rating: f64,
    review_count: i64,
) -> Result<(), ServerError> {
    conn.execute(
        "UPDATE properties SET rating = ?1, review_count = ?2 WHERE id = ?3",
        params![rating, review_count, id],
    )?;
    Ok(())
}
