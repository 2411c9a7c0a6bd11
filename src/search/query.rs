use crate::search::filters::SearchFilters;
use crate::search::stay::StayQuery;
use rusqlite::types::Value;

/// A parameterized WHERE clause over the `properties` table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFilter {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl SqlFilter {
    /// Only active properties. Every listing query starts here.
    pub fn active() -> Self {
        let mut f = Self::default();
        f.push("is_active = 1", []);
        f
    }

    pub fn push<const N: usize>(&mut self, clause: &str, params: [Value; N]) {
        self.clauses.push(clause.to_string());
        self.params.extend(params);
    }

    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    #[cfg(test)]
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }
}

/// `%text%` with LIKE wildcards in `text` escaped by `\`.
pub fn contains_pattern(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// Translate free text, filters and search-bar state into one WHERE clause.
///
/// Text matches name, city, country or location (case-insensitive substring).
/// Price bounds are inclusive; bedrooms, bathrooms and guests are minimums;
/// property type is an exact case-insensitive match; every amenity must
/// appear as a substring of one of the property's amenities.
pub fn build_search(text: &str, filters: &SearchFilters, stay: &StayQuery) -> SqlFilter {
    let mut f = SqlFilter::active();

    let text = text.trim();
    if !text.is_empty() {
        let pattern = Value::Text(contains_pattern(text));
        f.push(
            "(name LIKE ? ESCAPE '\\' OR city LIKE ? ESCAPE '\\' \
             OR country LIKE ? ESCAPE '\\' OR location LIKE ? ESCAPE '\\')",
            [pattern.clone(), pattern.clone(), pattern.clone(), pattern],
        );
    }

    if let Some(city) = stay.city_name() {
        f.push(
            "city LIKE ? ESCAPE '\\'",
            [Value::Text(contains_pattern(&city))],
        );
    }

    if let Some(min) = filters.min_price {
        f.push("price >= ?", [Value::Integer(min)]);
    }
    if let Some(max) = filters.max_price {
        f.push("price <= ?", [Value::Integer(max)]);
    }
    if let Some(n) = filters.bedrooms {
        f.push("bedrooms >= ?", [Value::Integer(n)]);
    }
    if let Some(n) = filters.bathrooms {
        f.push("bathrooms >= ?", [Value::Integer(n)]);
    }
    let guests = filters.max_guests.max(stay.guests);
    if let Some(n) = guests {
        f.push("max_guests >= ?", [Value::Integer(n)]);
    }
    if let Some(kind) = &filters.property_type {
        f.push(
            "property_type = ? COLLATE NOCASE",
            [Value::Text(kind.clone())],
        );
    }
    for amenity in &filters.amenities {
        f.push(
            "EXISTS (SELECT 1 FROM json_each(properties.amenities) a \
             WHERE a.value LIKE ? ESCAPE '\\')",
            [Value::Text(contains_pattern(amenity))],
        );
    }

    f
}
