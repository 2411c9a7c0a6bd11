// Shared row helpers for the store modules.
use rusqlite::types::Type;
use rusqlite::{Row, Statement};

/// Decode a JSON text column holding a string array. NULL reads as empty.
pub fn json_list(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(&s)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
    }
}

pub fn to_json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Run `stmt` and collect every mapped row.
pub fn collect_rows<T, P, F>(stmt: &mut Statement<'_>, params: P, f: F) -> rusqlite::Result<Vec<T>>
where
    P: rusqlite::Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    stmt.query_map(params, f)?.collect()
}
