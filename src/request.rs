// request.rs
use crate::errors::ServerError;
use astra::Request;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Largest request body we are willing to read.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// Decoded query-string pairs, kept in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn from_request(req: &Request) -> Self {
        Self::parse(req.uri().query())
    }

    /// First non-blank value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .find(|v| !v.is_empty())
    }

    /// Integer value, `None` when missing or not a number.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// `limit` clamped to `1..=100`, falling back to `default`.
    pub fn limit(&self, default: i64) -> i64 {
        self.get_i64("limit")
            .filter(|n| *n > 0)
            .unwrap_or(default)
            .min(100)
    }

    pub fn offset(&self) -> i64 {
        self.get_i64("offset").filter(|n| *n >= 0).unwrap_or(0)
    }

    pub fn set(&mut self, key: &str, value: Option<String>) {
        self.remove(key);
        if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
            self.pairs.push((key.to_string(), v));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// `a=1&b=two` with form encoding, empty string when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            ser.append_pair(k, v);
        }
        ser.finish()
    }

    /// `path` with this query appended, or just `path` when empty.
    pub fn href(&self, path: &str) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{qs}")
        }
    }
}

/// Parse a numeric path segment.
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ServerError::BadRequest(format!("Invalid {what} id")))
}

/// Split a request path into percent-decoded segments, ignoring empty ones.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(decode_segment)
        .collect()
}

fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Read the body and decode it as JSON into `T`.
pub fn json_body<T: DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    if buf.iter().all(u8::is_ascii_whitespace) {
        return Err(ServerError::BadRequest("request body is empty".into()));
    }
    Ok(serde_json::from_slice(&buf)?)
}
