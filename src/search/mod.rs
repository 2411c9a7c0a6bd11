//! Search and filter state shared by the search page and the JSON API.
//!
//! The URL is the single source of truth: every filter, the search-bar
//! fields and the current page live in query parameters, and every link
//! the filter UI renders is the current URL with one thing changed.

pub mod filters;
pub mod pagination;
pub mod query;
pub mod stay;

pub use filters::{SearchFilters, AMENITY_OPTIONS, PRICE_RANGES, PROPERTY_TYPES};
pub use pagination::{PageWindow, Pagination};
pub use query::{build_search, SqlFilter};
pub use stay::{StayQuery, LOCATIONS};

use crate::errors::ServerError;
use crate::request::QueryParams;

/// Everything a search needs, decoded from one request's query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub text: String,
    pub filters: SearchFilters,
    pub stay: StayQuery,
}

impl SearchRequest {
    /// Page-style parsing: individual filter params only.
    pub fn from_query(params: &QueryParams) -> Self {
        Self {
            text: params.get("q").unwrap_or_default().to_string(),
            filters: SearchFilters::from_query(params),
            stay: StayQuery::from_query(params),
        }
    }

    /// API-style parsing: `filters=<json>` layered over individual params.
    pub fn from_api_query(params: &QueryParams) -> Result<Self, ServerError> {
        let mut req = Self::from_query(params);
        if let Some(raw) = params.get("filters") {
            req.filters = req.filters.merged(SearchFilters::from_json(raw)?);
        }
        Ok(req)
    }

    pub fn to_sql(&self) -> SqlFilter {
        build_search(&self.text, &self.filters, &self.stay)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.filters.is_empty() && self.stay.is_empty()
    }
}
