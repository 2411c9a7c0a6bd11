use crate::errors::ServerError;
use crate::request::QueryParams;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// URL keys owned by the filter list. Clearing filters removes exactly these.
pub const FILTER_KEYS: [&str; 7] = [
    "minPrice",
    "maxPrice",
    "bedrooms",
    "bathrooms",
    "maxGuests",
    "propertyType",
    "amenities",
];

pub const PROPERTY_TYPES: [&str; 6] = ["Apartment", "House", "Villa", "Condo", "Cabin", "Cottage"];

pub const AMENITY_OPTIONS: [&str; 6] = [
    "WiFi",
    "Kitchen",
    "Air Conditioning",
    "Washer/Dryer",
    "Pool",
    "Free Parking",
];

/// Preset nightly price bands offered by the filter list.
pub const PRICE_RANGES: [(Option<i64>, Option<i64>); 4] = [
    (None, Some(100)),
    (Some(100), Some(200)),
    (Some(200), Some(300)),
    (Some(300), None),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub max_guests: Option<i64>,
    #[serde(alias = "type")]
    pub property_type: Option<String>,
    pub amenities: Vec<String>,
}

impl SearchFilters {
    /// Read the individual URL params. Unparseable or non-positive numbers
    /// mean "no filter", as does a blank property type.
    pub fn from_query(params: &QueryParams) -> Self {
        Self {
            min_price: params.get_i64("minPrice"),
            max_price: params.get_i64("maxPrice"),
            bedrooms: params.get_i64("bedrooms"),
            bathrooms: params.get_i64("bathrooms"),
            max_guests: params.get_i64("maxGuests"),
            property_type: params
                .get("propertyType")
                .or_else(|| params.get("type"))
                .map(str::to_string),
            amenities: params
                .get("amenities")
                .map(split_list)
                .unwrap_or_default(),
        }
        .normalized()
    }

    /// Parse the JSON object sent by API clients as `filters=`.
    pub fn from_json(raw: &str) -> Result<Self, ServerError> {
        let filters: SearchFilters = serde_json::from_str(raw)
            .map_err(|e| ServerError::BadRequest(format!("invalid filters: {e}")))?;
        Ok(filters.normalized())
    }

    fn normalized(self) -> Self {
        let positive = |v: Option<i64>| v.filter(|n| *n > 0);
        let mut seen = HashSet::new();
        let amenities: Vec<String> = self
            .amenities
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty() && seen.insert(a.to_lowercase()))
            .collect();

        Self {
            min_price: positive(self.min_price),
            max_price: positive(self.max_price),
            bedrooms: positive(self.bedrooms),
            bathrooms: positive(self.bathrooms),
            max_guests: positive(self.max_guests),
            property_type: self
                .property_type
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
            amenities,
        }
    }

    /// Fields set in `other` win.
    pub fn merged(self, other: SearchFilters) -> Self {
        Self {
            min_price: other.min_price.or(self.min_price),
            max_price: other.max_price.or(self.max_price),
            bedrooms: other.bedrooms.or(self.bedrooms),
            bathrooms: other.bathrooms.or(self.bathrooms),
            max_guests: other.max_guests.or(self.max_guests),
            property_type: other.property_type.or(self.property_type),
            amenities: if other.amenities.is_empty() {
                self.amenities
            } else {
                other.amenities
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    pub fn has_price(&self) -> bool {
        self.min_price.is_some() || self.max_price.is_some()
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a.eq_ignore_ascii_case(amenity))
    }

    /// Same filters with `amenity` switched on or off.
    pub fn toggle_amenity(&self, amenity: &str) -> Self {
        let mut next = self.clone();
        if next.has_amenity(amenity) {
            next.amenities.retain(|a| !a.eq_ignore_ascii_case(amenity));
        } else {
            next.amenities.push(amenity.to_string());
        }
        next
    }

    /// Write these filters into `params`, replacing whatever filter keys were
    /// there. Other params survive; the page resets because the result set changes.
    pub fn apply_to(&self, params: &QueryParams) -> QueryParams {
        let mut next = Self::cleared(params);
        let num = |v: Option<i64>| v.map(|n| n.to_string());

        next.set("minPrice", num(self.min_price));
        next.set("maxPrice", num(self.max_price));
        next.set("bedrooms", num(self.bedrooms));
        next.set("bathrooms", num(self.bathrooms));
        next.set("maxGuests", num(self.max_guests));
        next.set("propertyType", self.property_type.clone());
        next.set(
            "amenities",
            Some(self.amenities.join(",")).filter(|s| !s.is_empty()),
        );
        next
    }

    /// `params` without any filter keys (or page). `q` and the search-bar
    /// fields are kept.
    pub fn cleared(params: &QueryParams) -> QueryParams {
        let mut next = params.clone();
        for key in FILTER_KEYS {
            next.remove(key);
        }
        next.remove("type");
        next.remove("page");
        next
    }

    /// Label for the price filter button.
    pub fn price_label(&self) -> String {
        match (self.min_price, self.max_price) {
            (None, None) => "Price Range".to_string(),
            (Some(min), None) => format!("{}+", format_price(min)),
            (None, Some(max)) => format!("Under {}", format_price(max)),
            (Some(min), Some(max)) => format!("{} - {}", format_price(min), format_price(max)),
        }
    }

    pub fn bedrooms_label(&self) -> String {
        match self.bedrooms {
            Some(n) => format!("{n}+ Bedrooms"),
            None => "Bedrooms".to_string(),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// `$1,250`
pub fn format_price(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if amount < 0 {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}
