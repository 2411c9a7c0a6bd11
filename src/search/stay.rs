use crate::request::QueryParams;
use chrono::NaiveDate;

/// Destinations offered by the search bar, as `(url id, label)`.
pub const LOCATIONS: [(&str, &str); 5] = [
    ("miami", "Miami, FL"),
    ("shenandoah", "Shenandoah, VA"),
    ("annapolis", "Annapolis, MD"),
    ("nashville", "Nashville, TN"),
    ("blue-ridge", "Blue Ridge, GA"),
];

/// Number of nights priced on cards and the detail page when no dates are picked.
pub const DEFAULT_NIGHTS: i64 = 6;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Search-bar state: where, when and how many.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StayQuery {
    pub location: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<i64>,
}

impl StayQuery {
    pub fn from_query(params: &QueryParams) -> Self {
        let parse_date = |key: &str| {
            params
                .get(key)
                .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
        };

        let mut check_in = parse_date("checkIn");
        let mut check_out = parse_date("checkOut");
        if let (Some(i), Some(o)) = (check_in, check_out) {
            if o <= i {
                check_in = None;
                check_out = None;
            }
        }

        Self {
            location: params.get("location").map(str::to_string),
            check_in,
            check_out,
            guests: params.get_i64("guests").filter(|g| *g > 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == StayQuery::default()
    }

    /// City name to match for the `location` param: a known id maps to its
    /// label's city part, anything else is used with dashes as spaces.
    pub fn city_name(&self) -> Option<String> {
        let loc = self.location.as_deref()?;
        let known = LOCATIONS
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(loc))
            .and_then(|(_, label)| label.split(',').next());
        Some(match known {
            Some(city) => city.to_string(),
            None => loc.replace('-', " "),
        })
    }

    pub fn location_label(&self) -> Option<&'static str> {
        let loc = self.location.as_deref()?;
        LOCATIONS
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(loc))
            .map(|(_, label)| *label)
    }

    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(i), Some(o)) => Some((o - i).num_days()),
            _ => None,
        }
    }
}
