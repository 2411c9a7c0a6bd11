use crate::domain::validation::Validator;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub property_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_image: Option<String>,
    pub rating: f64,
    pub comment: String,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewInput {
    pub property_id: Option<i64>,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub property_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_image: Option<String>,
    pub rating: f64,
    pub comment: String,
}

impl ReviewInput {
    pub fn validate(self) -> Result<NewReview, ServerError> {
        let mut v = Validator::new();
        let property_id = v.required("propertyId", self.property_id);
        let user_id = v.required("userId", self.user_id);
        let user_name = v.required_text("userName", self.user_name);
        let comment = v.required_text("comment", self.comment);
        let rating = v.required("rating", self.rating);
        if let Some(r) = rating {
            v.check(
                r.is_finite() && (MIN_RATING..=MAX_RATING).contains(&r),
                "rating",
                "Must be between 1 and 5",
            );
        }
        v.finish("review")?;

        Ok(NewReview {
            property_id: property_id.unwrap_or_default(),
            user_id: user_id.unwrap_or_default(),
            user_name: user_name.unwrap_or_default(),
            user_image: self.user_image,
            rating: rating.unwrap_or_default(),
            comment: comment.unwrap_or_default(),
        })
    }
}

/// Average and count over a set of ratings. No ratings gives `(0.0, 0)`.
pub fn aggregate_rating(ratings: &[f64]) -> (f64, i64) {
    if ratings.is_empty() {
        return (0.0, 0);
    }
    let total: f64 = ratings.iter().sum();
    (total / ratings.len() as f64, ratings.len() as i64)
}
