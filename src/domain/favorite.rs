use crate::domain::validation::Validator;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub property_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteInput {
    pub user_id: Option<i64>,
    pub property_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewFavorite {
    pub user_id: i64,
    pub property_id: i64,
}

impl FavoriteInput {
    pub fn validate(self) -> Result<NewFavorite, ServerError> {
        let mut v = Validator::new();
        let user_id = v.required("userId", self.user_id);
        let property_id = v.required("propertyId", self.property_id);
        v.finish("favorite")?;

        Ok(NewFavorite {
            user_id: user_id.unwrap_or_default(),
            property_id: property_id.unwrap_or_default(),
        })
    }
}

/// Body of `DELETE /api/favorites`. Ids arrive as numbers or numeric strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteKey {
    pub user_id: Option<serde_json::Value>,
    pub property_id: Option<serde_json::Value>,
}

impl FavoriteKey {
    pub fn ids(&self) -> Option<(i64, i64)> {
        Some((loose_id(self.user_id.as_ref()?)?, loose_id(self.property_id.as_ref()?)?))
    }
}

fn loose_id(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|id| *id > 0)
}
