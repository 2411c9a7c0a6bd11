use crate::domain::slug::slugify;
use crate::domain::validation::Validator;
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub country: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: String,
    pub property_count: i64,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub property_count: Option<i64>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub slug: String,
    pub country: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image_url: String,
    pub property_count: i64,
    pub featured: bool,
}

impl CityInput {
    pub fn validate(self) -> Result<NewCity, ServerError> {
        let mut v = Validator::new();
        let name = v.required_text("name", self.name);
        let country = v.required_text("country", self.country);
        let description = v.required_text("description", self.description);
        let image_url = v.required_text("imageUrl", self.image_url);
        let slug = v.optional_text("slug", self.slug);
        v.min_i64("propertyCount", self.property_count, 0);
        v.finish("city")?;

        let name = name.unwrap_or_default();
        Ok(NewCity {
            slug: slug.unwrap_or_else(|| slugify(&name)),
            name,
            country: country.unwrap_or_default(),
            description: description.unwrap_or_default(),
            long_description: self.long_description,
            image_url: image_url.unwrap_or_default(),
            property_count: self.property_count.unwrap_or(0),
            featured: self.featured.unwrap_or(false),
        })
    }
}

/// Partial city update used by the admin side of the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub property_count: Option<i64>,
    pub featured: Option<bool>,
}
