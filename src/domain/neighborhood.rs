use crate::domain::slug::slugify;
use crate::domain::validation::Validator;
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub city_id: i64,
    pub description: Option<String>,
    pub image_url: String,
    pub property_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeighborhoodInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub city_id: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub property_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNeighborhood {
    pub name: String,
    pub slug: String,
    pub city_id: i64,
    pub description: Option<String>,
    pub image_url: String,
    pub property_count: i64,
}

impl NeighborhoodInput {
    pub fn validate(self) -> Result<NewNeighborhood, ServerError> {
        let mut v = Validator::new();
        let name = v.required_text("name", self.name);
        let city_id = v.required("cityId", self.city_id);
        let image_url = v.required_text("imageUrl", self.image_url);
        let slug = v.optional_text("slug", self.slug);
        v.min_i64("propertyCount", self.property_count, 0);
        v.finish("neighborhood")?;

        let name = name.unwrap_or_default();
        Ok(NewNeighborhood {
            slug: slug.unwrap_or_else(|| slugify(&name)),
            name,
            city_id: city_id.unwrap_or_default(),
            description: self.description,
            image_url: image_url.unwrap_or_default(),
            property_count: self.property_count.unwrap_or(0),
        })
    }
}
