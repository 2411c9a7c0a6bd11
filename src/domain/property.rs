// src/domain/property.rs

use crate::domain::slug::slugify;
use crate::domain::validation::Validator;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Upper bound on a nightly price, whole currency units.
pub const MAX_PRICE: i64 = 1_000_000;

/// A rental listing as stored in the `properties` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub country: String,
    /// Price per night, whole currency units.
    pub price: i64,
    /// Average of the property's review ratings.
    pub rating: Option<f64>,
    pub review_count: i64,
    pub image_url: String,
    pub additional_images: Vec<String>,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub max_guests: i64,
    pub property_type: Option<String>,
    pub amenities: Vec<String>,
    pub host_id: i64,
    pub host_name: String,
    pub host_image: Option<String>,
    pub booking_widget_url: Option<String>,
    pub review_widget_code: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl Property {
    /// "2 bedrooms · 1 bath · 4 guests"
    pub fn feature_text(&self) -> String {
        format!(
            "{} · {} · {}",
            plural(self.bedrooms, "bedroom", "bedrooms"),
            plural(self.bathrooms, "bath", "baths"),
            plural(self.max_guests, "guest", "guests"),
        )
    }
}

pub fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Incoming create payload. Everything is optional here so that missing
/// fields can be reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub additional_images: Option<Vec<String>>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub max_guests: Option<i64>,
    pub property_type: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub host_id: Option<i64>,
    pub host_name: Option<String>,
    pub host_image: Option<String>,
    pub booking_widget_url: Option<String>,
    pub review_widget_code: Option<String>,
    pub is_featured: Option<bool>,
}

/// A validated property ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub country: String,
    pub price: i64,
    pub image_url: String,
    pub additional_images: Vec<String>,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub max_guests: i64,
    pub property_type: Option<String>,
    pub amenities: Vec<String>,
    pub host_id: i64,
    pub host_name: String,
    pub host_image: Option<String>,
    pub booking_widget_url: Option<String>,
    pub review_widget_code: Option<String>,
    pub is_featured: bool,
}

impl PropertyInput {
    pub fn validate(self) -> Result<NewProperty, ServerError> {
        let mut v = Validator::new();

        let name = v.required_text("name", self.name);
        let description = v.required_text("description", self.description);
        let location = v.required_text("location", self.location);
        let city = v.required_text("city", self.city);
        let country = v.required_text("country", self.country);
        let image_url = v.required_text("imageUrl", self.image_url);
        let host_name = v.required_text("hostName", self.host_name);

        let price = v.required("price", self.price);
        let bedrooms = v.required("bedrooms", self.bedrooms);
        let bathrooms = v.required("bathrooms", self.bathrooms);
        let max_guests = v.required("maxGuests", self.max_guests);
        let host_id = v.required("hostId", self.host_id);

        v.min_i64("price", price, 0);
        v.max_i64("price", price, MAX_PRICE);
        v.min_i64("bedrooms", bedrooms, 0);
        v.min_i64("bathrooms", bathrooms, 0);
        v.min_i64("maxGuests", max_guests, 1);

        let slug = v.optional_text("slug", self.slug);
        v.finish("property")?;

        let name = name.unwrap_or_default();
        Ok(NewProperty {
            slug: slug.unwrap_or_else(|| slugify(&name)),
            name,
            description: description.unwrap_or_default(),
            location: location.unwrap_or_default(),
            city: city.unwrap_or_default(),
            country: country.unwrap_or_default(),
            price: price.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            additional_images: self.additional_images.unwrap_or_default(),
            bedrooms: bedrooms.unwrap_or_default(),
            bathrooms: bathrooms.unwrap_or_default(),
            max_guests: max_guests.unwrap_or_default(),
            property_type: self.property_type.filter(|t| !t.trim().is_empty()),
            amenities: self.amenities.unwrap_or_default(),
            host_id: host_id.unwrap_or_default(),
            host_name: host_name.unwrap_or_default(),
            host_image: self.host_image,
            booking_widget_url: self.booking_widget_url,
            review_widget_code: self.review_widget_code,
            is_featured: self.is_featured.unwrap_or(false),
        })
    }
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub price: Option<i64>,
    pub image_url: Option<String>,
    pub additional_images: Option<Vec<String>>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub max_guests: Option<i64>,
    pub property_type: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub host_id: Option<i64>,
    pub host_name: Option<String>,
    pub host_image: Option<String>,
    pub booking_widget_url: Option<String>,
    pub review_widget_code: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl PropertyPatch {
    pub fn validate(self) -> Result<Self, ServerError> {
        let mut v = Validator::new();
        let name = v.optional_text("name", self.name);
        let slug = v.optional_text("slug", self.slug);
        let description = v.optional_text("description", self.description);
        let location = v.optional_text("location", self.location);
        let city = v.optional_text("city", self.city);
        let country = v.optional_text("country", self.country);
        let image_url = v.optional_text("imageUrl", self.image_url);
        let host_name = v.optional_text("hostName", self.host_name);
        v.min_i64("price", self.price, 0);
        v.max_i64("price", self.price, MAX_PRICE);
        v.min_i64("bedrooms", self.bedrooms, 0);
        v.min_i64("bathrooms", self.bathrooms, 0);
        v.min_i64("maxGuests", self.max_guests, 1);
        v.finish("property")?;

        Ok(Self {
            name,
            slug,
            description,
            location,
            city,
            country,
            image_url,
            host_name,
            ..self
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.additional_images.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.max_guests.is_none()
            && self.property_type.is_none()
            && self.amenities.is_none()
            && self.host_id.is_none()
            && self.host_name.is_none()
            && self.host_image.is_none()
            && self.booking_widget_url.is_none()
            && self.review_widget_code.is_none()
            && self.is_featured.is_none()
            && self.is_active.is_none()
    }
}
