use crate::domain::Property;
use crate::search::filters::format_price;
use maud::{html, Markup};

pub struct CardOptions {
    pub show_location: bool,
    /// Show the total for a stay of this many nights.
    pub total_nights: Option<i64>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            show_location: true,
            total_nights: None,
        }
    }
}

pub fn property_card(property: &Property, opts: &CardOptions) -> Markup {
    html! {
        a href={ "/property/" (property.id) } class="property-card block h-full" {
            div class="card bg-white rounded-lg overflow-hidden shadow-sm" {
                div class="relative aspect-[4/3]" {
                    img src=(property.image_url) alt=(property.name) class="w-full h-full object-cover";
                }
                div class="p-4" {
                    div class="flex justify-between items-start mb-2" {
                        h3 class="font-semibold text-lg" { (property.name) }
                        @if let Some(rating) = property.rating {
                            span class="rating text-sm font-medium" { "★ " (format!("{rating:.2}")) }
                        }
                    }
                    @if opts.show_location {
                        p class="text-gray-600 text-sm mb-2" { (property.location) }
                    }
                    p class="text-gray-600 text-sm mb-3" { (property.feature_text()) }
                    div class="flex justify-between items-center" {
                        p {
                            span class="font-bold" { (format_price(property.price)) }
                            span class="text-gray-600" { " night" }
                        }
                        @if let Some(total) = opts.total_nights.and_then(|n| property.price.checked_mul(n)) {
                            p class="text-sm text-gray-500" {
                                (format_price(total)) " total"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn property_grid(properties: &[Property], opts: &CardOptions) -> Markup {
    html! {
        div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6" {
            @for property in properties {
                (property_card(property, opts))
            }
        }
    }
}
