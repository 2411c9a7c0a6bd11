use crate::domain::{slugify, Property, Review};
use crate::search::filters::format_price;
use crate::search::stay::DEFAULT_NIGHTS;
use crate::templates::components::breadcrumb;
use crate::templates::components::widgets::{booking_widget, revyoos_widget};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const CLEANING_FEE: i64 = 85;
pub const SERVICE_FEE: i64 = 0;

/// Shown when a property has fewer than four additional images.
const FALLBACK_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?auto=format&fit=crop&w=871&q=80",
    "https://images.unsplash.com/photo-1584622650111-993a426fbf0a?auto=format&fit=crop&w=870&q=80",
    "https://images.unsplash.com/photo-1552321554-5fefe8c9ef14?auto=format&fit=crop&w=867&q=80",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&w=870&q=80",
];

pub struct PropertyVm {
    pub property: Property,
    pub reviews: Vec<Review>,
    /// Revyoos code to embed: the property's own, else the site default.
    pub review_widget_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub nights: i64,
    pub nightly_total: i64,
    pub cleaning_fee: i64,
    pub service_fee: i64,
    pub total: i64,
}

impl PriceBreakdown {
    /// `None` when the totals do not fit in an `i64`.
    pub fn for_stay(price: i64, nights: i64) -> Option<Self> {
        let nightly_total = price.checked_mul(nights)?;
        let total = nightly_total
            .checked_add(CLEANING_FEE)?
            .checked_add(SERVICE_FEE)?;
        Some(Self {
            nights,
            nightly_total,
            cleaning_fee: CLEANING_FEE,
            service_fee: SERVICE_FEE,
            total,
        })
    }
}

pub fn gallery_images(property: &Property) -> [&str; 4] {
    let mut out = FALLBACK_IMAGES;
    for (slot, img) in out.iter_mut().zip(&property.additional_images) {
        if !img.trim().is_empty() {
            *slot = img.as_str();
        }
    }
    out
}

pub fn property_page(vm: &PropertyVm) -> Markup {
    let p = &vm.property;
    let price = PriceBreakdown::for_stay(p.price, DEFAULT_NIGHTS);
    let city_href = format!("/city/{}", slugify(&p.city));

    desktop_layout(
        &p.name,
        html! {
            (breadcrumb(&[("Home", "/"), (p.city.as_str(), city_href.as_str()), (p.name.as_str(), "")]))

            h1 class="text-3xl font-bold mb-2" { (p.name) }
            div class="flex items-center gap-4 text-sm text-gray-600 mb-6" {
                @if let Some(rating) = p.rating {
                    span { "★ " (format!("{rating:.2}")) " · " (p.review_count) " reviews" }
                }
                span { (p.location) ", " (p.country) }
            }

            div class="gallery grid grid-cols-4 gap-2 mb-8" {
                img src=(p.image_url) alt=(p.name) class="col-span-2 row-span-2 w-full h-full object-cover rounded-l-lg";
                @for img in gallery_images(p) {
                    img src=(img) alt=(p.name) class="w-full h-full object-cover";
                }
            }

            div class="grid grid-cols-1 lg:grid-cols-3 gap-12" {
                div class="lg:col-span-2" {
                    section class="border-b pb-6 mb-6" {
                        h2 class="text-2xl font-bold mb-2" {
                            (p.property_type.as_deref().unwrap_or("Home")) " hosted by " (p.host_name)
                        }
                        p class="text-gray-600" { (p.feature_text()) }
                        div class="flex items-center gap-3 mt-4" {
                            @if let Some(img) = &p.host_image {
                                img src=(img) alt=(p.host_name) class="w-12 h-12 rounded-full";
                            }
                            h3 class="font-medium" { "Hosted by " (p.host_name) }
                        }
                    }

                    section class="border-b pb-6 mb-6" {
                        h2 class="text-xl font-bold mb-4" { "About this place" }
                        p class="whitespace-pre-line" { (p.description) }
                    }

                    @if !p.amenities.is_empty() {
                        section class="border-b pb-6 mb-6" {
                            h2 class="text-xl font-bold mb-4" { "What this place offers" }
                            ul class="amenities grid grid-cols-2 gap-3" {
                                @for amenity in &p.amenities {
                                    li { (amenity) }
                                }
                            }
                        }
                    }

                    section class="border-b pb-6 mb-6" {
                        h2 class="text-xl font-bold mb-6" { "Guest Reviews" }
                        (revyoos_widget(&vm.review_widget_code))
                        @if !vm.reviews.is_empty() {
                            ul class="reviews space-y-6 mt-8" {
                                @for review in &vm.reviews {
                                    li class="review" {
                                        div class="flex items-center gap-3 mb-2" {
                                            @if let Some(img) = &review.user_image {
                                                img src=(img) alt=(review.user_name) class="w-10 h-10 rounded-full";
                                            }
                                            div {
                                                p class="font-medium" { (review.user_name) }
                                                p class="text-sm text-gray-500" { (review.date.format("%B %Y")) }
                                            }
                                            span class="ml-auto" { "★ " (format!("{:.1}", review.rating)) }
                                        }
                                        p { (review.comment) }
                                    }
                                }
                            }
                        }
                    }
                }

                aside {
                    div class="price-card bg-white p-6 rounded-lg shadow-sm mb-4" {
                        p class="text-2xl font-bold mb-4" {
                            (format_price(p.price)) span class="text-base font-normal text-gray-600" { " night" }
                        }
                        @if let Some(price) = price {
                            dl class="price-breakdown space-y-2" {
                                div class="flex justify-between" {
                                    dt { (format_price(p.price)) " x " (price.nights) " nights" }
                                    dd { (format_price(price.nightly_total)) }
                                }
                                div class="flex justify-between" {
                                    dt { "Cleaning fee" }
                                    dd { (format_price(price.cleaning_fee)) }
                                }
                                div class="flex justify-between" {
                                    dt { "Service fee" }
                                    dd { (format_price(price.service_fee)) }
                                }
                                div class="flex justify-between font-bold border-t pt-2" {
                                    dt { "Total" }
                                    dd { (format_price(price.total)) }
                                }
                            }
                        }
                    }
                    @if let Some(url) = p.booking_widget_url.as_deref().filter(|u| !u.trim().is_empty()) {
                        div class="bg-white p-6 rounded-lg shadow-sm" {
                            h3 class="text-xl font-bold mb-6" { "Booking" }
                            (booking_widget(url))
                        }
                    }
                }
            }
        },
    )
}
