use crate::request::QueryParams;
use crate::search::filters::format_price;
use crate::search::{SearchFilters, AMENITY_OPTIONS, PRICE_RANGES, PROPERTY_TYPES};
use maud::{html, Markup};

const SEARCH_PATH: &str = "/search";

/// Filter controls for the search page. Every option is a plain link to the
/// current URL with that one filter changed, so no script is needed.
pub fn filter_list(filters: &SearchFilters, params: &QueryParams) -> Markup {
    let link = |next: &SearchFilters| next.apply_to(params).href(SEARCH_PATH);

    html! {
        div class="filter-list flex flex-wrap gap-3 mb-6" {
            details class="filter" open[filters.has_price()] {
                summary class=(chip_class(filters.has_price())) { (filters.price_label()) }
                ul {
                    @for (min, max) in PRICE_RANGES {
                        @let active = filters.min_price == min && filters.max_price == max;
                        @let next = if active {
                            SearchFilters { min_price: None, max_price: None, ..filters.clone() }
                        } else {
                            SearchFilters { min_price: min, max_price: max, ..filters.clone() }
                        };
                        li { a href=(link(&next)) class=(chip_class(active)) { (range_label(min, max)) } }
                    }
                }
            }

            details class="filter" open[filters.property_type.is_some()] {
                summary class=(chip_class(filters.property_type.is_some())) {
                    (filters.property_type.as_deref().unwrap_or("Property Type"))
                }
                ul {
                    @for kind in PROPERTY_TYPES {
                        @let active = filters
                            .property_type
                            .as_deref()
                            .is_some_and(|t| t.eq_ignore_ascii_case(kind));
                        @let next = SearchFilters {
                            property_type: if active { None } else { Some(kind.to_string()) },
                            ..filters.clone()
                        };
                        li { a href=(link(&next)) class=(chip_class(active)) { (kind) } }
                    }
                }
            }

            details class="filter" open[filters.bedrooms.is_some()] {
                summary class=(chip_class(filters.bedrooms.is_some())) { (filters.bedrooms_label()) }
                ul {
                    @for n in 1..=5i64 {
                        @let active = filters.bedrooms == Some(n);
                        @let next = SearchFilters {
                            bedrooms: if active { None } else { Some(n) },
                            ..filters.clone()
                        };
                        li { a href=(link(&next)) class=(chip_class(active)) { (n) "+" } }
                    }
                }
            }

            details class="filter" open[!filters.amenities.is_empty()] {
                summary class=(chip_class(!filters.amenities.is_empty())) { "Amenities" }
                ul {
                    @for amenity in AMENITY_OPTIONS {
                        @let active = filters.has_amenity(amenity);
                        li {
                            a href=(link(&filters.toggle_amenity(amenity))) class=(chip_class(active)) {
                                @if active { "✓ " }
                                (amenity)
                            }
                        }
                    }
                }
            }

            @if !filters.is_empty() {
                a href=(SearchFilters::cleared(params).href(SEARCH_PATH)) class="clear-filters underline" {
                    "Clear filters"
                }
            }
        }
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip-active"
    } else {
        "chip"
    }
}

fn range_label(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (None, Some(max)) => format!("Under {}", format_price(max)),
        (Some(min), None) => format!("{}+", format_price(min)),
        (Some(min), Some(max)) => format!("{} - {}", format_price(min), format_price(max)),
        (None, None) => "Any price".to_string(),
    }
}
