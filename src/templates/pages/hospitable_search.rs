use crate::templates::components::breadcrumb;
use crate::templates::components::widgets::hospitable_search_widget;
use crate::templates::desktop_layout;
use maud::{html, Markup};

const SELLING_POINTS: [(&str, &str); 3] = [
    (
        "Lowest Price Guarantee",
        "Book direct and save up to 15% compared to booking through online travel agencies.",
    ),
    (
        "No Hidden Fees",
        "See the total price upfront with no surprise service fees added at checkout.",
    ),
    (
        "Direct Communication",
        "Chat directly with property owners or managers for a more personalized experience.",
    ),
];

/// `identifier` is the Hospitable search-widget id; without one the page
/// explains that search is unavailable.
pub fn hospitable_search_page(identifier: Option<&str>) -> Markup {
    desktop_layout(
        "Property Search",
        html! {
            (breadcrumb(&[("Home", "/"), ("Property Search", "/hospitable-search")]))

            div class="flex flex-col items-center space-y-8 mt-8" {
                div class="text-center max-w-3xl" {
                    h1 class="text-4xl font-bold mb-4" { "Find Your Perfect Stay" }
                    p class="text-lg text-gray-600 mb-8" {
                        "Search for properties across all our destinations and book direct with owners to save on fees."
                    }
                }

                div class="card w-full max-w-4xl shadow-md p-6" {
                    h2 class="text-2xl font-semibold mb-4" { "Search Properties" }
                    @match identifier {
                        Some(id) => { (hospitable_search_widget(id)) }
                        None => { p class="text-gray-500" { "Property search is not available right now." } }
                    }
                }

                div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-12 w-full max-w-5xl" {
                    @for (title, body) in SELLING_POINTS {
                        div class="card p-6 text-center" {
                            h3 class="text-xl font-semibold mb-3" { (title) }
                            p class="text-gray-600" { (body) }
                        }
                    }
                }
            }
        },
    )
}
