// templates/pages/home.rs

use crate::domain::{City, Property};
use crate::search::StayQuery;
use crate::templates::components::property_card::{property_grid, CardOptions};
use crate::templates::components::search_bar;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HomeVm {
    pub featured_properties: Vec<Property>,
    pub featured_cities: Vec<City>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Book direct and save",
        html! {
            section class="hero text-center py-16" {
                h1 class="text-4xl font-bold mb-4" { "Find your next stay. Book direct." }
                p class="text-lg text-gray-600 mb-8" {
                    "Skip the platform fees and book with hosts directly."
                }
                (search_bar("", &StayQuery::default()))
            }

            section class="mb-12" {
                h2 class="text-2xl font-bold mb-6" { "Featured stays" }
                @if vm.featured_properties.is_empty() {
                    p class="text-gray-500" { "No featured properties yet." }
                } @else {
                    (property_grid(&vm.featured_properties, &CardOptions::default()))
                }
            }

            @if !vm.featured_cities.is_empty() {
                section class="mb-12" {
                    h2 class="text-2xl font-bold mb-6" { "Popular destinations" }
                    div class="grid grid-cols-2 md:grid-cols-4 gap-6" {
                        @for city in &vm.featured_cities {
                            a href={ "/city/" (city.slug) } class="city-card block" {
                                img src=(city.image_url) alt=(city.name) class="rounded-lg aspect-square object-cover";
                                h3 class="font-semibold mt-2" { (city.name) }
                                p class="text-sm text-gray-500" {
                                    (crate::domain::property::plural(city.property_count, "property", "properties"))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
