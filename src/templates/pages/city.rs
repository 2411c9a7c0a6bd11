use crate::domain::{City, Neighborhood, Property};
use crate::templates::components::breadcrumb;
use crate::templates::components::property_card::{property_grid, CardOptions};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CityVm {
    pub city: City,
    pub neighborhoods: Vec<Neighborhood>,
    pub properties: Vec<Property>,
}

pub fn city_page(vm: &CityVm) -> Markup {
    let city = &vm.city;
    let search_href = format!("/search?location={}", city.slug);

    desktop_layout(
        &city.name,
        html! {
            (breadcrumb(&[("Home", "/"), ("Destinations", "/search"), (city.name.as_str(), "")]))

            header class="city-header relative rounded-lg overflow-hidden mb-10" {
                img src=(city.image_url) alt=(city.name) class="w-full h-80 object-cover";
                div class="absolute inset-0 flex flex-col justify-end p-8 text-white" {
                    h1 class="text-4xl font-bold" { (city.name) }
                    p class="text-lg" { (city.country) }
                }
            }

            section class="mb-10" {
                p class="text-lg mb-4" { (city.description) }
                @if let Some(long) = &city.long_description {
                    p class="text-gray-600 whitespace-pre-line" { (long) }
                }
            }

            @if !vm.neighborhoods.is_empty() {
                section class="mb-10" {
                    h2 class="text-2xl font-bold mb-6" { "Neighborhoods" }
                    div class="grid grid-cols-2 md:grid-cols-4 gap-6" {
                        @for n in &vm.neighborhoods {
                            div class="neighborhood" {
                                img src=(n.image_url) alt=(n.name) class="rounded-lg aspect-video object-cover";
                                h3 class="font-semibold mt-2" { (n.name) }
                                @if let Some(desc) = &n.description {
                                    p class="text-sm text-gray-500" { (desc) }
                                }
                            }
                        }
                    }
                }
            }

            section {
                div class="flex justify-between items-center mb-6" {
                    h2 class="text-2xl font-bold" { "Places to stay in " (city.name) }
                    a href=(search_href) class="underline" { "See all" }
                }
                @if vm.properties.is_empty() {
                    p class="text-gray-500" { "No properties listed here yet." }
                } @else {
                    (property_grid(&vm.properties, &CardOptions { show_location: false, total_nights: None }))
                }
            }
        },
    )
}
