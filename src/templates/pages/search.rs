use crate::domain::Property;
use crate::request::QueryParams;
use crate::search::{PageWindow, SearchRequest};
use crate::templates::components::property_card::{property_grid, CardOptions};
use crate::templates::components::{breadcrumb, filter_list, pagination, search_bar};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct SearchVm {
    pub request: SearchRequest,
    pub params: QueryParams,
    pub window: PageWindow,
    pub results: Vec<Property>,
}

impl SearchVm {
    /// "Stays in Miami, FL", "Results for \"loft\"", or a generic heading.
    pub fn title(&self) -> String {
        if let Some(label) = self.request.stay.location_label() {
            return format!("Stays in {label}");
        }
        if let Some(city) = self.request.stay.city_name() {
            return format!("Stays in {city}");
        }
        if !self.request.text.is_empty() {
            return format!("Results for \"{}\"", self.request.text);
        }
        if self.request.is_empty() {
            "All stays".to_string()
        } else {
            "Search results".to_string()
        }
    }
}

pub fn search_page(vm: &SearchVm) -> Markup {
    let title = vm.title();
    let stay = &vm.request.stay;
    let cards = CardOptions {
        show_location: true,
        total_nights: stay.nights(),
    };

    desktop_layout(
        &title,
        html! {
            (breadcrumb(&[("Home", "/"), ("Search", "/search")]))
            div class="mb-6" { (search_bar(&vm.request.text, stay)) }

            h1 class="text-3xl font-bold mb-4" { (title) }
            (filter_list(&vm.request.filters, &vm.params))

            p class="results-count text-gray-600 mb-4" { (vm.window.summary()) }

            @if vm.results.is_empty() {
                div class="empty-results text-center py-12" {
                    h2 class="text-xl font-semibold" { "No properties match your search" }
                    p class="text-gray-500" { "Try removing a filter or searching a different area." }
                }
            } @else {
                (property_grid(&vm.results, &cards))
            }

            (pagination(&vm.window, &vm.params, "/search"))
        },
    )
}
