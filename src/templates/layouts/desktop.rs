use crate::templates::components::search_bar::compact_search_bar;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | StayDirectly" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (navbar())
                main class="container mx-auto px-4 py-8" {
                    (content)
                }
                (footer())
            }
        }
    }
}

fn navbar() -> Markup {
    html! {
        header class="sticky top-0 bg-white shadow-sm" {
            div class="container mx-auto px-4 py-4 flex items-center justify-between" {
                a href="/" class="text-primary text-2xl font-bold" { "StayDirectly" }
                div class="hidden lg:flex flex-1 max-w-2xl mx-8" {
                    (compact_search_bar())
                }
                nav class="flex items-center space-x-6" {
                    a href="/search" { "Destinations" }
                    a href="/hospitable-search" { "Property Search" }
                    a href="#" { "For Hosts" }
                }
            }
        }
    }
}

const FOOTER_COLUMNS: [(&str, [&str; 4]); 4] = [
    (
        "Support",
        ["Help Center", "Safety Information", "Cancellation Options", "COVID-19 Resources"],
    ),
    (
        "Community",
        ["Blog", "For Property Owners", "Community Forum", "Partner with Us"],
    ),
    ("Booking", ["How it Works", "Guarantee", "Guest Reviews", "Gift Cards"]),
    ("About", ["Our Story", "Careers", "Press", "Contact Us"]),
];

fn footer() -> Markup {
    let year = chrono::Utc::now().format("%Y");
    html! {
        footer class="bg-gray-100 pt-12 pb-8" {
            div class="container mx-auto px-4" {
                div class="grid grid-cols-2 md:grid-cols-4 gap-8" {
                    @for (heading, links) in FOOTER_COLUMNS {
                        div {
                            h3 class="font-bold text-lg mb-4" { (heading) }
                            ul class="space-y-2" {
                                @for link in links {
                                    li { a href="#" { (link) } }
                                }
                            }
                        }
                    }
                }
                div class="text-gray-500 text-sm mt-8" {
                    p { "© " (year) " StayDirectly. All rights reserved." }
                    div class="space-x-4 mt-2" {
                        a href="#" { "Privacy" }
                        a href="#" { "Terms" }
                        a href="#" { "Sitemap" }
                    }
                }
            }
        }
    }
}
