use crate::search::stay::DATE_FORMAT;
use crate::search::{StayQuery, LOCATIONS};
use maud::{html, Markup};

/// The hero search form. Submits `q`, `location`, `checkIn`, `checkOut` and
/// `guests` to `/search`; current values are pre-filled.
pub fn search_bar(text: &str, stay: &StayQuery) -> Markup {
    let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.format(DATE_FORMAT).to_string());
    html! {
        form action="/search" method="get" class="search-bar flex flex-wrap gap-2 bg-white rounded-full shadow p-2" {
            input type="text" name="q" value=(text) placeholder="Search properties" class="flex-1";
            select name="location" {
                option value="" selected[stay.location.is_none()] { "Anywhere" }
                @for (id, label) in LOCATIONS {
                    option value=(id) selected[stay.location.as_deref() == Some(id)] { (label) }
                }
            }
            input type="date" name="checkIn" value=[date(stay.check_in)] aria-label="Check in";
            input type="date" name="checkOut" value=[date(stay.check_out)] aria-label="Check out";
            input type="number" name="guests" min="1" value=[stay.guests] placeholder="Guests";
            button type="submit" class="btn rounded-full px-6" { "Search" }
        }
    }
}

/// Single-field variant shown in the navbar.
pub fn compact_search_bar() -> Markup {
    html! {
        form action="/search" method="get" class="search-bar-compact w-full" {
            input type="search" name="q" placeholder="Where are you going?" class="w-full rounded-full";
        }
    }
}
