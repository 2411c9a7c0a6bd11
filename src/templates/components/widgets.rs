// Third-party embeds. Each is a container plus the vendor's loader script.
use maud::{html, Markup};

pub const REVYOOS_SCRIPT: &str = "https://www.revyoos.com/js/widgetBuilder.js";
pub const HOSPITABLE_SEARCH_SCRIPT: &str =
    "https://hospitable.b-cdn.net/direct-property-search-widget/hospitable-search-widget.prod.js";

pub fn revyoos_widget(widget_code: &str) -> Markup {
    html! {
        div class="revyoos-widget-container w-full" {
            div class="revyoos-embed-widget min-h-[200px]" data-revyoos-embed=(widget_code) {}
            script type="application/javascript" src=(REVYOOS_SCRIPT) defer data-revyoos-widget=(widget_code) {}
        }
    }
}

/// Hospitable booking iframe for a property's `booking_widget_url`.
pub fn booking_widget(url: &str) -> Markup {
    html! {
        div class="booking-widget-container w-full overflow-hidden" {
            iframe
                id="booking-iframe"
                src=(url)
                sandbox="allow-top-navigation allow-scripts allow-same-origin allow-forms"
                class="w-full min-h-[700px] border-0"
                scrolling="no"
            {}
        }
    }
}

pub fn hospitable_search_widget(identifier: &str) -> Markup {
    html! {
        div class="hospitable-search-widget w-full" {
            hospitable-direct-mps identifier=(identifier) type="custom" {}
            script src=(HOSPITABLE_SEARCH_SCRIPT) async defer {}
        }
    }
}
