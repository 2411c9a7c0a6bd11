use maud::{html, Markup};

/// `Home > Search > ...`. The last item is the current page and is not a link.
pub fn breadcrumb(items: &[(&str, &str)]) -> Markup {
    html! {
        nav class="breadcrumb text-sm text-gray-500 mb-6" aria-label="Breadcrumb" {
            ol class="flex items-center space-x-2" {
                @for (i, (label, href)) in items.iter().enumerate() {
                    li {
                        @if i + 1 == items.len() {
                            span aria-current="page" { (label) }
                        } @else {
                            a href=(href) { (label) }
                            " › "
                        }
                    }
                }
            }
        }
    }
}
