use crate::request::QueryParams;
use crate::search::{PageWindow, Pagination};
use maud::{html, Markup};

/// Prev / numbered / next links. Nothing is rendered for a single page.
pub fn pagination(window: &PageWindow, params: &QueryParams, path: &str) -> Markup {
    let href = |page: usize| Pagination::link(params, page).href(path);

    html! {
        @if window.total_pages > 1 {
            nav class="pagination flex justify-center items-center gap-2 mt-8" aria-label="Pagination" {
                @if window.has_prev() {
                    a href=(href(window.page - 1)) rel="prev" { "Previous" }
                }
                @for entry in window.page_links() {
                    @match entry {
                        Some(p) if p == window.page => {
                            span class="page current" aria-current="page" { (p) }
                        }
                        Some(p) => {
                            a href=(href(p)) class="page" { (p) }
                        }
                        None => {
                            span class="gap" { "…" }
                        }
                    }
                }
                @if window.has_next() {
                    a href=(href(window.page + 1)) rel="next" { "Next" }
                }
            }
        }
    }
}
