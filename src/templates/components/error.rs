use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, Markup};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: &ServerError) -> Response {
    let title = match err.status() {
        404 => "Not Found",
        400 => "Bad Request",
        _ => "Something went wrong",
    };
    render_error(err.status(), title, &err.public_message())
}

fn error_page(status: u16, title: &str, message: &str) -> Markup {
    desktop_layout(
        title,
        html! {
            div class="error-page max-w-xl mx-auto text-center py-16" {
                h1 class="text-3xl font-bold mb-4" { "Error " (status) ": " (title) }
                p class="text-gray-600 mb-6" { (message) }
                a href="/" class="btn" { "← Back to home" }
            }
        },
    )
}

fn render_error(status: u16, title: &str, message: &str) -> Response {
    let html = error_page(status, title, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
