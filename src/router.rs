use crate::api::{cities, favorites, hospitable, neighborhoods, properties, reviews, users};
use crate::errors::ServerError;
use crate::request::{path_segments, QueryParams};
use crate::responses::ResultResp;
use crate::site;
use crate::state::AppState;
use astra::Request;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let segments = path_segments(req.uri().path());
    let query = QueryParams::from_request(&req);
    let segs: Vec<&str> = segments.iter().map(String::as_str).collect();
    let req = &mut req;

    match (method.as_str(), segs.as_slice()) {
        // pages
        ("GET", []) => site::home(state),
        ("GET", ["search"]) => site::search(&query, state),
        ("GET", ["property", id]) => site::property(id, state),
        ("GET", ["city", name]) => site::city(name, state),
        ("GET", ["hospitable-search"]) => site::hospitable_search(state),

        // properties
        ("GET", ["api", "properties"]) => properties::list(&query, state),
        ("POST", ["api", "properties"]) => properties::create(req, state),
        ("GET", ["api", "properties", "featured"]) => properties::featured(&query, state),
        ("GET", ["api", "properties", "search"]) => properties::search(&query, state),
        ("GET", ["api", "properties", id]) => properties::get(id, state),
        ("PATCH", ["api", "properties", id]) => properties::update(id, req, state),
        ("DELETE", ["api", "properties", id]) => properties::delete(id, state),
        ("GET", ["api", "properties", id, "reviews"]) => properties::reviews(id, state),

        // cities
        ("GET", ["api", "cities"]) => cities::list(&query, state),
        ("POST", ["api", "cities"]) => cities::create(req, state),
        ("GET", ["api", "cities", "featured"]) => cities::featured(&query, state),
        ("GET", ["api", "cities", name]) => cities::by_name(name, state),
        ("PATCH", ["api", "cities", id]) => cities::update(id, req, state),
        ("DELETE", ["api", "cities", id]) => cities::delete(id, state),
        ("GET", ["api", "cities", name, "properties"]) => cities::properties(name, &query, state),
        ("GET", ["api", "cities", id, "neighborhoods"]) => cities::neighborhoods(id, state),
        ("POST", ["api", "neighborhoods"]) => neighborhoods::create(req, state),

        // reviews, favorites, users
        ("POST", ["api", "reviews"]) => reviews::create(req, state),
        ("DELETE", ["api", "reviews", id]) => reviews::delete(id, state),
        ("GET", ["api", "users", id, "favorites"]) => favorites::for_user(id, state),
        ("POST", ["api", "favorites"]) => favorites::add(req, state),
        ("DELETE", ["api", "favorites"]) => favorites::remove(req, state),
        ("GET", ["api", "favorites", "check"]) => favorites::check(&query, state),
        ("POST", ["api", "users"]) => users::create(req, state),

        // hospitable proxy
        ("GET", ["api", "hospitable", "properties"]) => hospitable::properties(state),
        ("GET", ["api", "hospitable", "properties", id]) => hospitable::property(id, state),
        ("GET", ["api", "hospitable", "customers"]) => hospitable::customers(state),
        ("POST", ["api", "hospitable", "customers"]) => hospitable::create_customer(req, state),
        ("GET", ["api", "hospitable", "customers", id]) => hospitable::customer(id, state),
        ("GET", ["api", "hospitable", "bookings"]) => hospitable::bookings(&query, state),
        ("POST", ["api", "hospitable", "bookings"]) => hospitable::create_booking(req, state),
        ("PATCH", ["api", "hospitable", "bookings", id, "status"]) => {
            hospitable::update_booking_status(id, req, state)
        }

        (_, ["api", ..]) => Err(ServerError::not_found("Route")),
        _ => Err(ServerError::not_found("Page")),
    }
}

/// `handle` plus the access log line and error rendering.
pub fn serve(req: Request, state: &AppState) -> astra::Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = handle(req, state)
        .unwrap_or_else(|err| crate::responses::error_to_response(err, &path));

    tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
    resp
}
