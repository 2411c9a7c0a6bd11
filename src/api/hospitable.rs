// Proxy routes. Payloads pass through untouched apart from the envelope.
use crate::hospitable::{BookingFilter, StatusUpdate};
use crate::request::{json_body, QueryParams};
use crate::responses::{json_created, json_response, ResultResp};
use crate::state::AppState;
use astra::Request;
use serde_json::Value;

pub fn properties(state: &AppState) -> ResultResp {
    json_response(&state.hospitable()?.properties()?)
}

pub fn property(id: &str, state: &AppState) -> ResultResp {
    json_response(&state.hospitable()?.property(id)?)
}

pub fn customers(state: &AppState) -> ResultResp {
    json_response(&state.hospitable()?.customers()?)
}

pub fn customer(id: &str, state: &AppState) -> ResultResp {
    json_response(&state.hospitable()?.customer(id)?)
}

pub fn create_customer(req: &mut Request, state: &AppState) -> ResultResp {
    let client = state.hospitable()?;
    let body: Value = json_body(req)?;
    json_created(&client.create_customer(&body)?)
}

pub fn bookings(query: &QueryParams, state: &AppState) -> ResultResp {
    let filter = BookingFilter {
        property_id: query.get("propertyId").map(str::to_string),
        customer_id: query.get("customerId").map(str::to_string),
    };
    json_response(&state.hospitable()?.bookings(&filter)?)
}

pub fn create_booking(req: &mut Request, state: &AppState) -> ResultResp {
    let client = state.hospitable()?;
    let body: Value = json_body(req)?;
    json_created(&client.create_booking(&body)?)
}

pub fn update_booking_status(id: &str, req: &mut Request, state: &AppState) -> ResultResp {
    let client = state.hospitable()?;
    let update: StatusUpdate = json_body(req)?;
    json_response(&client.update_booking_status(id, update)?)
}
