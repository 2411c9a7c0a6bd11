use crate::errors::ServerError;
use crate::hospitable::BookingFilter;
use crate::router::{handle, serve};
use crate::tests::utils::{
    body_json, get, request, stub_upstream, test_state, test_state_with_upstream,
};
use serde_json::json;
use std::time::Duration;

// No token is configured in tests, so every proxy route must fail closed.
#[test]
fn proxy_without_token_is_a_500() {
    let state = test_state();

    for req in [
        get("/api/hospitable/properties"),
        get("/api/hospitable/properties/abc"),
        get("/api/hospitable/customers"),
        get("/api/hospitable/bookings?propertyId=1"),
        request("POST", "/api/hospitable/bookings", Some(json!({ "propertyId": "1" }))),
        request(
            "PATCH",
            "/api/hospitable/bookings/b1/status",
            Some(json!({ "status": "confirmed" })),
        ),
    ] {
        let resp = serve(req, &state);
        assert_eq!(resp.status(), 500);
        assert_eq!(body_json(resp)["message"], "Internal Server Error");
    }
}

#[test]
fn proxy_unwraps_envelope_and_authenticates() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, seen) = stub_upstream(vec![(
        200,
        json!({ "data": [{ "id": "p1", "name": "Lake House" }] }).to_string(),
    )]);
    let state = test_state_with_upstream(&base_url);

    let resp = handle(get("/api/hospitable/properties"), &state)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!([{ "id": "p1", "name": "Lake House" }]));

    let raw = seen.recv_timeout(Duration::from_secs(5))?.to_ascii_lowercase();
    assert!(raw.starts_with("get /v2/properties http/1.1"));
    assert!(raw.contains("authorization: bearer test-token"));
    assert!(raw.contains("connect-version: 2024-01"));
    assert!(raw.contains("accept: application/json"));
    Ok(())
}

#[test]
fn status_update_is_forwarded_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, seen) = stub_upstream(vec![(
        200,
        json!({ "data": { "id": "b1", "status": "confirmed" } }).to_string(),
    )]);
    let state = test_state_with_upstream(&base_url);

    let resp = handle(
        request(
            "PATCH",
            "/api/hospitable/bookings/b1/status",
            Some(json!({ "status": "confirmed" })),
        ),
        &state,
    )?;
    assert_eq!(body_json(resp)["status"], "confirmed");

    let raw = seen.recv_timeout(Duration::from_secs(5))?;
    assert!(raw.starts_with("PATCH /v2/bookings/b1/status HTTP/1.1"));
    assert!(raw.ends_with(r#"{"status":"confirmed"}"#));
    Ok(())
}

#[test]
fn upstream_error_surfaces_message_and_maps_to_500() -> Result<(), Box<dyn std::error::Error>> {
    let rejection = json!({ "message": "Invalid dates" }).to_string();
    let (base_url, seen) = stub_upstream(vec![(422, rejection.clone()), (422, rejection)]);
    let state = test_state_with_upstream(&base_url);

    let client = state.hospitable()?;
    let filter = BookingFilter {
        property_id: Some("p1".into()),
        customer_id: None,
    };
    match client.bookings(&filter) {
        Err(ServerError::Upstream(message)) => assert_eq!(message, "Invalid dates"),
        other => panic!("expected upstream error, got {other:?}"),
    }
    let raw = seen.recv_timeout(Duration::from_secs(5))?;
    assert!(raw.starts_with("GET /v2/bookings?propertyId=p1 HTTP/1.1"));

    let resp = serve(
        request("POST", "/api/hospitable/bookings", Some(json!({ "propertyId": "p1" }))),
        &state,
    );
    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(resp)["message"], "Internal Server Error");
    Ok(())
}
