use crate::router::{handle, serve};
use crate::tests::utils::{body_json, get, property_input, request, seed_property, test_state};
use serde_json::json;

#[test]
fn favorite_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let villa = seed_property(&state, property_input("Villa", "Miami", 250));
    let check = format!("/api/favorites/check?userId=3&propertyId={}", villa.id);

    assert_eq!(body_json(handle(get(&check), &state)?), json!({ "isFavorite": false }));

    let resp = handle(
        request("POST", "/api/favorites", Some(json!({ "userId": 3, "propertyId": villa.id }))),
        &state,
    )?;
    assert_eq!(resp.status(), 201);
    assert_eq!(body_json(handle(get(&check), &state)?), json!({ "isFavorite": true }));

    // saving twice is a client error
    let resp = serve(
        request("POST", "/api/favorites", Some(json!({ "userId": 3, "propertyId": villa.id }))),
        &state,
    );
    assert_eq!(resp.status(), 400);

    let saved = body_json(handle(get("/api/users/3/favorites"), &state)?);
    assert_eq!(saved[0]["name"], "Villa");

    // ids may arrive as strings
    let resp = handle(
        request(
            "DELETE",
            "/api/favorites",
            Some(json!({ "userId": "3", "propertyId": villa.id.to_string() })),
        ),
        &state,
    )?;
    assert_eq!(body_json(resp), json!({ "success": true }));

    let resp = serve(
        request("DELETE", "/api/favorites", Some(json!({ "userId": 3, "propertyId": villa.id }))),
        &state,
    );
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[test]
fn favorite_requests_need_ids() {
    let state = test_state();

    let resp = serve(
        request("DELETE", "/api/favorites", Some(json!({ "userId": 3 }))),
        &state,
    );
    assert_eq!(resp.status(), 400);

    let resp = serve(get("/api/favorites/check?userId=abc&propertyId=1"), &state);
    assert_eq!(resp.status(), 400);

    let resp = serve(get("/api/favorites/check?propertyId=1"), &state);
    assert_eq!(resp.status(), 400);
}
