use crate::router::{handle, serve};
use crate::tests::utils::{body_json, get, property_input, request, seed_property, test_state};
use serde_json::json;

fn review(property_id: i64, rating: f64) -> serde_json::Value {
    json!({
        "propertyId": property_id,
        "userId": 1,
        "userName": "Sam",
        "rating": rating,
        "comment": "Would stay again"
    })
}

#[test]
fn reviews_keep_property_rating_in_sync() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let villa = seed_property(&state, property_input("Villa", "Miami", 250));

    let first = body_json(handle(request("POST", "/api/reviews", Some(review(villa.id, 5.0))), &state)?);
    handle(request("POST", "/api/reviews", Some(review(villa.id, 4.0))), &state)?;

    let property = body_json(handle(get(&format!("/api/properties/{}", villa.id)), &state)?);
    assert_eq!(property["rating"], 4.5);
    assert_eq!(property["reviewCount"], 2);

    let listed = body_json(handle(get(&format!("/api/properties/{}/reviews", villa.id)), &state)?);
    assert_eq!(listed.as_array().map(Vec::len), Some(2));

    let first_id = first["id"].as_i64().ok_or("missing id")?;
    let resp = handle(request("DELETE", &format!("/api/reviews/{first_id}"), None), &state)?;
    assert_eq!(body_json(resp), json!({ "success": true }));

    let property = body_json(handle(get(&format!("/api/properties/{}", villa.id)), &state)?);
    assert_eq!(property["rating"], 4.0);
    assert_eq!(property["reviewCount"], 1);

    let resp = serve(request("DELETE", &format!("/api/reviews/{first_id}"), None), &state);
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[test]
fn review_for_missing_property_is_404() {
    let state = test_state();
    let resp = serve(request("POST", "/api/reviews", Some(review(404, 3.0))), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "Property not found");
}

#[test]
fn out_of_range_rating_is_rejected() {
    let state = test_state();
    let villa = seed_property(&state, property_input("Villa", "Miami", 250));
    let resp = serve(request("POST", "/api/reviews", Some(review(villa.id, 6.0))), &state);
    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp)["errors"][0]["field"], "rating");
}
