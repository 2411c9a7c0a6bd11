// src/tests/router_tests/property_api_tests.rs
use crate::router::{handle, serve};
use crate::tests::utils::{body_json, get, property_input, request, seed_property, test_state};
use serde_json::json;

#[test]
fn create_then_fetch_property() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();

    let mut payload = json!({
        "name": "Ocean View Villa",
        "description": "Steps from the sand.",
        "location": "Miami Beach, FL",
        "city": "Miami",
        "country": "USA",
        "price": 250,
        "imageUrl": "https://img.example/villa.jpg",
        "bedrooms": 3,
        "bathrooms": 2,
        "maxGuests": 6,
        "hostId": 7,
        "hostName": "Maria"
    });
    payload["amenities"] = json!(["Pool", "WiFi"]);

    let resp = handle(request("POST", "/api/properties", Some(payload)), &state)?;
    assert_eq!(resp.status(), 201);
    let created = body_json(resp);
    assert_eq!(created["slug"], "ocean-view-villa");
    assert_eq!(created["reviewCount"], 0);
    assert_eq!(created["isActive"], true);

    let id = created["id"].as_i64().ok_or("missing id")?;
    let fetched = body_json(handle(get(&format!("/api/properties/{id}")), &state)?);
    assert_eq!(fetched["name"], "Ocean View Villa");
    assert_eq!(fetched["amenities"], json!(["Pool", "WiFi"]));

    Ok(())
}

#[test]
fn create_ignores_client_supplied_rating() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let payload = json!({
        "name": "Lake House",
        "description": "Quiet dock.",
        "location": "Lake Lure, NC",
        "city": "Lake Lure",
        "country": "USA",
        "price": 180,
        "imageUrl": "https://img.example/lake.jpg",
        "bedrooms": 2,
        "bathrooms": 1,
        "maxGuests": 4,
        "hostId": 3,
        "hostName": "Sam",
        "rating": 4.9,
        "reviewCount": 120
    });

    let created = body_json(handle(request("POST", "/api/properties", Some(payload)), &state)?);
    let id = created["id"].as_i64().ok_or("missing id")?;
    assert_eq!(created["rating"], serde_json::Value::Null);
    assert_eq!(created["reviewCount"], 0);

    let reviews = body_json(handle(get(&format!("/api/properties/{id}/reviews")), &state)?);
    assert_eq!(reviews.as_array().map(Vec::len), Some(0));

    let fetched = body_json(handle(get(&format!("/api/properties/{id}")), &state)?);
    assert_eq!(fetched["reviewCount"], 0);
    Ok(())
}

#[test]
fn invalid_payload_lists_every_field() {
    let state = test_state();

    let resp = serve(
        request("POST", "/api/properties", Some(json!({ "name": "Cabin" }))),
        &state,
    );
    assert_eq!(resp.status(), 400);

    let body = body_json(resp);
    assert_eq!(body["message"], "Invalid property data");
    let fields: Vec<_> = body["errors"]
        .as_array()
        .map(|errs| errs.iter().filter_map(|e| e["field"].as_str()).collect())
        .unwrap_or_default();
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"hostName"));
}

#[test]
fn bad_and_missing_ids() {
    let state = test_state();

    let resp = serve(get("/api/properties/abc"), &state);
    assert_eq!(resp.status(), 400);

    let resp = serve(get("/api/properties/999"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "Property not found");

    let resp = serve(get("/api/nothing/here"), &state);
    assert_eq!(resp.status(), 404);
}

#[test]
fn patch_updates_only_given_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let villa = seed_property(&state, property_input("Villa", "Miami", 250));

    let resp = handle(
        request(
            "PATCH",
            &format!("/api/properties/{}", villa.id),
            Some(json!({ "price": 300, "isFeatured": true })),
        ),
        &state,
    )?;
    let body = body_json(resp);
    assert_eq!(body["price"], 300);
    assert_eq!(body["isFeatured"], true);
    assert_eq!(body["name"], "Villa");

    let resp = serve(
        request("PATCH", "/api/properties/4040", Some(json!({ "price": 1 }))),
        &state,
    );
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[test]
fn soft_delete_hides_from_listing_but_not_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let villa = seed_property(&state, property_input("Villa", "Miami", 250));
    seed_property(&state, property_input("Loft", "Miami", 120));

    let resp = handle(
        request("DELETE", &format!("/api/properties/{}", villa.id), None),
        &state,
    )?;
    assert_eq!(body_json(resp), json!({ "success": true }));

    let listed = body_json(handle(get("/api/properties"), &state)?);
    let names: Vec<_> = listed
        .as_array()
        .ok_or("expected array")?
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Loft"]);

    let fetched = body_json(handle(get(&format!("/api/properties/{}", villa.id)), &state)?);
    assert_eq!(fetched["isActive"], false);

    let resp = serve(request("DELETE", "/api/properties/777", None), &state);
    assert_eq!(resp.status(), 404);
    Ok(())
}

#[test]
fn featured_and_limits() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    for i in 0..5 {
        let mut input = property_input(&format!("Home {i}"), "Nashville", 100 + i);
        input.is_featured = Some(i % 2 == 0);
        seed_property(&state, input);
    }

    let featured = body_json(handle(get("/api/properties/featured"), &state)?);
    assert_eq!(featured.as_array().map(Vec::len), Some(3));

    let limited = body_json(handle(get("/api/properties?limit=2&offset=1"), &state)?);
    assert_eq!(limited.as_array().map(Vec::len), Some(2));

    // garbage falls back to the default limit of 10
    let all = body_json(handle(get("/api/properties?limit=abc"), &state)?);
    assert_eq!(all.as_array().map(Vec::len), Some(5));
    Ok(())
}

#[test]
fn search_combines_text_and_json_filters() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();

    let mut villa = property_input("Ocean Villa", "Miami", 300);
    villa.bedrooms = Some(4);
    villa.property_type = Some("Villa".into());
    villa.amenities = Some(vec!["Pool".into(), "High-speed WiFi".into()]);
    seed_property(&state, villa);

    let mut loft = property_input("Ocean Loft", "Miami", 120);
    loft.property_type = Some("Apartment".into());
    loft.amenities = Some(vec!["WiFi".into()]);
    seed_property(&state, loft);

    seed_property(&state, property_input("Mountain Cabin", "Blue Ridge", 180));

    let text_only = body_json(handle(get("/api/properties/search?q=ocean"), &state)?);
    assert_eq!(text_only.as_array().map(Vec::len), Some(2));

    let filters = r#"{"minPrice":200,"amenities":["wifi"],"type":"villa"}"#;
    let uri = format!(
        "/api/properties/search?q=ocean&filters={}",
        url::form_urlencoded::byte_serialize(filters.as_bytes()).collect::<String>()
    );
    let found = body_json(handle(get(&uri), &state)?);
    let names: Vec<_> = found
        .as_array()
        .ok_or("expected array")?
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Ocean Villa"]);

    let resp = serve(get("/api/properties/search?filters=%7Bnot-json"), &state);
    assert_eq!(resp.status(), 400);
    Ok(())
}
