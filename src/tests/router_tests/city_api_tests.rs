use crate::router::{handle, serve};
use crate::tests::utils::{body_json, get, property_input, request, seed_property, test_state};
use serde_json::json;

fn create_city(state: &crate::state::AppState, name: &str, featured: bool) -> i64 {
    let resp = handle(
        request(
            "POST",
            "/api/cities",
            Some(json!({
                "name": name,
                "country": "USA",
                "description": format!("Visit {name}"),
                "imageUrl": "https://img.example/city.jpg",
                "featured": featured
            })),
        ),
        state,
    )
    .expect("create city");
    assert_eq!(resp.status(), 201);
    body_json(resp)["id"].as_i64().expect("city id")
}

#[test]
fn city_lookup_by_name_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    create_city(&state, "Blue Ridge", true);
    create_city(&state, "Annapolis", false);

    let city = body_json(handle(get("/api/cities/blue%20ridge"), &state)?);
    assert_eq!(city["name"], "Blue Ridge");
    assert_eq!(city["slug"], "blue-ridge");

    let featured = body_json(handle(get("/api/cities/featured"), &state)?);
    assert_eq!(featured.as_array().map(Vec::len), Some(1));

    let all = body_json(handle(get("/api/cities?limit=1"), &state)?);
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    let resp = serve(get("/api/cities/Atlantis"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["message"], "City not found");
    Ok(())
}

#[test]
fn city_properties_and_neighborhoods() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let miami = create_city(&state, "Miami", true);
    seed_property(&state, property_input("Villa", "Miami", 250));
    seed_property(&state, property_input("Beach House", "Miami Beach", 320));
    seed_property(&state, property_input("Cabin", "Blue Ridge", 180));

    let listed = body_json(handle(get("/api/cities/miami/properties"), &state)?);
    assert_eq!(listed.as_array().map(Vec::len), Some(2));

    let resp = handle(
        request(
            "POST",
            "/api/neighborhoods",
            Some(json!({
                "name": "Wynwood",
                "cityId": miami,
                "imageUrl": "https://img.example/wynwood.jpg"
            })),
        ),
        &state,
    )?;
    assert_eq!(resp.status(), 201);

    let hoods = body_json(handle(get(&format!("/api/cities/{miami}/neighborhoods")), &state)?);
    assert_eq!(hoods[0]["name"], "Wynwood");
    assert_eq!(hoods[0]["cityId"], miami);

    let resp = serve(get("/api/cities/miami/neighborhoods"), &state);
    assert_eq!(resp.status(), 400);
    Ok(())
}

#[test]
fn update_and_delete_city() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let id = create_city(&state, "Nashville", false);

    let resp = handle(
        request(
            "PATCH",
            &format!("/api/cities/{id}"),
            Some(json!({ "featured": true, "propertyCount": 12 })),
        ),
        &state,
    )?;
    let body = body_json(resp);
    assert_eq!(body["featured"], true);
    assert_eq!(body["propertyCount"], 12);

    let resp = handle(request("DELETE", &format!("/api/cities/{id}"), None), &state)?;
    assert_eq!(body_json(resp), json!({ "success": true }));

    let resp = serve(request("DELETE", &format!("/api/cities/{id}"), None), &state);
    assert_eq!(resp.status(), 404);
    Ok(())
}
