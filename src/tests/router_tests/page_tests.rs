use crate::db::{cities, properties, reviews};
use crate::domain::{Property, ReviewInput};
use crate::state::AppState;
use crate::router::{handle, serve};
use crate::tests::utils::{body_string, city_input, get, property_input, seed_property, test_state};

#[test]
fn home_lists_featured_properties() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let mut featured = property_input("Featured Villa", "Miami", 250);
    featured.is_featured = Some(true);
    seed_property(&state, featured);
    seed_property(&state, property_input("Plain Loft", "Miami", 120));

    let resp = handle(get("/"), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("Featured Villa"));
    assert!(!html.contains("Plain Loft"));
    Ok(())
}

#[test]
fn search_page_paginates_and_counts() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    for i in 0..14 {
        seed_property(&state, property_input(&format!("Cabin {i:02}"), "Blue Ridge", 150));
    }
    seed_property(&state, property_input("City Loft", "Nashville", 150));

    let html = body_string(handle(get("/search?location=blue-ridge"), &state)?);
    assert!(html.contains("Stays in Blue Ridge, GA"));
    assert!(html.contains("Showing 1-12 of 14 properties"));
    assert!(html.contains(r#"href="/search?location=blue-ridge&amp;page=2""#));
    assert!(!html.contains("City Loft"));

    let html = body_string(handle(get("/search?location=blue-ridge&page=2"), &state)?);
    assert!(html.contains("Showing 13-14 of 14 properties"));

    // past the end clamps to the last page
    let html = body_string(handle(get("/search?location=blue-ridge&page=9"), &state)?);
    assert!(html.contains("Showing 13-14 of 14 properties"));
    Ok(())
}

#[test]
fn search_page_with_no_results() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let html = body_string(handle(get("/search?q=igloo&bedrooms=3"), &state)?);
    assert!(html.contains("Showing 0 of 0 properties"));
    assert!(html.contains("No properties match your search"));
    assert!(html.contains(r#"href="/search?q=igloo" class="clear-filters underline""#));
    Ok(())
}

#[test]
fn property_page_embeds_widgets_and_reviews() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let mut input = property_input("Villa", "Miami", 250);
    input.review_widget_code = Some("own-code".into());
    input.booking_widget_url = Some("https://booking.hospitable.com/widget/abc/1".into());
    let villa = seed_property(&state, input);

    state.db.with_conn(|conn| {
        let review = ReviewInput {
            property_id: Some(villa.id),
            user_id: Some(2),
            user_name: Some("Jordan".into()),
            rating: Some(5.0),
            comment: Some("Perfect week".into()),
            ..ReviewInput::default()
        }
        .validate()?;
        reviews::create(conn, &review)
    })?;

    let html = body_string(handle(get(&format!("/property/{}", villa.id)), &state)?);
    assert!(html.contains(r#"data-revyoos-embed="own-code""#));
    assert!(html.contains("booking-iframe"));
    assert!(html.contains("Perfect week"));
    // 6 nights at $250 plus the $85 cleaning fee
    assert!(html.contains("$1,585"));
    Ok(())
}

#[test]
fn property_page_falls_back_to_default_widget_code() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let villa = seed_property(&state, property_input("Villa", "Miami", 250));

    let html = body_string(handle(get(&format!("/property/{}", villa.id)), &state)?);
    assert!(html.contains(&format!(
        r#"data-revyoos-embed="{}""#,
        state.revyoos_widget_code
    )));
    assert!(!html.contains("booking-iframe"));
    Ok(())
}

#[test]
fn missing_pages_render_html_errors() {
    let state = test_state();

    let resp = serve(get("/property/9999"), &state);
    assert_eq!(resp.status(), 404);
    let html = body_string(resp);
    assert!(html.contains("Property not found"));
    assert!(html.starts_with("<!DOCTYPE html>"));

    assert_eq!(serve(get("/property/abc"), &state).status(), 400);
    assert_eq!(serve(get("/city/atlantis"), &state).status(), 404);
    assert_eq!(serve(get("/no/such/page"), &state).status(), 404);
}

#[test]
fn city_page_shows_city_and_its_properties() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    state.db.with_conn(|conn| {
        let mut input = city_input("Blue Ridge");
        input.long_description = Some("Mountain views all around.".into());
        cities::create(conn, &input.validate()?)
    })?;
    seed_property(&state, property_input("Creekside Cabin", "Blue Ridge", 180));

    let html = body_string(handle(get("/city/blue-ridge"), &state)?);
    assert!(html.contains("Mountain views all around."));
    assert!(html.contains("Creekside Cabin"));
    Ok(())
}

#[test]
fn hospitable_search_page_embeds_widget() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let html = body_string(handle(get("/hospitable-search"), &state)?);
    assert!(html.contains(r#"identifier="test-search-id""#));
    assert!(html.contains("Find Your Perfect Stay"));
    Ok(())
}

/// Insert a row whose price is beyond what validation accepts today.
fn seed_oversized(state: &AppState, name: &str, price: i64) -> Property {
    let mut new = property_input(name, "Miami", 100)
        .validate()
        .expect("valid property input");
    new.price = price;
    state
        .db
        .with_conn(|conn| properties::create(conn, &new))
        .expect("insert property")
}

#[test]
fn search_page_survives_overflowing_stay_total() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    seed_oversized(&state, "Penthouse", 5_000_000_000_000);

    let resp = handle(get("/search?checkIn=2000-01-01&checkOut=9000-01-01"), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("Penthouse"));
    assert!(!html.contains(" total<"));
    Ok(())
}

#[test]
fn property_page_survives_overflowing_breakdown() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let p = seed_oversized(&state, "Palace", i64::MAX / 2);

    let resp = handle(get(&format!("/property/{}", p.id)), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(resp);
    assert!(html.contains("Palace"));
    assert!(!html.contains("price-breakdown"));
    Ok(())
}
