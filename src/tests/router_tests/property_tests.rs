// src/tests/router_tests/property_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, escaped, get, get_with_cookie, test_app};

#[test]
fn detail_page_renders_listing() {
    let app = test_app();
    let listing = app.store.get("1").unwrap();

    let resp = handle(get("/property/1"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(&listing.title));
    assert!(body.contains("127 reviews"));
    assert!(body.contains("Entire apartment hosted by Sarah Johnson"));
    assert!(body.contains("⭐ Superhost"));
    assert!(body.contains("What this place offers"));
    assert!(body.contains("House rules"));
    assert!(body.contains("1 / 4"));
}

#[test]
fn booking_estimate_uses_configured_nights() {
    let body = body_string(handle(get("/property/1"), &test_app()).expect("Handler failed"));

    // 120 x 5 = 600, plus 50 cleaning and 83 service.
    assert!(body.contains("$120 x 5 nights"));
    assert!(body.contains("$600"));
    assert!(body.contains("$733"));
}

#[test]
fn unknown_listing_shows_not_found_view() {
    let resp = handle(get("/property/999"), &test_app()).expect("Handler failed");
    assert_eq!(resp.status(), 404);

    let body = body_string(resp);
    assert!(body.contains("Property not found"));
    assert!(body.contains("Return to home"));
}

#[test]
fn next_wraps_from_last_image() {
    let body = body_string(
        handle(get("/property/1?image=3&nav=next"), &test_app()).expect("Handler failed"),
    );
    assert!(body.contains("1 / 4"));
}

#[test]
fn previous_wraps_from_first_image() {
    let body = body_string(
        handle(get("/property/1?image=0&nav=previous"), &test_app()).expect("Handler failed"),
    );
    assert!(body.contains("4 / 4"));
}

#[test]
fn thumbnail_jump_selects_image() {
    let app = test_app();
    let listing = app.store.get("1").unwrap();

    let body = body_string(handle(get("/property/1?image=2"), &app).expect("Handler failed"));

    assert!(body.contains("3 / 4"));
    assert!(body.contains(&format!("src=\"{}\"", escaped(&listing.images[2]))));
}

#[test]
fn single_image_listing_has_no_carousel_controls() {
    let body = body_string(
        handle(get("/property/3?nav=next"), &test_app()).expect("Handler failed"),
    );
    assert!(!body.contains("Next image"));
}

#[test]
fn saved_state_follows_cookie() {
    let app = test_app();

    let saved = body_string(handle(get_with_cookie("/property/1", "wishlist=1"), &app).unwrap());
    assert!(saved.contains("♥ Saved"));

    let unsaved = body_string(handle(get("/property/1"), &app).unwrap());
    assert!(unsaved.contains("♡ Save"));
}

#[test]
fn card_fragment_steps_carousel() {
    let app = test_app();
    let listing = app.store.get("1").unwrap();

    let resp = handle(get("/cards/1?image=0&nav=next"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(&escaped(&listing.images[1])));
    assert!(body.contains("/cards/1?image=1&amp;nav=next"));
    assert!(!body.contains("<html"));
}

#[test]
fn card_fragment_for_unknown_listing_is_not_found() {
    let result = handle(get("/cards/nope?nav=next"), &test_app());
    assert!(matches!(result, Err(ServerError::NotFound)));
}
