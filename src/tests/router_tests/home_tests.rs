// src/tests/router_tests/home_tests.rs

use crate::auth::AuthState;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{app_with_auth, body_string, get, get_with_cookie, signed_in_user, test_app};

#[test]
fn home_page_renders_every_seeded_card() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Stays nearby"));
    assert!(body.contains("Find your next stay."));
    assert_eq!(
        body.matches("class=\"property-card group\"").count(),
        app.store.len()
    );
    for listing in app.store.all() {
        assert!(body.contains(&listing.title), "missing {}", listing.title);
    }
}

#[test]
fn home_page_is_gated_while_auth_is_loading() {
    let app = app_with_auth(AuthState::loading());

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Loading..."));
    assert!(!body.contains("property-card"));
}

#[test]
fn header_shows_signed_in_user() {
    let app = app_with_auth(AuthState::resolved(Some(signed_in_user())));

    let body = body_string(handle(get("/"), &app).expect("Handler failed"));

    assert!(body.contains("Jordan"));
    assert!(!body.contains("Log in"));
}

#[test]
fn header_offers_login_when_signed_out() {
    let body = body_string(handle(get("/"), &test_app()).expect("Handler failed"));
    assert!(body.contains("Log in"));
}

#[test]
fn cards_reflect_wishlist_cookie() {
    let app = test_app();

    let resp = handle(get_with_cookie("/", "wishlist=3|10"), &app).expect("Handler failed");
    let body = body_string(resp);

    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 2);
    assert!(body.contains("Wishlist (2)"));
}

#[test]
fn every_card_starts_on_its_cover_image() {
    let app = test_app();
    let body = body_string(handle(get("/"), &app).expect("Handler failed"));

    let multi = app.store.get("1").unwrap();
    assert!(body.contains(&crate::tests::utils::escaped(&multi.images[0])));
    assert!(body.contains("/cards/1?image=0&amp;nav=next"));
}

#[test]
fn health_check_answers_ok() {
    let body = body_string(handle(get("/health"), &test_app()).expect("Handler failed"));
    assert_eq!(body, "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let result = handle(get("/nope"), &test_app());
    assert!(matches!(result, Err(ServerError::NotFound)));
}
