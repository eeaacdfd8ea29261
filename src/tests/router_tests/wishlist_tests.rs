// src/tests/router_tests/wishlist_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, escaped, get, get_with_cookie, test_app};
use astra::{Body, Request};
use http::Method;

fn toggle(id: &str, cookie: Option<&str>, htmx: bool, form: &str) -> Request {
    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(format!("/wishlist/{id}/toggle"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Referer", "/search?q=Miami");

    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    if htmx {
        builder = builder.header("HX-Request", "true");
    }

    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

fn set_cookie(resp: &astra::Response) -> String {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[test]
fn toggle_saves_and_redirects_back() {
    let resp = handle(toggle("3", None, false, ""), &test_app()).expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/search?q=Miami"
    );
    assert!(set_cookie(&resp).starts_with("wishlist=3;"));
}

#[test]
fn second_toggle_clears_the_wishlist() {
    let resp = handle(toggle("3", Some("wishlist=3"), false, ""), &test_app())
        .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert!(set_cookie(&resp).contains("Max-Age=0"));
}

#[test]
fn toggle_keeps_other_saved_ids() {
    let resp = handle(toggle("1", Some("wishlist=3"), false, ""), &test_app())
        .expect("Handler failed");
    assert!(set_cookie(&resp).starts_with("wishlist=1|3;"));
}

#[test]
fn htmx_toggle_rerenders_only_the_card() {
    let app = test_app();
    let listing = app.store.get("1").unwrap();

    let resp = handle(toggle("1", None, true, "image=2"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(set_cookie(&resp).starts_with("wishlist=1;"));

    let body = body_string(resp);
    assert!(body.contains("id=\"card-1\""));
    assert!(body.contains("aria-pressed=\"true\""));
    assert!(body.contains(&escaped(&listing.images[2])));
    assert!(!body.contains("<html"));
}

#[test]
fn toggle_for_unknown_listing_is_not_found() {
    let result = handle(toggle("ghost", None, false, ""), &test_app());
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn wishlist_page_lists_saved_cards() {
    let app = test_app();

    let body = body_string(
        handle(get_with_cookie("/wishlist", "wishlist=10|3"), &app).expect("Handler failed"),
    );

    assert!(body.contains("2 saved"));
    let first = body.find("id=\"card-3\"").unwrap();
    let second = body.find("id=\"card-10\"").unwrap();
    assert!(first < second, "wishlist should follow store order");
}

#[test]
fn empty_wishlist_page_shows_hint() {
    let body = body_string(handle(get("/wishlist"), &test_app()).expect("Handler failed"));
    assert!(body.contains("No saved stays yet"));
}

#[test]
fn toggle_never_redirects_off_site() {
    for referer in ["https://evil.example/phish", "//evil.example/phish"] {
        let req = http::Request::builder()
            .method(Method::POST)
            .uri("/wishlist/3/toggle")
            .header("Referer", referer)
            .body(Body::empty())
            .unwrap();

        let resp = handle(req, &test_app()).expect("Handler failed");
        assert_eq!(resp.status(), 303);
        assert_eq!(
            resp.headers().get("Location").unwrap().to_str().unwrap(),
            "/",
            "followed {referer:?}"
        );
    }
}

#[test]
fn wishlist_page_hearts_post_without_htmx() {
    let app = test_app();

    let saved = body_string(
        handle(get_with_cookie("/wishlist", "wishlist=1"), &app).expect("Handler failed"),
    );
    assert!(saved.contains("action=\"/wishlist/1/toggle\""));
    assert!(!saved.contains("hx-post="));
    assert!(saved.contains("/cards/1?image=0&amp;nav=next&amp;inline=0"));

    // A stepped card keeps posting plainly.
    let stepped = body_string(
        handle(
            get_with_cookie("/cards/1?image=0&nav=next&inline=0", "wishlist=1"),
            &app,
        )
        .expect("Handler failed"),
    );
    assert!(!stepped.contains("hx-post="));

    let home = body_string(handle(get("/"), &app).expect("Handler failed"));
    assert!(home.contains("hx-post=\"/wishlist/1/toggle\""));
}
