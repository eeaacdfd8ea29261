use crate::app::App;
use crate::auth::{AuthGate, AuthState, User};
use crate::domain::ListingStore;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// App over the bundled seed with a settled, signed-out auth state.
pub fn test_app() -> App {
    app_with_auth(AuthState::resolved(None))
}

pub fn app_with_auth(state: AuthState) -> App {
    let store = ListingStore::seeded().unwrap_or_else(|e| panic!("seed failed: {e}"));
    App::new(store, AuthGate::fixed(state), 5)
}

pub fn signed_in_user() -> User {
    User {
        id: "u-1".to_string(),
        display_name: "Jordan".to_string(),
        email: "jordan@example.com".to_string(),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Image URLs carry `&`, which maud escapes in attributes.
pub fn escaped(raw: &str) -> String {
    raw.replace('&', "&amp;")
}
