// src/tests/router_tests/search_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

fn search(uri: &str) -> String {
    let resp = handle(get(uri), &test_app()).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

/// Card DOM ids in the order they appear in the page.
fn card_order(body: &str) -> Vec<String> {
    body.match_indices("id=\"card-")
        .map(|(at, m)| {
            let rest = &body[at + m.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn default_criteria_show_everything_in_store_order() {
    let app = test_app();
    let body = search("/search");

    assert!(body.contains("Search results"));
    assert!(body.contains(&format!("{} stays", app.store.len())));

    let expected: Vec<String> = app.store.all().iter().map(|l| l.id.clone()).collect();
    assert_eq!(card_order(&body), expected);
}

#[test]
fn price_window_keeps_store_order() {
    let body = search("/search?min=100&max=200");

    assert!(body.contains("5 stays"));
    assert_eq!(card_order(&body), vec!["1", "2", "5", "9", "10"]);
}

#[test]
fn reversed_price_bounds_are_swapped() {
    let body = search("/search?min=200&max=100");
    assert_eq!(card_order(&body), vec!["1", "2", "5", "9", "10"]);
}

#[test]
fn type_selection_filters_results() {
    let body = search("/search?type=Entire+loft&type=Shared+room");
    assert_eq!(card_order(&body), vec!["2", "9", "10"]);
}

#[test]
fn unknown_type_labels_are_ignored() {
    let app = test_app();
    let body = search("/search?type=Igloo");
    assert_eq!(card_order(&body).len(), app.store.len());
}

#[test]
fn empty_result_shows_fallback() {
    let body = search("/search?min=900&max=1000");

    assert!(body.contains("0 stays"));
    assert!(body.contains("No results found"));
    assert!(card_order(&body).is_empty());
}

#[test]
fn query_falls_back_to_location() {
    let body = search("/search?location=Miami");
    assert!(body.contains("Stays in &quot;Miami&quot;"));

    let body = search("/search?q=&location=Aspen");
    assert!(body.contains("Stays in &quot;Aspen&quot;"));
}

#[test]
fn q_takes_precedence_over_location() {
    let body = search("/search?q=Boston&location=Miami");
    assert!(body.contains("Stays in &quot;Boston&quot;"));
    assert!(!body.contains("Stays in &quot;Miami&quot;"));
}

#[test]
fn filter_sidebar_only_when_requested() {
    let hidden = search("/search?q=Boston");
    assert!(!hidden.contains("Property type"));

    let shown = search("/search?q=Boston&filters=1&type=Private+room&min=50&max=300");
    assert!(shown.contains("Property type"));
    assert!(shown.contains("Clear all"));
    assert!(shown.contains("value=\"Private room\" checked"));
    assert!(shown.contains("name=\"min\" min=\"0\" step=\"10\" value=\"50\""));
}

#[test]
fn clear_all_drops_criteria_but_keeps_query() {
    let body = search("/search?q=New+York&filters=1&min=150");
    assert!(body.contains("href=\"/search?q=New+York&amp;filters=1\""));
}

#[test]
fn filters_toggle_keeps_active_criteria() {
    let open = search("/search?q=Boston&filters=1&min=150&max=200&type=Entire+loft");
    assert!(open.contains(
        "href=\"/search?q=Boston&amp;min=150&amp;max=200&amp;type=Entire+loft\" class=\"btn\""
    ));

    let closed = search("/search?q=Boston&min=150&max=200&type=Entire+loft");
    assert!(closed.contains(
        "href=\"/search?q=Boston&amp;min=150&amp;max=200&amp;type=Entire+loft&amp;filters=1\""
    ));
    assert_eq!(card_order(&closed), vec!["2", "9"]);
}
