// src/paths.rs
//! URL building for listing routes. Ids are opaque, so they are always
//! percent-encoded when they land in a path segment or query string.

use url::form_urlencoded;

/// Path segments take `%20` for spaces; `+` is a literal there.
pub fn encode_segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn decode_segment(encoded: &str) -> String {
    let literal_plus = encoded.replace('+', "%2B");
    form_urlencoded::parse(format!("v={literal_plus}").as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

pub fn property_path(id: &str) -> String {
    format!("/property/{}", encode_segment(id))
}

pub fn property_image_path(id: &str, image: usize) -> String {
    format!("{}?image={image}", property_path(id))
}

pub fn property_nav_path(id: &str, image: usize, nav: &str) -> String {
    format!("{}?image={image}&nav={nav}", property_path(id))
}

pub fn card_nav_path(id: &str, image: usize, nav: &str) -> String {
    format!("/cards/{}?image={image}&nav={nav}", encode_segment(id))
}

pub fn wishlist_toggle_path(id: &str) -> String {
    format!("/wishlist/{}/toggle", encode_segment(id))
}

/// Where to send the browser after a plain form post. Only same-origin
/// relative paths are followed; anything else lands on `/`.
pub fn safe_back_path(referer: Option<&str>) -> &str {
    match referer {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

/// DOM id of a card, stable across fragment swaps.
pub fn card_dom_id(id: &str) -> String {
    let safe: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("card-{safe}")
}

pub fn search_path(pairs: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter())
        .finish();
    if query.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{query}")
    }
}
