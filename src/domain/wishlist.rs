// src/domain/wishlist.rs

use std::collections::BTreeSet;
use url::form_urlencoded;

pub const COOKIE_NAME: &str = "wishlist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistAction {
    Toggle(String),
}

/// Listing ids the visitor has favorited.
///
/// Owned by the request handler; templates only see `&Wishlist` and ask for
/// changes through the toggle route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: BTreeSet<String>,
}

impl Wishlist {
    /// Reducer: old state + action -> new state.
    pub fn apply(mut self, action: WishlistAction) -> Self {
        match action {
            WishlistAction::Toggle(id) => {
                if !self.ids.remove(&id) {
                    self.ids.insert(id);
                }
            }
        }
        self
    }

    pub fn toggle(self, id: &str) -> Self {
        self.apply(WishlistAction::Toggle(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Cookie value: percent-encoded ids joined by `|`
    pub fn to_cookie_value(&self) -> String {
        self.ids
            .iter()
            .map(|id| form_urlencoded::byte_serialize(id.as_bytes()).collect::<String>())
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn from_cookie_value(value: &str) -> Self {
        let ids = value
            .split('|')
            .filter(|part| !part.is_empty())
            .map(|part| {
                form_urlencoded::parse(format!("id={part}").as_bytes())
                    .next()
                    .map(|(_, v)| v.into_owned())
                    .unwrap_or_default()
            })
            .filter(|id| !id.is_empty())
            .collect();
        Self { ids }
    }

    /// Pull the wishlist out of a raw `Cookie` header. Missing cookie = empty.
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        header
            .into_iter()
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .map(|(_, value)| Self::from_cookie_value(value))
            .unwrap_or_default()
    }

    /// A full `Set-Cookie` header value for this state.
    pub fn set_cookie_header(&self) -> String {
        if self.is_empty() {
            format!("{COOKIE_NAME}=; Path=/; Max-Age=0; SameSite=Lax")
        } else {
            format!(
                "{COOKIE_NAME}={}; Path=/; Max-Age=31536000; SameSite=Lax",
                self.to_cookie_value()
            )
        }
    }
}
