// src/domain/store.rs

use crate::domain::listing::Listing;
use crate::domain::wishlist::Wishlist;
use crate::errors::ServerError;
use std::collections::HashSet;

const SEED_JSON: &str = include_str!("../../data/listings.json");

/// The ordered, read-only set of listings the site browses.
/// Seeded once at startup and shared between worker threads.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    /// Seed from the bundled mock dataset.
    pub fn seeded() -> Result<Self, ServerError> {
        Self::from_json(SEED_JSON)
    }

    /// Parse and validate a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let listings: Vec<Listing> = serde_json::from_str(json)
            .map_err(|e| ServerError::Seed(format!("invalid listing JSON: {e}")))?;
        Self::from_listings(listings)
    }

    /// Validates: unique ids, at least one image, rating within [0, 5].
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();

        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(ServerError::Seed(format!(
                    "duplicate listing id '{}'",
                    listing.id
                )));
            }
            if listing.images.is_empty() {
                return Err(ServerError::Seed(format!(
                    "listing '{}' has no images",
                    listing.id
                )));
            }
            if !(0.0..=5.0).contains(&listing.rating) {
                return Err(ServerError::Seed(format!(
                    "listing '{}' has rating {} outside [0, 5]",
                    listing.id, listing.rating
                )));
            }
        }

        Ok(Self { listings })
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Wishlisted listings in store order. Ids with no listing are skipped.
    pub fn wishlisted<'a>(&'a self, wishlist: &'a Wishlist) -> impl Iterator<Item = &'a Listing> {
        self.listings.iter().filter(move |l| wishlist.contains(&l.id))
    }
}
