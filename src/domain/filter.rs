// src/domain/filter.rs

use crate::domain::listing::{Listing, PropertyKind};
use std::collections::BTreeSet;

pub const DEFAULT_MIN_PRICE: u32 = 0;
pub const DEFAULT_MAX_PRICE: u32 = 500;

/// Inclusive nightly price bounds. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Reversed bounds are swapped rather than rejected.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(0, u32::MAX)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub selected_types: BTreeSet<PropertyKind>,
}

impl FilterCriteria {
    /// Matches everything.
    pub fn any() -> Self {
        Self {
            price_range: PriceRange::unbounded(),
            selected_types: BTreeSet::new(),
        }
    }

    /// Builds criteria from decoded query pairs (`min`, `max`, repeated `type`).
    /// Malformed prices fall back to the defaults and unknown labels are dropped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut min = DEFAULT_MIN_PRICE;
        let mut max = DEFAULT_MAX_PRICE;
        let mut selected_types = BTreeSet::new();

        for (key, value) in pairs {
            match key {
                "min" => min = value.trim().parse().unwrap_or(DEFAULT_MIN_PRICE),
                "max" => max = value.trim().parse().unwrap_or(DEFAULT_MAX_PRICE),
                "type" => {
                    if let Some(kind) = PropertyKind::from_label(value) {
                        selected_types.insert(kind);
                    }
                }
                _ => {}
            }
        }

        Self {
            price_range: PriceRange::new(min, max),
            selected_types,
        }
    }

    /// Inverse of `from_pairs`: the query pairs that rebuild these criteria.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("min", self.price_range.min().to_string()),
            ("max", self.price_range.max().to_string()),
        ];
        pairs.extend(
            self.selected_types
                .iter()
                .map(|kind| ("type", kind.label().to_string())),
        );
        pairs
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let matches_price = self.price_range.contains(listing.price);
        let matches_type =
            self.selected_types.is_empty() || self.selected_types.contains(&listing.kind);
        matches_price && matches_type
    }
}

/// The order-preserving subsequence of `listings` that satisfies `criteria`.
pub fn filter<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings.iter().filter(|l| criteria.matches(l)).collect()
}
