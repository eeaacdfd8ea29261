// src/domain/listing.rs

use serde::Deserialize;
use std::fmt;

/// The fixed set of property-type labels a listing can carry.
/// Serialized as the human label so the seed file reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum PropertyKind {
    #[serde(rename = "Entire apartment")]
    EntireApartment,
    #[serde(rename = "Entire house")]
    EntireHouse,
    #[serde(rename = "Entire loft")]
    EntireLoft,
    #[serde(rename = "Entire studio")]
    EntireStudio,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
}

impl PropertyKind {
    /// Display order used by the search filter sidebar.
    pub const ALL: [PropertyKind; 6] = [
        PropertyKind::EntireApartment,
        PropertyKind::EntireHouse,
        PropertyKind::EntireLoft,
        PropertyKind::EntireStudio,
        PropertyKind::PrivateRoom,
        PropertyKind::SharedRoom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::EntireApartment => "Entire apartment",
            PropertyKind::EntireHouse => "Entire house",
            PropertyKind::EntireLoft => "Entire loft",
            PropertyKind::EntireStudio => "Entire studio",
            PropertyKind::PrivateRoom => "Private room",
            PropertyKind::SharedRoom => "Shared room",
        }
    }

    /// Exact-label lookup. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Host {
    pub name: String,
    pub avatar: String,
    /// Free-form, e.g. "Joined in March 2019".
    pub joined: String,
    #[serde(default)]
    pub is_superhost: bool,
}

impl Host {
    /// First character of the name, used when the avatar fails to load.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// A single rentable property. Immutable once the store is seeded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Nightly price in whole dollars.
    pub price: u32,
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub host: Host,
    pub guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
}

impl Listing {
    pub fn is_superhost(&self) -> bool {
        self.host.is_superhost
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Image at `index`, falling back to the cover image.
    pub fn image(&self, index: usize) -> &str {
        self.images
            .get(index)
            .or_else(|| self.images.first())
            .map(String::as_str)
            .unwrap_or_default()
    }
}
