pub mod booking;
pub mod carousel;
pub mod filter;
pub mod listing;
pub mod loading;
pub mod store;
pub mod wishlist;

pub use carousel::{Carousel, CarouselAction};
pub use filter::{filter, FilterCriteria, PriceRange};
pub use listing::{Listing, PropertyKind};
pub use store::ListingStore;
pub use wishlist::Wishlist;
