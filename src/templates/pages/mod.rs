pub mod error;
pub mod home;
pub mod loading;
pub mod property;
pub mod search;
pub mod wishlist;

pub use error::error_page;
pub use home::home_page;
pub use loading::loading_page;
pub use property::{property_not_found_page, property_page, PropertyVm};
pub use search::{search_page, SearchVm};
pub use wishlist::wishlist_page;
