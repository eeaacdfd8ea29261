// src/app.rs
use crate::auth::AuthGate;
use crate::domain::ListingStore;
use std::sync::Arc;

/// Everything a request handler may read. Shared by all worker threads;
/// nothing in here is mutated by a request.
#[derive(Clone)]
pub struct App {
    pub store: Arc<ListingStore>,
    pub auth: AuthGate,
    /// Stay length for the booking estimate.
    pub nights: u32,
}

impl App {
    pub fn new(store: ListingStore, auth: AuthGate, nights: u32) -> Self {
        Self {
            store: Arc::new(store),
            auth,
            nights,
        }
    }
}
