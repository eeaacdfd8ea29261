pub mod gate;
pub mod state;
pub mod stub;

pub use gate::AuthGate;
pub use state::{AuthState, User};
pub use stub::StubAuthClient;

pub type AuthCallback = dyn Fn(&AuthState) + Send + Sync;

/// Something that reports sign-in state over time.
///
/// Implementations may deliver zero or more snapshots, the first either
/// inside `subscribe` or later. Delivery stops once the returned
/// [`Subscription`] is dropped or unsubscribed.
pub trait AuthSource {
    fn subscribe(&self, callback: Box<AuthCallback>) -> Subscription;
}

/// Handle returned by [`AuthSource::subscribe`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never registered.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
