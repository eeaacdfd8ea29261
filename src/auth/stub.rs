// src/auth/stub.rs

use crate::auth::state::AuthState;
use crate::auth::{AuthCallback, AuthSource, Subscription};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};

#[derive(Default)]
struct Inner {
    current: AuthState,
    next_id: u64,
    listeners: BTreeMap<u64, Arc<AuthCallback>>,
}

/// In-process stand-in for a hosted auth client.
///
/// Delivers its current snapshot synchronously on subscribe; `publish`
/// pushes a new snapshot to every live subscriber.
#[derive(Clone, Default)]
pub struct StubAuthClient {
    inner: Arc<Mutex<Inner>>,
}

impl StubAuthClient {
    pub fn new(initial: AuthState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                current: initial,
                ..Inner::default()
            })),
        }
    }

    pub fn publish(&self, state: AuthState) {
        // Callbacks run outside the lock so they may subscribe or unsubscribe.
        let listeners: Vec<Arc<AuthCallback>> = {
            let Ok(mut inner) = self.inner.lock() else {
                tracing::error!("auth stub lock poisoned; dropping snapshot");
                return;
            };
            inner.current = state.clone();
            inner.listeners.values().cloned().collect()
        };

        tracing::debug!(
            "auth snapshot: signed_in={} loading={} listeners={}",
            state.is_signed_in(),
            state.is_loading,
            listeners.len()
        );

        for listener in listeners {
            listener(&state);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.listeners.len()).unwrap_or(0)
    }
}

impl AuthSource for StubAuthClient {
    fn subscribe(&self, callback: Box<AuthCallback>) -> Subscription {
        let callback: Arc<AuthCallback> = Arc::from(callback);

        let registered = match self.inner.lock() {
            Ok(mut inner) => {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.listeners.insert(id, Arc::clone(&callback));
                Some((id, inner.current.clone()))
            }
            Err(_) => None,
        };

        let Some((id, snapshot)) = registered else {
            tracing::error!("auth stub lock poisoned; subscription inert");
            return Subscription::inert();
        };

        callback(&snapshot);

        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                if let Ok(mut inner) = inner.lock() {
                    inner.listeners.remove(&id);
                }
            }
        })
    }
}
