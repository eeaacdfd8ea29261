// src/auth/gate.rs

use crate::auth::state::AuthState;
use crate::auth::{AuthSource, Subscription};
use std::sync::{Arc, RwLock};

/// Latest auth snapshot, read by the request handlers.
///
/// Only the subscription callback writes to it. Starts out loading so the
/// first render is gated until a source reports in.
#[derive(Clone, Default)]
pub struct AuthGate {
    latest: Arc<RwLock<AuthState>>,
}

impl AuthGate {
    /// Start following `source`. Keep the subscription alive for as long
    /// as the gate should track it.
    pub fn follow<S: AuthSource>(&self, source: &S) -> Subscription {
        let latest = Arc::clone(&self.latest);
        source.subscribe(Box::new(move |state: &AuthState| {
            match latest.write() {
                Ok(mut slot) => *slot = state.clone(),
                Err(_) => tracing::error!("auth gate lock poisoned; snapshot dropped"),
            }
        }))
    }

    pub fn snapshot(&self) -> AuthState {
        self.latest
            .read()
            .map(|s| s.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// A gate pinned to a fixed snapshot.
    pub fn fixed(state: AuthState) -> Self {
        Self {
            latest: Arc::new(RwLock::new(state)),
        }
    }
}
