// src/domain/loading.rs

use std::sync::atomic::{AtomicBool, Ordering};

/// Page-level "loading" flag.
#[derive(Debug, Default)]
pub struct LoadingFlag(AtomicBool);

impl LoadingFlag {
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Sets the flag until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        LoadingGuard { flag: self }
    }
}

/// Clears the flag on every exit path, including early returns and panics.
pub struct LoadingGuard<'a> {
    flag: &'a LoadingFlag,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.0.store(false, Ordering::SeqCst);
    }
}

/// Runs a data load under `flag`. Failures are logged and become `None`.
pub fn load_logged<T, E, F>(flag: &LoadingFlag, what: &str, load: F) -> Option<T>
where
    E: std::fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    let _guard = flag.begin();
    match load() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Error loading {what}: {e}");
            None
        }
    }
}
