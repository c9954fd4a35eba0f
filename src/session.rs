//! Session
//!
//! Holds the bearer token behind a small key-value storage interface so the
//! browser's localStorage can be swapped for an in-memory map in tests.

use std::sync::Arc;

use gloo_storage::{LocalStorage, Storage};
use tracing::{info, warn};

use crate::config::TOKEN_KEY;

/// Minimal string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, storing raw strings (not JSON-encoded)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            warn!("Failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[cfg(test)]
pub use memory::MemoryStore;


/// Credential store: the opaque bearer token of the current user
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn set(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
        info!("Session token stored");
    }

    /// Current token; an empty stored value counts as absent
    pub fn get(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        info!("Session token cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    /// `Authorization` header value for the current token
    pub fn authorization(&self) -> Option<String> {
        self.get().map(|token| format!("Bearer {}", token))
    }
}
