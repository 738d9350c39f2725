//! Tab-scoped durable key/value storage behind a small trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists `authData`/`userData` through [`SessionStorage`]
//! so the same code runs against `window.sessionStorage` in the browser and
//! against [`MemoryStorage`] in native tests. Values are whole JSON blobs;
//! there are no partial-field updates.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Minimal synchronous key/value store. Single-key reads and writes are atomic.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

/// Load and decode a JSON value. Absent and malformed entries both yield `None`;
/// malformed ones are logged.
pub fn load_json<T: DeserializeOwned>(storage: &impl SessionStorage, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed {key} in session storage: {e}");
            None
        }
    }
}

/// Encode and store a JSON value.
///
/// # Errors
///
/// Returns a [`StorageError`] if encoding fails or the write is rejected.
pub fn save_json<T: Serialize>(storage: &impl SessionStorage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| StorageError::Write { key: key.to_owned(), reason: e.to_string() })?;
    storage.set_item(key, &raw)
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local storage. Clones share the same map, so a second store built
/// from a clone observes what the first one wrote (a simulated reload).
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.sessionStorage`. Native builds read nothing and reject writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
