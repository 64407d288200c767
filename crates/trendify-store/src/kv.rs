//! Key-value store trait and the in-memory backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::StoreError;

/// A string-keyed store of opaque string values.
///
/// Mirrors the browser's local storage: values are whole serialized blobs
/// and every write replaces the previous value for the key.
pub trait KeyValueStore {
    /// Get the raw value for a key, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value for a key.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Why previously saved data was discarded when the store was opened,
    /// if it was.
    fn reset_reason(&self) -> Option<String> {
        None
    }

    /// Get and deserialize a JSON value.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize a value as JSON and store it.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryInner {
    fn check_enabled(&self) -> Result<(), StoreError> {
        if self.disabled {
            return Err(StoreError::Unavailable("storage is disabled".to_string()));
        }
        Ok(())
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

/// In-memory store.
///
/// Clones share the same underlying map, which lets a test hand one handle
/// to a manager and inspect or reload through another. A byte quota and a
/// disabled switch reproduce the failures real browser storage throws.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    /// Create an empty, unlimited store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once keys and values exceed `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().quota = Some(limit);
        store
    }

    /// Create a store on which every operation fails.
    pub fn disabled() -> Self {
        let store = Self::new();
        store.set_disabled(true);
        store
    }

    /// Turn failure mode on or off.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.inner.borrow().entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self.inner.borrow();
        inner.check_enabled()?;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.check_enabled()?;

        if let Some(limit) = inner.quota {
            let needed = inner.used_bytes_without(key) + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.check_enabled()?;
        inner.entries.remove(key);
        Ok(())
    }
}
