//! File-backed store.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{KeyValueStore, StoreError};

/// Store that keeps every key in one JSON document on disk.
///
/// The whole document is rewritten on each change. The in-memory view is
/// only updated after the write succeeds, so a failed write leaves both
/// the file and the view unchanged.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
    reset: Option<String>,
}

impl FileStore {
    /// Open a store at `path`, starting empty if the file doesn't exist yet.
    ///
    /// A document that isn't a JSON object of strings is discarded: the
    /// store opens empty, [`was_reset`](Self::was_reset) reports it, and
    /// the next write replaces the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let mut reset = None;
        let entries = if path.exists() {
            let content = std::fs::read(&path)?;
            if content.iter().all(u8::is_ascii_whitespace) {
                BTreeMap::new()
            } else {
                match serde_json::from_slice(&content) {
                    Ok(entries) => entries,
                    Err(e) => {
                        reset = Some(e.to_string());
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: RefCell::new(entries),
            reset,
        })
    }

    /// Whether the file held unreadable data that was discarded on open.
    pub fn was_reset(&self) -> bool {
        self.reset.is_some()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut next = self.entries.borrow().clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if !self.entries.borrow().contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.borrow().clone();
        next.remove(key);
        self.write(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }

    fn reset_reason(&self) -> Option<String> {
        self.reset.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("trendify_cart").unwrap(), None);
        store.set("trendify_cart", r#"{"1":2}"#).unwrap();
        store.set("trendify_wishlist", "[3]").unwrap();
        store.remove("trendify_wishlist").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("trendify_cart").unwrap().as_deref(),
            Some(r#"{"1":2}"#)
        );
        assert_eq!(reopened.get("trendify_wishlist").unwrap(), None);
    }

    #[test]
    fn test_empty_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_opens_empty_and_is_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{truncated").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.was_reset());
        assert!(store.reset_reason().is_some());
        assert_eq!(store.get("trendify_cart").unwrap(), None);

        store.set("trendify_cart", r#"{"2":1}"#).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert!(!reopened.was_reset());
        assert_eq!(
            reopened.get("trendify_cart").unwrap().as_deref(),
            Some(r#"{"2":1}"#)
        );
    }

    #[test]
    fn test_non_utf8_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.was_reset());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("storage.json");

        let store = FileStore::open(&path).unwrap();
        assert!(matches!(store.set("k", "v"), Err(StoreError::Io(_))));
        assert_eq!(store.get("k").unwrap(), None);
    }
}
