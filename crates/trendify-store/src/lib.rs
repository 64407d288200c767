//! Key-value persistence for the Trendify storefront.
//!
//! The storefront keeps its cart and wishlist under two string keys. Any
//! backend that can get, set and remove strings by key can hold them:
//!
//! ```rust
//! use trendify_store::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set_json("trendify_wishlist", &vec![3u32, 1]).unwrap();
//!
//! let wishlist: Option<Vec<u32>> = store.get_json("trendify_wishlist").unwrap();
//! assert_eq!(wishlist, Some(vec![3, 1]));
//! ```

mod error;
mod file;
mod kv;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, KeyValueStore, MemoryStore, StoreError};
}
