//! Catalog and cart/wishlist state for the Trendify storefront.
//!
//! - **Catalog**: the fixed product list with lookup, filtering, search and sorting
//! - **Cart**: quantities per product, wishlist, and the manager that persists them
//! - **Config**: storage keys, notification and logging settings
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use trendify_commerce::prelude::*;
//! use trendify_store::MemoryStore;
//!
//! let catalog = Arc::new(Catalog::storefront());
//! let config = StorefrontConfig::default();
//! let logger = config.logger("cart");
//! let mut manager = CartManager::load(catalog, MemoryStore::new(), &config, logger);
//!
//! manager.add_to_cart(ProductId::new(1), 2);
//! assert_eq!(manager.cart_count(), 2);
//! assert_eq!(manager.cart_total().unwrap().major(), 998);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod config;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StorefrontConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategorySummary, Product, SortOption};

    // Cart
    pub use crate::cart::{
        BadgeSurface, BadgeUpdate, Cart, CartLineItem, CartManager, Notification,
        NotificationKind, NotificationSurface, Wishlist,
    };
}
