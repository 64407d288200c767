//! Cart and wishlist manager backed by a key-value store.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use trendify_observability::StructuredLogger;
use trendify_store::KeyValueStore;

use crate::cart::effects;
use crate::cart::{
    BadgeSurface, BadgeUpdate, Cart, CartLineItem, Collection, Effect, Notification,
    NotificationSurface, Transition, Wishlist,
};
use crate::catalog::{Catalog, Product};
use crate::config::{NotificationConfig, StorageConfig, StorefrontConfig};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Owns the shopper's cart and wishlist for one session.
///
/// Every mutation writes the whole collection back to the store. Store
/// failures are logged and otherwise ignored: the in-memory change stands
/// for the rest of the session.
pub struct CartManager<S: KeyValueStore> {
    catalog: Arc<Catalog>,
    store: S,
    storage: StorageConfig,
    notifications: NotificationConfig,
    logger: StructuredLogger,
    cart: Cart,
    wishlist: Wishlist,
    badge: Option<Box<dyn BadgeSurface>>,
    notifier: Option<Box<dyn NotificationSurface>>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Load the cart and wishlist from `store`.
    ///
    /// Missing, unreadable or malformed values start out empty.
    pub fn load(
        catalog: Arc<Catalog>,
        store: S,
        config: &StorefrontConfig,
        logger: StructuredLogger,
    ) -> Self {
        if let Some(reason) = store.reset_reason() {
            logger
                .warn_builder("discarded unreadable storage")
                .field("error", reason)
                .emit();
        }

        let cart: Cart = load_collection(&store, &config.storage.cart_key, &logger);
        let wishlist: Wishlist = load_collection(&store, &config.storage.wishlist_key, &logger);

        logger
            .debug_builder("loaded cart state")
            .field_i64("cart_products", cart.len() as i64)
            .field_i64("wishlist_products", wishlist.len() as i64)
            .emit();

        Self {
            catalog,
            store,
            storage: config.storage.clone(),
            notifications: config.notifications.clone(),
            logger,
            cart,
            wishlist,
            badge: None,
            notifier: None,
        }
    }

    /// Attach the cart count badge and show the current count on it.
    pub fn with_badge(mut self, badge: impl BadgeSurface + 'static) -> Self {
        let mut badge: Box<dyn BadgeSurface> = Box::new(badge);
        badge.show_count(BadgeUpdate::for_count(self.cart.count()));
        self.badge = Some(badge);
        self
    }

    /// Attach the notification surface.
    pub fn with_notifier(mut self, notifier: impl NotificationSurface + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Add `quantity` of a product, returning its new quantity.
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32) -> u32 {
        let transition = effects::add_to_cart(&mut self.cart, id, quantity);
        self.run(transition)
    }

    /// Remove a product from the cart. Absent products are not an error.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let transition = effects::remove_from_cart(&mut self.cart, id);
        self.run(transition)
    }

    /// Overwrite a product's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> u32 {
        let transition = effects::set_quantity(&mut self.cart, id, quantity);
        self.run(transition)
    }

    pub fn clear_cart(&mut self) {
        let transition = effects::clear_cart(&mut self.cart);
        self.run(transition)
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart entries joined with catalog products; unknown products are skipped.
    pub fn cart_items(&self) -> Result<Vec<CartLineItem>, CommerceError> {
        self.cart.line_items(&self.catalog)
    }

    /// Sum of line totals.
    pub fn cart_total(&self) -> Result<Money, CommerceError> {
        self.cart.total(&self.catalog)
    }

    /// Total units in the cart.
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    /// Add a product to the wishlist. Returns false if it was already there.
    pub fn add_to_wishlist(&mut self, id: ProductId) -> bool {
        let transition = effects::add_to_wishlist(&mut self.wishlist, id);
        self.run(transition)
    }

    pub fn remove_from_wishlist(&mut self, id: ProductId) {
        let transition = effects::remove_from_wishlist(&mut self.wishlist, id);
        self.run(transition)
    }

    /// Add or remove a product, returning whether it is wishlisted afterwards.
    pub fn toggle_wishlist(&mut self, id: ProductId) -> bool {
        let transition = effects::toggle_wishlist(&mut self.wishlist, id);
        self.run(transition)
    }

    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// Wishlisted products in the order they were added.
    pub fn wishlist(&self) -> Vec<&Product> {
        self.wishlist.products(&self.catalog)
    }

    /// Raw wishlist ids, including any the catalog no longer has.
    pub fn wishlist_ids(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn run<T>(&mut self, transition: Transition<T>) -> T {
        for effect in transition.effects {
            match effect {
                Effect::Persist(collection) => self.persist(collection),
                Effect::RefreshBadge(update) => {
                    if let Some(badge) = self.badge.as_mut() {
                        badge.show_count(update);
                    }
                }
                Effect::Notify(notification) => self.notify(&notification),
            }
        }
        transition.value
    }

    fn persist(&self, collection: Collection) {
        let result = match collection {
            Collection::Cart => self.write(&self.storage.cart_key, &self.cart),
            Collection::Wishlist => self.write(&self.storage.wishlist_key, &self.wishlist),
        };

        if let Err(e) = result {
            let key = match collection {
                Collection::Cart => &self.storage.cart_key,
                Collection::Wishlist => &self.storage.wishlist_key,
            };
            self.logger
                .error_builder("failed to persist state")
                .field("key", key.as_str())
                .field("error", e.to_string())
                .emit();
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CommerceError> {
        self.store.set_json(key, value)?;
        Ok(())
    }

    fn notify(&mut self, notification: &Notification) {
        if !self.notifications.enabled {
            return;
        }
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.notify(
                notification,
                Duration::from_millis(self.notifications.duration_ms),
            );
        }
    }
}

/// Read one collection, falling back to empty on any problem.
fn load_collection<S, T>(store: &S, key: &str, logger: &StructuredLogger) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            logger
                .error_builder("failed to read stored state")
                .field("key", key)
                .field("error", e.to_string())
                .emit();
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            logger
                .warn_builder("discarding malformed stored state")
                .field("key", key)
                .field("error", e.to_string())
                .emit();
            T::default()
        }
    }
}
