//! State transitions and the side effects they request.
//!
//! Transitions mutate a `Cart` or `Wishlist` and describe what should happen
//! next (persist, refresh the badge, notify) without doing it. `CartManager`
//! executes the effects, so everything here can be tested without storage
//! or a display.

use serde::Serialize;

use crate::cart::{Cart, Wishlist};
use crate::ids::ProductId;

/// Which persisted collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Cart,
    Wishlist,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Accent colour for the toast background.
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Warning => "#f59e0b",
            NotificationKind::Info => "#6366f1",
        }
    }
}

/// A transient message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Info,
        }
    }
}

/// State of the cart count badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeUpdate {
    pub count: u64,
    /// The badge is hidden when the cart is empty.
    pub visible: bool,
}

impl BadgeUpdate {
    pub fn for_count(count: u64) -> Self {
        Self {
            count,
            visible: count > 0,
        }
    }
}

/// A side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the whole collection back to storage.
    Persist(Collection),
    /// Show the new cart count.
    RefreshBadge(BadgeUpdate),
    /// Show a notification.
    Notify(Notification),
}

/// Result of a transition: a return value plus effects to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    pub value: T,
    pub effects: Vec<Effect>,
}

impl<T> Transition<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            effects: Vec::new(),
        }
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Change the value, keeping the effects.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Transition<U> {
        Transition {
            value: f(self.value),
            effects: self.effects,
        }
    }
}

pub const ADDED_TO_CART: &str = "Product added to cart!";
pub const REMOVED_FROM_CART: &str = "Product removed from cart!";
pub const CART_CLEARED: &str = "Cart cleared!";
pub const ADDED_TO_WISHLIST: &str = "Added to wishlist!";
pub const REMOVED_FROM_WISHLIST: &str = "Removed from wishlist!";

fn cart_changed<T>(transition: Transition<T>, cart: &Cart) -> Transition<T> {
    transition
        .with(Effect::Persist(Collection::Cart))
        .with(Effect::RefreshBadge(BadgeUpdate::for_count(cart.count())))
}

/// Add to the cart; the value is the product's new quantity.
pub fn add_to_cart(cart: &mut Cart, id: ProductId, quantity: u32) -> Transition<u32> {
    let new_quantity = cart.add(id, quantity);
    cart_changed(Transition::new(new_quantity), cart)
        .with(Effect::Notify(Notification::success(ADDED_TO_CART)))
}

/// Remove from the cart. Runs the full effect list even if the product was absent.
pub fn remove_from_cart(cart: &mut Cart, id: ProductId) -> Transition<()> {
    cart.remove(id);
    cart_changed(Transition::new(()), cart)
        .with(Effect::Notify(Notification::info(REMOVED_FROM_CART)))
}

/// Overwrite a quantity; zero or less behaves as `remove_from_cart`.
pub fn set_quantity(cart: &mut Cart, id: ProductId, quantity: i64) -> Transition<u32> {
    if quantity <= 0 {
        return remove_from_cart(cart, id).map(|()| 0);
    }
    let stored = cart.set_quantity(id, quantity);
    cart_changed(Transition::new(stored), cart)
}

pub fn clear_cart(cart: &mut Cart) -> Transition<()> {
    cart.clear();
    cart_changed(Transition::new(()), cart)
        .with(Effect::Notify(Notification::info(CART_CLEARED)))
}

/// Add to the wishlist; false, with no effects, if already present.
pub fn add_to_wishlist(wishlist: &mut Wishlist, id: ProductId) -> Transition<bool> {
    if !wishlist.insert(id) {
        return Transition::new(false);
    }
    Transition::new(true)
        .with(Effect::Persist(Collection::Wishlist))
        .with(Effect::Notify(Notification::success(ADDED_TO_WISHLIST)))
}

pub fn remove_from_wishlist(wishlist: &mut Wishlist, id: ProductId) -> Transition<()> {
    wishlist.remove(id);
    Transition::new(())
        .with(Effect::Persist(Collection::Wishlist))
        .with(Effect::Notify(Notification::info(REMOVED_FROM_WISHLIST)))
}

/// Flip membership; the value is whether the product is wishlisted afterwards.
pub fn toggle_wishlist(wishlist: &mut Wishlist, id: ProductId) -> Transition<bool> {
    if wishlist.contains(id) {
        remove_from_wishlist(wishlist, id).map(|()| false)
    } else {
        add_to_wishlist(wishlist, id)
    }
}
