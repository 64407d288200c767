//! Shopping cart and wishlist.
//!
//! `Cart` and `Wishlist` hold state, the functions in `effects` describe
//! transitions, and `CartManager` ties them to storage and display.

mod cart;
pub mod effects;
mod manager;
mod surface;
mod wishlist;

pub use cart::{Cart, CartLineItem};
pub use effects::{BadgeUpdate, Collection, Effect, Notification, NotificationKind, Transition};
pub use manager::CartManager;
pub use surface::{BadgeSurface, NotificationSurface};
pub use wishlist::Wishlist;
