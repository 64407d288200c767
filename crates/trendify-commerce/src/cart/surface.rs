//! Display collaborators driven by the cart manager.

use std::time::Duration;

use crate::cart::{BadgeUpdate, Notification};

/// The cart count badge in the page header.
pub trait BadgeSurface {
    fn show_count(&mut self, update: BadgeUpdate);
}

/// Transient toast notifications.
///
/// Implementations own presentation and dismissal; `display_for` is how
/// long the message should stay up. Overlapping toasts are allowed.
pub trait NotificationSurface {
    fn notify(&mut self, notification: &Notification, display_for: Duration);
}
