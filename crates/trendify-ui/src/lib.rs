//! Presentation helpers for the Trendify storefront.
//!
//! Pure formatting and markup: prices, discounts, dates, order ids, star
//! ratings and product cards. `Debouncer` rate-limits repeated calls such
//! as search-as-you-type.

mod card;
mod debounce;
mod format;
mod rating;

pub use card::{render_product_card, DESCRIPTION_PREVIEW_CHARS};
pub use debounce::Debouncer;
pub use format::{format_currency, format_date, format_discount, generate_order_id};
pub use rating::{star_rating, DEFAULT_MAX_STARS};
