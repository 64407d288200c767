//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before discount, if the product is marked down.
    pub original_price: Option<Money>,
    /// Product image URL.
    pub image: String,
    /// Category the product is listed under.
    pub category: Category,
    /// Long description.
    pub description: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Whether the product can be ordered.
    pub in_stock: bool,
    /// Whether the product is shown in the featured strip.
    pub featured: bool,
    /// Advertised discount percentage.
    pub discount: u8,
}

impl Product {
    /// Create an in-stock product priced in whole rupees.
    pub fn new(id: u32, name: impl Into<String>, price: i64, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: Money::from_major(price, Currency::INR),
            original_price: None,
            image: String::new(),
            category,
            description: String::new(),
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            featured: false,
            discount: 0,
        }
    }

    /// Set the pre-discount price in whole units of the product's currency.
    pub fn with_original_price(mut self, price: i64) -> Self {
        self.original_price = Some(Money::from_major(price, self.price.currency));
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set rating and review count. The rating is clamped to 0.0..=5.0.
    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.reviews = reviews;
        self
    }

    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = percent;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Check whether the original price is above the current price.
    pub fn is_on_sale(&self) -> bool {
        matches!(
            self.original_price,
            Some(original) if original.currency == self.price.currency
                && original.amount_minor > self.price.amount_minor
        )
    }

    /// Case-insensitive substring match on name, description or category tag.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.tag().contains(needle)
    }
}
