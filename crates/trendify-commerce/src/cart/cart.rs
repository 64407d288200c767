//! Cart contents and line items.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Quantities per product.
///
/// Every stored quantity is at least 1: setting a quantity of zero or less
/// removes the entry. Entries iterate in ascending id order, which is also
/// the key order of the persisted JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product, returning the product's new quantity.
    ///
    /// Quantities accumulate. Adding zero of a product that isn't in the
    /// cart leaves the cart unchanged and returns 0.
    pub fn add(&mut self, id: ProductId, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.quantity(id);
        }
        let entry = self.items.entry(id).or_insert(0);
        *entry = entry.saturating_add(quantity);
        *entry
    }

    /// Remove a product. Returns whether it was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        self.items.remove(&id).is_some()
    }

    /// Overwrite a product's quantity, returning the stored quantity.
    ///
    /// Zero or negative quantities remove the product and return 0.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> u32 {
        if quantity <= 0 {
            self.remove(id);
            return 0;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.items.insert(id, quantity);
        quantity
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity of a product, 0 if absent.
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.items.get(&id).copied().unwrap_or(0)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.contains_key(&id)
    }

    /// Total units across all products.
    pub fn count(&self) -> u64 {
        self.items.values().map(|&q| u64::from(q)).sum()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, u32)> + '_ {
        self.items.iter().map(|(&id, &q)| (id, q))
    }

    /// Read-only view of the underlying mapping.
    pub fn as_map(&self) -> &BTreeMap<ProductId, u32> {
        &self.items
    }

    /// Join entries with catalog products.
    ///
    /// Entries whose product is no longer in the catalog are skipped.
    pub fn line_items(&self, catalog: &Catalog) -> Result<Vec<CartLineItem>, CommerceError> {
        self.iter()
            .filter_map(|(id, quantity)| catalog.get_by_id(id).map(|p| (p, quantity)))
            .map(|(product, quantity)| CartLineItem::new(product, quantity))
            .collect()
    }

    /// Sum of line totals, zero for an empty cart.
    pub fn total(&self, catalog: &Catalog) -> Result<Money, CommerceError> {
        let items = self.line_items(catalog)?;
        let currency = catalog.currency();
        Money::try_sum(items.iter().map(|i| &i.total), currency).ok_or_else(|| {
            match items.iter().find(|i| i.total.currency != currency) {
                Some(item) => CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: item.total.currency.code().to_string(),
                },
                None => CommerceError::Overflow,
            }
        })
    }

    /// Rebuild from persisted quantities, dropping zero ids and entries that
    /// break the positive-quantity rule.
    pub(crate) fn from_stored(stored: BTreeMap<ProductId, i64>) -> Self {
        let items = stored
            .into_iter()
            .filter(|&(id, q)| id.get() > 0 && q > 0)
            .map(|(id, q)| (id, u32::try_from(q).unwrap_or(u32::MAX)))
            .collect();
        Self { items }
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = BTreeMap::<ProductId, i64>::deserialize(deserializer)?;
        Ok(Self::from_stored(stored))
    }
}

/// A cart entry joined with its product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineItem {
    pub product: Product,
    pub quantity: u32,
    /// `product.price * quantity`.
    pub total: Money,
}

impl CartLineItem {
    fn new(product: &Product, quantity: u32) -> Result<Self, CommerceError> {
        let total = product
            .price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            product: product.clone(),
            quantity,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Currency;

    fn pid(id: u32) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn test_add_accumulates() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(pid(1), 2), 2);
        assert_eq!(cart.add(pid(1), 3), 5);
        assert_eq!(cart.count(), 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_zero_does_not_create_entry() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(pid(1), 0), 0);
        assert!(cart.is_empty());

        cart.add(pid(1), 4);
        assert_eq!(cart.add(pid(1), 0), 4);
    }

    #[test]
    fn test_add_saturates() {
        let mut cart = Cart::new();
        cart.add(pid(1), u32::MAX - 1);
        assert_eq!(cart.add(pid(1), 5), u32::MAX);
    }

    #[test]
    fn test_set_quantity_overwrites_or_removes() {
        let mut cart = Cart::new();
        cart.add(pid(1), 2);
        assert_eq!(cart.set_quantity(pid(1), 7), 7);
        assert_eq!(cart.quantity(pid(1)), 7);

        assert_eq!(cart.set_quantity(pid(1), 0), 0);
        assert!(!cart.contains(pid(1)));

        cart.add(pid(2), 1);
        assert_eq!(cart.set_quantity(pid(2), -3), 0);
        assert!(cart.is_empty());

        // Setting an absent product inserts it.
        assert_eq!(cart.set_quantity(pid(9), 1), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove(pid(4)));
    }

    #[test]
    fn test_line_items_skip_unknown_products() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Tee", 499, Category::Clothing),
            Product::new(2, "Watch", 899, Category::Accessories),
        ]);
        let mut cart = Cart::new();
        cart.add(pid(2), 1);
        cart.add(pid(1), 2);
        cart.add(pid(42), 5);

        let items = cart.line_items(&catalog).unwrap();
        let rows: Vec<(u32, u32, i64)> = items
            .iter()
            .map(|i| (i.product.id.get(), i.quantity, i.total.major()))
            .collect();
        assert_eq!(rows, vec![(1, 2, 998), (2, 1, 899)]);

        // Unknown products still count as units but not toward the total.
        assert_eq!(cart.count(), 8);
        assert_eq!(
            cart.total(&catalog).unwrap(),
            Money::from_major(1897, Currency::INR)
        );
    }

    #[test]
    fn test_empty_total_is_zero() {
        let cart = Cart::new();
        let total = cart.total(&Catalog::storefront()).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency, Currency::INR);
    }

    #[test]
    fn test_total_currency_mismatch() {
        let mut usd = Product::new(2, "Import", 10, Category::Accessories);
        usd.price = Money::from_major(10, Currency::USD);
        let catalog = Catalog::new(vec![Product::new(1, "Tee", 499, Category::Clothing), usd]);

        let mut cart = Cart::new();
        cart.add(pid(1), 1);
        cart.add(pid(2), 1);
        assert!(matches!(
            cart.total(&catalog),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_json_form() {
        let mut cart = Cart::new();
        cart.add(pid(10), 1);
        cart.add(pid(2), 3);
        assert_eq!(serde_json::to_string(&cart).unwrap(), r#"{"2":3,"10":1}"#);

        let back: Cart = serde_json::from_str(r#"{"2":3,"10":1}"#).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_stored_non_positive_quantities_are_dropped() {
        let cart: Cart = serde_json::from_str(r#"{"1":0,"2":-4,"3":2}"#).unwrap();
        assert_eq!(cart.iter().collect::<Vec<_>>(), vec![(pid(3), 2)]);
    }

    #[test]
    fn test_stored_zero_id_is_dropped() {
        let cart: Cart = serde_json::from_str(r#"{"0":3,"5":1}"#).unwrap();
        assert_eq!(cart.count(), 1);
        assert!(!cart.contains(pid(0)));
    }
}
