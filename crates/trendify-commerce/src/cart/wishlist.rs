//! Wishlist contents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;

/// Product ids saved for later, without duplicates, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. Returns false if it was already present.
    pub fn insert(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a product. Returns whether it was present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.ids.len();
        self.ids.retain(|&i| i != id);
        self.ids.len() < len_before
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve ids through the catalog in stored order, skipping unknown ones.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.ids
            .iter()
            .filter_map(|&id| catalog.get_by_id(id))
            .collect()
    }
}

impl Serialize for Wishlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Wishlist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = Vec::<ProductId>::deserialize(deserializer)?;
        let mut wishlist = Wishlist::new();
        for id in stored.into_iter().filter(|id| id.get() > 0) {
            wishlist.insert(id);
        }
        Ok(wishlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn pid(id: u32) -> ProductId {
        ProductId::new(id)
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.insert(pid(3)));
        assert!(!wishlist.insert(pid(3)));
        assert_eq!(wishlist.ids(), &[pid(3)]);
    }

    #[test]
    fn test_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.insert(pid(1));
        wishlist.insert(pid(2));
        assert!(wishlist.remove(pid(1)));
        assert!(!wishlist.remove(pid(1)));
        assert_eq!(wishlist.ids(), &[pid(2)]);
    }

    #[test]
    fn test_products_keep_order_and_skip_unknown() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Tee", 499, Category::Clothing),
            Product::new(2, "Watch", 899, Category::Accessories),
        ]);
        let mut wishlist = Wishlist::new();
        wishlist.insert(pid(2));
        wishlist.insert(pid(77));
        wishlist.insert(pid(1));

        let names: Vec<&str> = wishlist
            .products(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Watch", "Tee"]);
    }

    #[test]
    fn test_json_form_dedupes() {
        let wishlist: Wishlist = serde_json::from_str("[4,2,4,9]").unwrap();
        assert_eq!(wishlist.ids(), &[pid(4), pid(2), pid(9)]);
        assert_eq!(serde_json::to_string(&wishlist).unwrap(), "[4,2,9]");
    }

    #[test]
    fn test_stored_zero_id_is_dropped() {
        let wishlist: Wishlist = serde_json::from_str("[0,3,0]").unwrap();
        assert_eq!(wishlist.ids(), &[pid(3)]);
    }
}
