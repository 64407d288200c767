//! Sort options for product listings.

use std::cmp::Ordering;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// How to order a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Keep the listing's existing order.
    #[default]
    Unsorted,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by newest first (highest id).
    Newest,
}

impl SortOption {
    /// Parse the key used by the sort dropdown.
    ///
    /// Unrecognized keys select `Unsorted`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "price-low" => SortOption::PriceAsc,
            "price-high" => SortOption::PriceDesc,
            "rating" => SortOption::Rating,
            "name" => SortOption::NameAsc,
            "newest" => SortOption::Newest,
            _ => SortOption::Unsorted,
        }
    }

    /// Dropdown key for this option, `None` for `Unsorted`.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            SortOption::Unsorted => None,
            SortOption::PriceAsc => Some("price-low"),
            SortOption::PriceDesc => Some("price-high"),
            SortOption::Rating => Some("rating"),
            SortOption::NameAsc => Some("name"),
            SortOption::Newest => Some("newest"),
        }
    }

    /// Return a sorted copy of `products`. Sorting is stable.
    pub fn apply<'a>(&self, products: &[&'a Product]) -> Vec<&'a Product> {
        let mut sorted = products.to_vec();
        match self {
            SortOption::Unsorted => {}
            SortOption::PriceAsc => sorted.sort_by_key(|p| p.price.amount_minor),
            SortOption::PriceDesc => {
                sorted.sort_by(|a, b| b.price.amount_minor.cmp(&a.price.amount_minor))
            }
            SortOption::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortOption::NameAsc => sorted.sort_by(|a, b| collate(&a.name, &b.name)),
            SortOption::Newest => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        }
        sorted
    }
}

/// Locale-style name comparison: letters compare case-insensitively first,
/// and only names equal under that rule fall back to case, lowercase first.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "watch", 899, Category::Accessories).with_rating(4.8, 1),
            Product::new(2, "Backpack", 499, Category::Accessories).with_rating(4.4, 1),
            Product::new(3, "Earbuds", 1299, Category::Electronics).with_rating(4.8, 1),
        ]
    }

    fn ids(sorted: &[&Product]) -> Vec<u32> {
        sorted.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SortOption::from_key("price-low"), SortOption::PriceAsc);
        assert_eq!(SortOption::from_key("newest"), SortOption::Newest);
        assert_eq!(SortOption::from_key("popularity"), SortOption::Unsorted);
        assert_eq!(SortOption::Rating.key(), Some("rating"));
        assert_eq!(SortOption::Unsorted.key(), None);
    }

    #[test]
    fn test_price_sorts() {
        let all = products();
        let refs: Vec<&Product> = all.iter().collect();
        assert_eq!(ids(&SortOption::PriceAsc.apply(&refs)), vec![2, 1, 3]);
        assert_eq!(ids(&SortOption::PriceDesc.apply(&refs)), vec![3, 1, 2]);
    }

    #[test]
    fn test_rating_sort_is_stable() {
        let all = products();
        let refs: Vec<&Product> = all.iter().collect();
        // 1 and 3 tie at 4.8 and keep their input order
        assert_eq!(ids(&SortOption::Rating.apply(&refs)), vec![1, 3, 2]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let all = products();
        let refs: Vec<&Product> = all.iter().collect();
        assert_eq!(ids(&SortOption::NameAsc.apply(&refs)), vec![2, 3, 1]);
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
    }

    #[test]
    fn test_newest_and_unsorted() {
        let all = products();
        let refs: Vec<&Product> = all.iter().collect();
        assert_eq!(ids(&SortOption::Newest.apply(&refs)), vec![3, 2, 1]);
        assert_eq!(ids(&SortOption::Unsorted.apply(&refs)), vec![1, 2, 3]);
    }
}
