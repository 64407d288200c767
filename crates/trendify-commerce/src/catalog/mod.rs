//! Product catalog.
//!
//! The catalog is fixed at construction and only ever read. Share one
//! instance behind an `Arc` rather than rebuilding it per lookup.

mod category;
mod product;
mod seed;
mod sort;

pub use category::{Category, CategorySummary, ALL_CATEGORIES};
pub use product::Product;
pub use seed::storefront_products;
pub use sort::SortOption;

use crate::ids::ProductId;
use crate::money::Currency;

/// Read-only product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The storefront's embedded catalog.
    pub fn storefront() -> Self {
        Self::new(storefront_products())
    }

    /// All products in definition order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency prices are quoted in. Defaults to INR for an empty catalog.
    pub fn currency(&self) -> Currency {
        self.products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }

    /// Find a product by id.
    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by an id given as text (e.g. a `data-product-id` attribute).
    pub fn lookup(&self, raw_id: &str) -> Option<&Product> {
        ProductId::coerce(raw_id).and_then(|id| self.get_by_id(id))
    }

    /// Products in a category. `"all"` returns every product; unknown tags match nothing.
    pub fn by_category(&self, tag: &str) -> Vec<&Product> {
        if tag == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        match Category::from_tag(tag) {
            Some(category) => self
                .products
                .iter()
                .filter(|p| p.category == category)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Products flagged as featured.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// An empty query matches every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Return a sorted copy of `products`, leaving the input untouched.
    pub fn sort<'a>(&self, products: &[&'a Product], option: SortOption) -> Vec<&'a Product> {
        option.apply(products)
    }

    /// Navigation rows: "all" followed by each category, with product counts.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries = Vec::with_capacity(Category::ALL.len() + 1);
        summaries.push(CategorySummary {
            tag: ALL_CATEGORIES,
            name: "All Products",
            count: self.products.len(),
        });
        summaries.extend(Category::ALL.into_iter().map(|category| CategorySummary {
            tag: category.tag(),
            name: category.display_name(),
            count: self
                .products
                .iter()
                .filter(|p| p.category == category)
                .count(),
        }));
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_storefront_catalog() {
        let catalog = Catalog::storefront();
        assert_eq!(catalog.len(), 8);
        assert_eq!(ids(&catalog.all().iter().collect::<Vec<_>>()), (1..=8).collect::<Vec<_>>());
        assert_eq!(catalog.currency(), Currency::INR);
    }

    #[test]
    fn test_get_by_id_and_lookup() {
        let catalog = Catalog::storefront();
        assert_eq!(catalog.get_by_id(ProductId::new(3)).unwrap().name, "Wireless Earbuds");
        assert!(catalog.get_by_id(ProductId::new(99)).is_none());

        assert_eq!(catalog.lookup("2").unwrap().name, "Stylish Watch");
        assert_eq!(catalog.lookup("2px").unwrap().name, "Stylish Watch");
        assert!(catalog.lookup("watch").is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::storefront();
        assert_eq!(ids(&catalog.by_category("accessories")), vec![2, 4, 8]);
        assert_eq!(catalog.by_category("all").len(), 8);
        assert!(catalog.by_category("toys").is_empty());
    }

    #[test]
    fn test_featured() {
        let catalog = Catalog::storefront();
        assert_eq!(ids(&catalog.featured()), vec![1, 2, 3]);
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::storefront();
        // name, description ("wireless charging") and case-insensitivity
        assert_eq!(ids(&catalog.search("WIRELESS")), vec![3, 6]);
        // category tag
        assert_eq!(ids(&catalog.search("footwear")), vec![5]);
        assert_eq!(catalog.search("").len(), 8);
        assert!(catalog.search("submarine").is_empty());
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let catalog = Catalog::new(vec![
            Product::new(1, "Watch", 899, Category::Accessories),
            Product::new(2, "Tee", 499, Category::Clothing),
            Product::new(3, "Earbuds", 1299, Category::Electronics),
        ]);
        let listing: Vec<&Product> = catalog.all().iter().collect();

        let sorted = catalog.sort(&listing, SortOption::from_key("price-low"));
        let prices: Vec<i64> = sorted.iter().map(|p| p.price.major()).collect();
        assert_eq!(prices, vec![499, 899, 1299]);
        assert_eq!(ids(&listing), vec![1, 2, 3]);

        let unchanged = catalog.sort(&listing, SortOption::from_key("bogus"));
        assert_eq!(ids(&unchanged), vec![1, 2, 3]);
    }

    #[test]
    fn test_categories() {
        let catalog = Catalog::storefront();
        let rows: Vec<(&str, usize)> = catalog
            .categories()
            .iter()
            .map(|c| (c.tag, c.count))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("all", 8),
                ("clothing", 2),
                ("electronics", 2),
                ("accessories", 3),
                ("footwear", 1),
            ]
        );
        assert_eq!(catalog.categories()[0].name, "All Products");
    }
}
