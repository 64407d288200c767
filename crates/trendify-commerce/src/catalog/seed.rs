//! The storefront's embedded product list.

use crate::catalog::{Category, Product};

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn image(photo: &str) -> String {
    format!("{IMAGE_BASE}/{photo}?w=400&h=400&fit=crop")
}

/// Products shipped with the storefront, in display order.
pub fn storefront_products() -> Vec<Product> {
    vec![
        Product::new(1, "Classic T-Shirt", 499, Category::Clothing)
            .with_original_price(699)
            .with_image(image("photo-1521572163474-6864f9cf17ab"))
            .with_description(
                "Comfortable cotton t-shirt perfect for everyday wear. Available in multiple colors and sizes.",
            )
            .with_rating(4.5, 128)
            .with_discount(29)
            .featured(),
        Product::new(2, "Stylish Watch", 899, Category::Accessories)
            .with_original_price(1299)
            .with_image(image("photo-1523275335684-37898b6baf30"))
            .with_description(
                "Modern analog watch with stainless steel band. Water resistant and perfect for any occasion.",
            )
            .with_rating(4.8, 89)
            .with_discount(31)
            .featured(),
        Product::new(3, "Wireless Earbuds", 1299, Category::Electronics)
            .with_original_price(1799)
            .with_image(image("photo-1572569511254-d8f925fe2cbb"))
            .with_description(
                "High-quality wireless earbuds with noise cancellation and long battery life.",
            )
            .with_rating(4.7, 256)
            .with_discount(28)
            .featured(),
        Product::new(4, "Leather Wallet", 799, Category::Accessories)
            .with_original_price(999)
            .with_image(image("photo-1627123424574-724758594e93"))
            .with_description(
                "Premium leather wallet with multiple card slots and RFID protection.",
            )
            .with_rating(4.6, 67)
            .with_discount(20),
        Product::new(5, "Sneakers", 1599, Category::Footwear)
            .with_original_price(2199)
            .with_image(image("photo-1549298916-b41d501d3772"))
            .with_description(
                "Comfortable and stylish sneakers perfect for daily wear and light sports.",
            )
            .with_rating(4.4, 143)
            .with_discount(27),
        Product::new(6, "Smartphone Case", 299, Category::Electronics)
            .with_original_price(499)
            .with_image(image("photo-1601593346740-925612772716"))
            .with_description(
                "Durable smartphone case with shock absorption and wireless charging compatibility.",
            )
            .with_rating(4.3, 234)
            .with_discount(40),
        Product::new(7, "Denim Jacket", 1299, Category::Clothing)
            .with_original_price(1699)
            .with_image(image("photo-1544022613-e87ca75a784a"))
            .with_description(
                "Classic denim jacket with a modern fit. Perfect for layering in any season.",
            )
            .with_rating(4.5, 92)
            .with_discount(24),
        Product::new(8, "Backpack", 999, Category::Accessories)
            .with_original_price(1399)
            .with_image(image("photo-1553062407-98eeb64c6a62"))
            .with_description(
                "Spacious and durable backpack with laptop compartment and water-resistant material.",
            )
            .with_rating(4.7, 178)
            .with_discount(29),
    ]
}
