//! Product card renderer.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use trendify_commerce::catalog::Product;

use crate::format::{format_currency, format_discount};
use crate::rating::{star_rating, DEFAULT_MAX_STARS};

/// Characters of the description shown on a card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Characters escaped in the placeholder URL. Quotes and parentheses are
/// escaped too, since the URL sits inside a single-quoted handler string.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*');

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x400/6366f1/ffffff?text=";

/// Render a product card for listing grids.
pub fn render_product_card(product: &Product, in_wishlist: bool) -> String {
    let on_sale = product.is_on_sale();

    let discount_badge = match product.original_price {
        Some(original) if on_sale => format!(
            r#"<div class="product-badge">-{}%</div>"#,
            format_discount(original, product.price)
        ),
        _ => String::new(),
    };

    let original_price = match product.original_price {
        Some(original) if on_sale => format!(
            r#"<span class="original-price">{}</span>"#,
            format_currency(original)
        ),
        _ => String::new(),
    };

    let (wishlist_title, wishlist_icon) = if in_wishlist {
        ("Remove from wishlist", "❤️")
    } else {
        ("Add to wishlist", "🤍")
    };

    let preview: String = product
        .description
        .chars()
        .take(DESCRIPTION_PREVIEW_CHARS)
        .collect();

    format!(
        r#"<div class="product-card animate-on-scroll" data-product-id="{id}">
    <div class="product-image">
        <img src="{image}" alt="{name}"
             onerror="this.src='{placeholder}{encoded_name}'">
        {discount_badge}
        <div class="product-actions">
            <button class="product-action wishlist-btn" onclick="toggleWishlist({id})" title="{wishlist_title}">
                {wishlist_icon}
            </button>
            <button class="product-action quick-view-btn" onclick="quickView({id})" title="Quick view">
                👁️
            </button>
        </div>
    </div>
    <div class="product-info">
        <h3 class="product-title">{name}</h3>
        <p class="product-description">{preview}...</p>
        <div class="product-rating">
            {stars}
            <span class="rating-count">({reviews})</span>
        </div>
        <div class="product-price">
            <span class="price">{price}</span>
            {original_price}
        </div>
        <div class="product-footer">
            <button class="btn btn-primary" onclick="addToCart({id})">
                Add to Cart
            </button>
            <button class="btn btn-outline" onclick="viewProduct({id})">
                View Details
            </button>
        </div>
    </div>
</div>"#,
        id = product.id,
        image = escape_html(&product.image),
        name = escape_html(&product.name),
        placeholder = PLACEHOLDER_IMAGE,
        encoded_name = utf8_percent_encode(&product.name, URI_COMPONENT),
        discount_badge = discount_badge,
        wishlist_title = wishlist_title,
        wishlist_icon = wishlist_icon,
        preview = escape_html(&preview),
        stars = star_rating(product.rating, DEFAULT_MAX_STARS),
        reviews = product.reviews,
        price = format_currency(product.price),
        original_price = original_price,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
