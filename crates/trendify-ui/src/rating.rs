//! Star rating markup.

/// Stars shown when no explicit maximum is given.
pub const DEFAULT_MAX_STARS: u32 = 5;

/// Render a rating as star spans: full stars for the whole part, one half
/// star when the fraction is at least 0.5, and empty stars up to `max_stars`.
pub fn star_rating(rating: f32, max_stars: u32) -> String {
    let rating = rating.clamp(0.0, max_stars as f32);
    let full = rating.floor() as u32;
    let half = u32::from(rating.fract() >= 0.5);
    let empty = max_stars.saturating_sub(full + half);

    let mut html = String::new();
    for _ in 0..full {
        html.push_str(r#"<span class="star star-full">★</span>"#);
    }
    if half > 0 {
        html.push_str(r#"<span class="star star-half">★</span>"#);
    }
    for _ in 0..empty {
        html.push_str(r#"<span class="star star-empty">☆</span>"#);
    }
    html
}
