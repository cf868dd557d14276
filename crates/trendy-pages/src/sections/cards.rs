//! Product card, shared by every grid.

use crate::markup::{html_escape, render_stars};
use trendy_commerce::prelude::*;

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    let badge = if product.is_new {
        r#"<span class="badge new">New</span>"#.to_string()
    } else if let Some(percent) = product.discount_percentage() {
        format!(r#"<span class="badge sale">-{}%</span>"#, percent)
    } else {
        String::new()
    };

    let image = product
        .thumbnail()
        .map(|url| format!(r#"<img src="{}" alt="{}" loading="lazy">"#, url, html_escape(&product.name)))
        .unwrap_or_default();

    let rating = match product.rating {
        Some(r) => format!(
            r#"<div class="product-rating">{}<span class="rating-value">{:.1} ({})</span></div>"#,
            render_stars(r),
            r,
            product.review_count
        ),
        None => String::new(),
    };

    let original = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|op| format!(r#"<span class="original-price">{}</span>"#, op))
        .unwrap_or_default();

    let colors: String = product
        .colors
        .iter()
        .map(|c| {
            format!(
                r#"<span class="color-dot" style="background:{}" title="{}"></span>"#,
                c.hex,
                html_escape(&c.name)
            )
        })
        .collect();
    let colors = if colors.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="color-dots">{}</div>"#, colors)
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    {badge}
    <a href="/product/{id}" class="product-link">
        <div class="product-image">{image}</div>
        <div class="product-info">
            <span class="product-category">{category}</span>
            <h3 class="product-title">{name}</h3>
            {rating}
            <div class="product-price">{price}{original}</div>
            {colors}
        </div>
    </a>
</article>"#,
        id = product.id,
        badge = badge,
        image = image,
        category = html_escape(&product.category),
        name = html_escape(&product.name),
        rating = rating,
        price = product.price,
        original = original,
        colors = colors,
    )
}

/// Render a grid of product cards.
pub fn render_product_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendy_commerce::money::{Currency, Money};

    #[test]
    fn test_card_shows_sale_badge_and_strike_price() {
        let p = Product::new("p-1", "Coat", "Outerwear", Money::new(24999, Currency::USD))
            .with_original_price(Money::new(29999, Currency::USD));
        let html = render_product_card(&p);
        assert!(html.contains("badge sale"));
        assert!(html.contains("-17%"));
        assert!(html.contains("original-price"));
    }

    #[test]
    fn test_new_badge_wins_over_sale() {
        let p = Product::new("p-1", "Scarf", "Accessories", Money::new(4599, Currency::USD))
            .with_original_price(Money::new(5999, Currency::USD))
            .with_new_flag();
        let html = render_product_card(&p);
        assert!(html.contains("badge new"));
        assert!(!html.contains("badge sale"));
    }

    #[test]
    fn test_card_escapes_name() {
        let p = Product::new(
            "p-1",
            "<script>alert(1)</script>",
            "Men",
            Money::new(100, Currency::USD),
        );
        let html = render_product_card(&p);
        assert!(!html.contains("<script>alert"));
    }
}
