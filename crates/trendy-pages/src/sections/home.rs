//! Home page: hero carousel, stats band, category trio, featured grid.

use crate::markup::html_escape;
use crate::sections::cards::render_product_grid;
use crate::sections::frame::render_page;
use trendy_commerce::prelude::*;
use trendy_ui::CarouselSnapshot;

/// Render the home page.
pub fn render_home(
    hero: &[Product],
    carousel: &CarouselSnapshot,
    featured: &[Product],
    categories: &[Category],
) -> String {
    let content = format!(
        "{}\n{}\n{}\n<section class=\"featured\">\n<h2>Latest Arrivals</h2>\n{}\n</section>",
        render_hero(hero, carousel),
        render_stats(),
        render_category_trio(categories),
        render_product_grid(featured),
    );

    render_page("Home", "", &content)
}

/// Render the hero carousel from a state snapshot.
///
/// Only the slides inside `visible_range()` are shown; the indicator dots
/// and the autoplay toggle mirror the snapshot so the markup always agrees
/// with the engine.
pub fn render_hero(items: &[Product], carousel: &CarouselSnapshot) -> String {
    let slide_width = 100.0 / carousel.visible_count as f64;
    let slides: String = carousel
        .visible_range()
        .filter_map(|i| items.get(i))
        .map(|item| {
            format!(
                r#"<div class="hero-slide" style="width:calc({width:.2}% - 1rem)">
            <img src="{image}" alt="{name}">
            <div class="hero-caption"><h3>{name}</h3><p>{price}</p></div>
        </div>"#,
                width = slide_width,
                image = item.thumbnail().unwrap_or(""),
                name = html_escape(&item.name),
                price = item.price,
            )
        })
        .collect();

    let dots: String = (0..carousel.indicator_count())
        .map(|i| {
            let class = if i == carousel.current_index {
                "hero-dot active"
            } else {
                "hero-dot"
            };
            format!(r#"<button class="{}" data-slide="{}"></button>"#, class, i)
        })
        .collect();

    let autoplay_icon = if carousel.auto_advance { "⏸" } else { "▶" };

    format!(
        r#"<section class="hero-carousel" data-section="hero">
    <div class="hero-heading">
        <h2>Latest Products</h2>
        <p>Discover our hand-picked collection</p>
    </div>
    <div class="hero-track">
        {slides}
    </div>
    <button class="hero-nav prev" aria-label="Previous slide">‹</button>
    <button class="hero-nav next" aria-label="Next slide">›</button>
    <div class="hero-dots">{dots}</div>
    <button class="autoplay-toggle" aria-label="Toggle auto-play">{autoplay_icon}</button>
</section>"#,
        slides = slides,
        dots = dots,
        autoplay_icon = autoplay_icon,
    )
}

fn render_stats() -> String {
    let stats = [
        ("50,000+", "Happy Customers"),
        ("12,000+", "5-Star Reviews"),
        ("1M+", "Products Sold"),
    ];
    let cells: String = stats
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<div class="stat"><div class="stat-value">{}</div><p>{}</p></div>"#,
                value, label
            )
        })
        .collect();
    format!(r#"<section class="stats-band">{}</section>"#, cells)
}

fn render_category_trio(categories: &[Category]) -> String {
    let cards: String = categories
        .iter()
        .take(3)
        .map(|c| {
            format!(
                r#"<a class="category-card" href="{href}">
        <div class="band">
            <h3>{name}</h3>
            <p>{description}</p>
            <span class="category-count">{count} products</span>
        </div>
    </a>"#,
                href = c.path(),
                name = html_escape(&c.name),
                description = html_escape(&c.description),
                count = c.product_count,
            )
        })
        .collect();

    format!(
        r#"<section class="shop-by-category">
    <h2>Shop by Category</h2>
    <div class="category-grid">{}</div>
</section>"#,
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendy_commerce::demo;
    use trendy_ui::carousel::Carousel;

    fn snapshot(carousel: &Carousel) -> CarouselSnapshot {
        CarouselSnapshot::from(carousel)
    }

    #[test]
    fn test_hero_shows_only_visible_slides() {
        let items = demo::hero_products();
        let mut carousel = Carousel::new(items.len(), 4);
        carousel.go_to(8).unwrap();

        let html = render_hero(&items, &snapshot(&carousel));
        assert!(html.contains("Athletic Sneakers")); // index 8
        assert!(html.contains("Sunglasses")); // index 11
        assert!(!html.contains("Elegant Summer Dress")); // index 0
    }

    #[test]
    fn test_hero_has_one_dot_per_reachable_index() {
        let items = demo::hero_products();
        let carousel = Carousel::new(items.len(), 4);
        let html = render_hero(&items, &snapshot(&carousel));
        // 9 dot buttons plus the "hero-dots" wrapper itself.
        assert_eq!(html.matches("hero-dot").count(), 10);
    }

    #[test]
    fn test_autoplay_toggle_reflects_state() {
        let items = demo::hero_products();
        let mut carousel = Carousel::new(items.len(), 4);
        assert!(render_hero(&items, &snapshot(&carousel)).contains('⏸'));
        carousel.toggle_auto_advance();
        assert!(render_hero(&items, &snapshot(&carousel)).contains('▶'));
    }
}
