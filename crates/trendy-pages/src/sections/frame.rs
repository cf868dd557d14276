//! The frame every page shares: shell, header, footer.

use crate::sections::header::render_header;
use crate::shell::{HeadContent, Shell};

/// Wrap page content in the standard shell with header and footer.
pub fn render_page(title: &str, search_value: &str, content: &str) -> String {
    let head = HeadContent::new(format!("{} - TrendyCloth", title))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "Premium fashion and style")
        .with_style(STOREFRONT_STYLES);

    let shell = Shell::new(head).with_body_start(format!(
        "<body>\n{}\n<main>\n",
        render_header(search_value)
    ));

    format!(
        "{}{}\n{}\n{}",
        shell.render_opening(),
        content,
        render_footer(),
        shell.render_closing()
    )
}

/// Render the site footer.
pub fn render_footer() -> String {
    r#"<footer class="site-footer">
    <div class="footer-grid">
        <div>
            <span class="logo">TrendyCloth</span>
            <p>Your destination for premium fashion and style. Quality clothing that makes a statement.</p>
        </div>
        <div>
            <h4>Shop</h4>
            <ul>
                <li><a href="/category/men">Men's Fashion</a></li>
                <li><a href="/category/women">Women's Fashion</a></li>
                <li><a href="/category/accessories">Accessories</a></li>
            </ul>
        </div>
        <div>
            <h4>Customer Care</h4>
            <ul>
                <li><a href="/categories">All Categories</a></li>
                <li><a href="/products">All Products</a></li>
            </ul>
        </div>
    </div>
    <p class="copyright">&copy; 2024 TrendyCloth. All rights reserved.</p>
</footer>"#
        .to_string()
}

const STOREFRONT_STYLES: &str = r##"
:root {
    --primary: #7c3aed;
    --primary-hover: #6d28d9;
    --bg: #faf9fb;
    --card-bg: #ffffff;
    --text: #1e1b24;
    --text-muted: #6b7280;
    --border: #e5e7eb;
    --success: #22c55e;
    --error: #ef4444;
    --sale: #dc2626;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    gap: 2rem;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
    position: sticky;
    top: 0;
    z-index: 100;
}

.logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); text-decoration: none; }

.search-form { display: flex; flex: 1; max-width: 600px; }
.search-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px 0 0 8px;
    font-size: 1rem;
}
.search-form button {
    padding: 0.75rem 1.5rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 0 8px 8px 0;
    cursor: pointer;
    font-weight: 500;
}

.header-nav { display: flex; gap: 1.5rem; }
.header-nav a { color: var(--text); text-decoration: none; }

main { max-width: 1400px; margin: 0 auto; padding: 2rem; }

.hero-carousel { position: relative; overflow: hidden; border-radius: 12px; background: var(--card-bg); padding: 2rem 1rem; }
.hero-track { display: flex; gap: 1rem; }
.hero-slide { flex-shrink: 0; border-radius: 8px; overflow: hidden; position: relative; }
.hero-slide img { width: 100%; aspect-ratio: 4/5; object-fit: cover; }
.hero-caption { position: absolute; bottom: 0; left: 0; right: 0; padding: 0.75rem; color: white; background: linear-gradient(to top, rgba(0,0,0,0.8), transparent); }
.hero-nav { position: absolute; top: 50%; transform: translateY(-50%); background: rgba(255,255,255,0.9); border: none; border-radius: 50%; width: 2.5rem; height: 2.5rem; cursor: pointer; }
.hero-nav.prev { left: 0.5rem; }
.hero-nav.next { right: 0.5rem; }
.hero-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
.hero-dot { height: 0.5rem; width: 0.5rem; border-radius: 999px; background: var(--border); border: none; cursor: pointer; }
.hero-dot.active { width: 2rem; background: var(--primary); }
.autoplay-toggle { position: absolute; top: 0.5rem; left: 0.5rem; background: none; border: none; cursor: pointer; }

.stats-band { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin: 3rem 0; text-align: center; }
.stat-value { font-size: 2rem; font-weight: 700; color: var(--primary); }

.category-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.category-card { border-radius: 12px; overflow: hidden; background: var(--card-bg); text-decoration: none; color: inherit; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.category-card .band { padding: 2rem; color: white; background: var(--primary); }
.category-count { font-size: 0.875rem; opacity: 0.85; }

.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.product-card { background: var(--card-bg); border-radius: 12px; overflow: hidden; position: relative; transition: box-shadow 0.2s; }
.product-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
.product-link { text-decoration: none; color: inherit; display: block; }
.product-image { aspect-ratio: 1; overflow: hidden; background: #f1f5f9; }
.product-image img { width: 100%; height: 100%; object-fit: cover; }
.product-info { padding: 1rem; }
.product-title { font-size: 1rem; font-weight: 500; margin-bottom: 0.5rem; }
.product-category { font-size: 0.8rem; color: var(--text-muted); }
.product-price { font-size: 1.25rem; font-weight: 700; }
.original-price { color: var(--text-muted); text-decoration: line-through; font-size: 0.9rem; margin-left: 0.5rem; }
.badge { position: absolute; top: 0.75rem; left: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 999px; font-size: 0.75rem; color: white; }
.badge.new { background: var(--primary); }
.badge.sale { background: var(--sale); }
.stars { color: #f59e0b; }
.star.empty { color: #e2e8f0; }
.rating-value { color: var(--text-muted); font-size: 0.875rem; }
.color-dots { display: flex; gap: 0.3rem; margin-top: 0.4rem; }
.color-dot { width: 0.9rem; height: 0.9rem; border-radius: 50%; border: 1px solid var(--border); display: inline-block; }

.search-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.result-count { color: var(--text-muted); }
.sort-control select { padding: 0.5rem; border: 1px solid var(--border); border-radius: 6px; background: var(--card-bg); }
.empty-state { text-align: center; padding: 4rem 2rem; background: var(--card-bg); border-radius: 12px; }
.empty-state p { color: var(--text-muted); }

.detail-layout { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.gallery-main { border-radius: 12px; overflow: hidden; position: relative; }
.gallery-thumbs { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.5rem; margin-top: 0.5rem; }
.gallery-thumbs button { border: 2px solid var(--border); border-radius: 8px; overflow: hidden; padding: 0; cursor: pointer; }
.gallery-thumbs button.selected { border-color: var(--primary); }
.swatch { width: 2.5rem; height: 2.5rem; border-radius: 50%; border: 2px solid var(--border); cursor: pointer; }
.swatch.selected { border-color: var(--primary); }
.size-option { padding: 0.5rem 0.75rem; border: 1px solid var(--border); border-radius: 6px; background: var(--card-bg); cursor: pointer; }
.size-option.selected { background: var(--primary); color: white; border-color: var(--primary); }
.qty-stepper { display: flex; align-items: center; gap: 0.75rem; }
.buy-button { width: 100%; padding: 0.9rem; background: var(--primary); color: white; border: none; border-radius: 8px; font-weight: 600; cursor: pointer; }
.buy-button:disabled { background: var(--border); cursor: not-allowed; }
.feature-list { margin-top: 1rem; padding-left: 1.25rem; color: var(--text-muted); }

.review { border-top: 1px solid var(--border); padding: 1rem 0; }
.review .author { font-weight: 600; }
.review p { color: var(--text-muted); }

.dialog-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; }
.dialog { background: var(--card-bg); border-radius: 12px; padding: 2rem; max-width: 28rem; width: 100%; }
.dialog-summary { background: var(--bg); border-radius: 8px; padding: 1rem; margin: 1rem 0; }
.payment-option { display: flex; align-items: center; gap: 0.6rem; padding: 0.4rem 0; }
.dialog-actions { display: flex; justify-content: flex-end; gap: 0.75rem; margin-top: 1.5rem; }

.site-footer { background: var(--card-bg); border-top: 1px solid var(--border); padding: 3rem 2rem 1.5rem; margin-top: 4rem; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; max-width: 1400px; margin: 0 auto; }
.site-footer h4 { margin-bottom: 0.75rem; }
.site-footer ul { list-style: none; }
.site-footer a { color: var(--text-muted); text-decoration: none; }
.copyright { text-align: center; color: var(--text-muted); font-size: 0.875rem; margin-top: 2rem; }

@media (max-width: 768px) {
    .detail-layout, .footer-grid { grid-template-columns: 1fr; }
    .stats-band { grid-template-columns: 1fr; }
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
}
"##;
