//! Product listing page, used by `/products` and `/category/:slug`.

use crate::markup::html_escape;
use crate::sections::cards::render_product_grid;
use crate::sections::frame::render_page;
use trendy_commerce::prelude::*;

/// Render a titled grid of products.
pub fn render_listing(title: &str, products: &[Product]) -> String {
    let body = if products.is_empty() {
        r#"<div class="empty-state"><h3>Nothing here yet</h3><p>Check back soon for new arrivals.</p></div>"#
            .to_string()
    } else {
        render_product_grid(products)
    };

    let content = format!(
        r#"<section class="listing-page" data-section="listing">
    <h1>{}</h1>
    <p class="result-count">{} products</p>
    {}
</section>"#,
        html_escape(title),
        products.len(),
        body
    );

    render_page(title, "", &content)
}
