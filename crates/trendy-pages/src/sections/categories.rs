//! Category directory page.

use crate::markup::html_escape;
use crate::sections::frame::render_page;
use trendy_commerce::prelude::*;

/// Render the categories page.
pub fn render_categories(categories: &[Category]) -> String {
    let cards: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<a class="category-card" href="{href}">
    <div class="band">
        <h2>{name}</h2>
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

    let content = format!(
        r#"<section class="categories-page" data-section="categories">
    <h1>All Categories</h1>
    <p class="result-count">Browse our products by category</p>
    <div class="category-grid">{}</div>
</section>"#,
        cards
    );

    render_page("Categories", "", &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendy_commerce::demo;

    #[test]
    fn test_all_categories_listed_with_counts() {
        let categories = demo::demo_categories();
        let html = render_categories(&categories);
        for c in &categories {
            assert!(html.contains(&c.name));
            assert!(html.contains(&format!("{} products", c.product_count)));
        }
    }
}
