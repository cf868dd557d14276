//! Site header: logo, search form, primary navigation.

use crate::markup::html_escape;

/// Render the site header. `search_value` pre-fills the search box so the
/// search page can echo the active query.
pub fn render_header(search_value: &str) -> String {
    format!(
        r#"<header class="site-header">
    <a href="/" class="logo">TrendyCloth</a>
    <form action="/search" method="GET" class="search-form">
        <input type="search" name="q" value="{}" placeholder="Search products..." aria-label="Search">
        <button type="submit">Search</button>
    </form>
    <nav class="header-nav">
        <a href="/products">Products</a>
        <a href="/categories">Categories</a>
    </nav>
</header>"#,
        html_escape(search_value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_echoes_query() {
        let html = render_header("red shirt");
        assert!(html.contains(r#"value="red shirt""#));
    }

    #[test]
    fn test_header_escapes_query() {
        let html = render_header(r#""><script>"#);
        assert!(!html.contains("<script>"));
    }
}
