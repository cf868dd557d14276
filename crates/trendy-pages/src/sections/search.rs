//! Search results page.

use crate::markup::html_escape;
use crate::sections::cards::render_product_grid;
use crate::sections::frame::render_page;
use trendy_commerce::prelude::*;
use trendy_ui::SearchPanel;

/// Render the search page from the panel's current state.
pub fn render_search(panel: &SearchPanel) -> String {
    let query = panel.query();

    let body = if query.is_empty() {
        render_start_searching()
    } else if panel.is_no_match() {
        render_no_results(&query.raw)
    } else {
        format!(
            "{}\n{}",
            render_results_header(&query.raw, panel.result_count(), query.sort),
            render_product_grid(panel.results()),
        )
    };

    let content = format!(
        r#"<section class="search-page" data-section="search">
    {}
</section>"#,
        body
    );

    render_page("Search", &query.raw, &content)
}

fn render_results_header(raw: &str, count: usize, sort: SortKey) -> String {
    let options: String = SortKey::ALL
        .iter()
        .map(|key| {
            let selected = if *key == sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                selected,
                key.display_name()
            )
        })
        .collect();

    format!(
        r#"<div class="search-header">
    <div>
        <h1>Results for "{query}"</h1>
        <p class="result-count">{count} products found</p>
    </div>
    <div class="sort-control">
        <label for="sort">Sort by</label>
        <select id="sort" name="sort">{options}</select>
    </div>
</div>"#,
        query = html_escape(raw),
        count = count,
        options = options,
    )
}

fn render_start_searching() -> String {
    r#"<div class="empty-state">
    <h3>Start searching</h3>
    <p>Type a search term to find the products you want.</p>
    <p>
        <a href="/search?q=shirt">shirt</a> ·
        <a href="/search?q=shoes">shoes</a> ·
        <a href="/search?q=watch">watch</a> ·
        <a href="/search?q=jacket">jacket</a>
    </p>
</div>"#
        .to_string()
}

fn render_no_results(raw: &str) -> String {
    format!(
        r#"<div class="empty-state">
    <h3>No results</h3>
    <p>We couldn't find any products matching "{}".</p>
    <ul>
        <li>Check the spelling</li>
        <li>Try different words</li>
        <li>Try fewer words</li>
    </ul>
    <p><a href="/search">Clear search</a></p>
</div>"#,
        html_escape(raw)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendy_commerce::demo;

    #[test]
    fn test_empty_query_invites_searching() {
        let panel = SearchPanel::new(demo::demo_catalog());
        let html = render_search(&panel);
        assert!(html.contains("Start searching"));
    }

    #[test]
    fn test_results_header_shows_count_and_query() {
        let mut panel = SearchPanel::new(demo::demo_catalog());
        panel.set_query("shirt");
        let html = render_search(&panel);
        assert!(html.contains(r#"Results for "shirt""#));
        assert!(html.contains(&format!("{} products found", panel.result_count())));
    }

    #[test]
    fn test_selected_sort_option_is_marked() {
        let mut panel = SearchPanel::new(demo::demo_catalog());
        panel.set_query("shirt");
        panel.set_sort(SortKey::PriceHigh);
        let html = render_search(&panel);
        assert!(html.contains(r#"<option value="price-high" selected>"#));
    }

    #[test]
    fn test_no_match_state() {
        let mut panel = SearchPanel::new(demo::demo_catalog());
        panel.set_query("spaceship");
        let html = render_search(&panel);
        assert!(html.contains("No results"));
    }
}
