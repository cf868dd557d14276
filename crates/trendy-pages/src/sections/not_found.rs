//! 404 page.

use crate::sections::frame::render_page;

/// Render the not-found page.
pub fn render_not_found() -> String {
    let content = r#"<div class="empty-state" data-section="not-found">
    <h1>404</h1>
    <p>Page not found</p>
    <p><a href="/">Back to Home</a></p>
</div>"#;

    render_page("Not Found", "", content)
}
