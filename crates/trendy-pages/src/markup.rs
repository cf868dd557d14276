//! Small HTML helpers shared by the section renderers.

/// Escape text for safe interpolation into HTML.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a five-star rating row.
pub(crate) fn render_stars(rating: f64) -> String {
    let full_stars = rating.floor() as u32;
    let has_half = rating.fract() >= 0.5;
    let empty_stars = 5 - full_stars.min(5) - if has_half { 1 } else { 0 };

    let mut html = String::from(r#"<span class="stars">"#);
    for _ in 0..full_stars.min(5) {
        html.push_str(r#"<span class="star full">★</span>"#);
    }
    if has_half {
        html.push_str(r#"<span class="star half">★</span>"#);
    }
    for _ in 0..empty_stars {
        html.push_str(r#"<span class="star empty">☆</span>"#);
    }
    html.push_str("</span>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"R&D"</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_stars_counts() {
        let html = render_stars(3.5);
        assert_eq!(html.matches(r#"star full"#).count(), 3);
        assert_eq!(html.matches(r#"star half"#).count(), 1);
        assert_eq!(html.matches(r#"star empty"#).count(), 1);
    }

    #[test]
    fn test_stars_full_score() {
        let html = render_stars(5.0);
        assert_eq!(html.matches(r#"star full"#).count(), 5);
        assert_eq!(html.matches(r#"star empty"#).count(), 0);
    }
}
