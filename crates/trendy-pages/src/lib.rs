//! HTML page renderers for the TrendyCloth storefront.
//!
//! Every page is a pure function from domain data to an HTML string; the
//! engines in `trendy-commerce` and `trendy-ui` decide *what* to show and
//! these renderers only lay it out. No I/O happens here.

mod markup;
mod route;
mod shell;

pub mod sections;

pub use route::Route;
pub use shell::{HeadContent, Shell};

use trendy_commerce::demo;
use trendy_commerce::prelude::*;
use trendy_ui::carousel::Carousel;
use trendy_ui::{Breakpoint, CarouselSnapshot, ProductPageState, SearchPanel};

/// Render a parsed route against the demo data.
///
/// This is what the CLI (or any host shell) calls: it assembles the view
/// state a browsing session would hold and hands it to the section
/// renderers.
pub fn render_route(route: &Route) -> String {
    let catalog = demo::demo_catalog();

    match route {
        Route::Home => {
            let hero = demo::hero_products();
            // Fresh mount: slide zero, auto-advance on, desktop viewport.
            let carousel = Carousel::new(hero.len(), Breakpoint::Desktop.visible_count());
            let snapshot = CarouselSnapshot::from(&carousel);
            let featured: Vec<Product> = catalog.iter().take(8).cloned().collect();
            sections::home::render_home(&hero, &snapshot, &featured, &demo::demo_categories())
        }
        Route::Products => sections::listing::render_listing("All Products", &catalog),
        Route::Category(slug) => match demo::demo_categories()
            .into_iter()
            .find(|c| c.id.as_str() == slug.as_str())
        {
            Some(category) => {
                let products: Vec<Product> = catalog
                    .iter()
                    .filter(|p| category.contains(p))
                    .cloned()
                    .collect();
                sections::listing::render_listing(&category.name, &products)
            }
            None => sections::not_found::render_not_found(),
        },
        Route::Categories => sections::categories::render_categories(&demo::demo_categories()),
        Route::Search(query) => {
            let mut panel = SearchPanel::new(catalog);
            panel.set_query(query.raw.clone());
            panel.set_sort(query.sort);
            sections::search::render_search(&panel)
        }
        Route::Product(id) => match catalog.iter().find(|p| &p.id == id) {
            Some(product) => {
                let reviews = demo::demo_reviews(&product.id);
                let state = ProductPageState::new(product.clone(), reviews);
                sections::product::render_product_detail(&state)
            }
            None => sections::not_found::render_not_found(),
        },
        Route::NotFound => sections::not_found::render_not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_home_contains_hero_and_footer() {
        let html = render_route(&Route::Home);
        assert!(html.contains("hero-carousel"));
        assert!(html.contains("TrendyCloth"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_render_unknown_product_is_not_found() {
        let html = render_route(&Route::Product("nope".into()));
        assert!(html.contains("404"));
    }

    #[test]
    fn test_render_category_filters_products() {
        let html = render_route(&Route::Category("footwear".to_string()));
        assert!(html.contains("Sport Running Shoes"));
        assert!(!html.contains("Designer Denim Jacket"));
    }
}
