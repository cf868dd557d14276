//! The storefront route table.

use trendy_commerce::prelude::*;
use trendy_commerce::StoreError;

/// Every page the storefront can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Products,
    Product(ProductId),
    Category(String),
    Categories,
    Search(CatalogQuery),
    NotFound,
}

impl Route {
    /// Parse a path (optionally with a query string) into a route.
    ///
    /// Unknown paths map to [`Route::NotFound`]; a malformed `sort`
    /// parameter on the search route is a hard error, matching the query
    /// engine's fail-fast policy.
    pub fn parse(path_with_query: &str) -> Result<Self, StoreError> {
        let mut parts = path_with_query.splitn(2, '?');
        let path = parts.next().unwrap_or("/");
        let query_string = parts.next().unwrap_or("");

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        Ok(match segments.as_slice() {
            [] => Route::Home,
            ["products"] => Route::Products,
            ["product", id] => Route::Product(ProductId::new(*id)),
            ["category", slug] => Route::Category(slug.to_string()),
            ["categories"] => Route::Categories,
            ["search"] => Route::Search(CatalogQuery::from_query_string(query_string)?),
            _ => Route::NotFound,
        })
    }

    /// The canonical path for this route, query string included.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Products => "/products".to_string(),
            Route::Product(id) => format!("/product/{}", id),
            Route::Category(slug) => format!("/category/{}", slug),
            Route::Categories => "/categories".to_string(),
            Route::Search(query) => format!("/search?{}", query.to_query_string()),
            Route::NotFound => "/404".to_string(),
        }
    }
}
