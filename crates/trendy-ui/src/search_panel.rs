//! Search page state: query text, sort key, and the computed result view.

use trendy_commerce::prelude::*;
use trendy_commerce::StoreError;

/// State behind the search results page.
///
/// Owns the catalog it searches plus the current [`CatalogQuery`]; every
/// mutation re-runs the query so `results` always reflects the inputs.
/// Nothing is persisted across sessions.
#[derive(Debug, Clone)]
pub struct SearchPanel {
    catalog: Vec<Product>,
    query: CatalogQuery,
    results: Vec<Product>,
}

impl SearchPanel {
    /// Create a panel showing the whole catalog in original order.
    pub fn new(catalog: Vec<Product>) -> Self {
        let query = CatalogQuery::new();
        let results = query.run(&catalog);
        Self {
            catalog,
            query,
            results,
        }
    }

    /// Create a panel from a URL query string (the routing layer's
    /// `?q=...&sort=...`). Fails fast on an unsupported sort key.
    pub fn from_query_string(catalog: Vec<Product>, qs: &str) -> Result<Self, StoreError> {
        let query = CatalogQuery::from_query_string(qs)?;
        let results = query.run(&catalog);
        Ok(Self {
            catalog,
            query,
            results,
        })
    }

    /// Replace the search text and recompute.
    pub fn set_query(&mut self, raw: impl Into<String>) -> &[Product] {
        self.query.raw = raw.into();
        self.recompute();
        &self.results
    }

    /// Replace the sort key and recompute.
    pub fn set_sort(&mut self, sort: SortKey) -> &[Product] {
        self.query.sort = sort;
        self.recompute();
        &self.results
    }

    /// Clear the search text (keeps the sort key).
    pub fn clear(&mut self) -> &[Product] {
        self.set_query("")
    }

    fn recompute(&mut self) {
        self.results = self.query.run(&self.catalog);
    }

    /// Current query state.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Current result view.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// Number of products in the current view.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Whether a non-empty search produced nothing.
    pub fn is_no_match(&self) -> bool {
        !self.query.is_empty() && self.results.is_empty()
    }
}
