//! The catalog query engine.

use crate::catalog::Product;
use crate::search::SortKey;
use std::cmp::Reverse;

/// Filter and sort a catalog.
///
/// Pure function of `(products, raw_query, sort)`: an empty query passes
/// every product, otherwise a product passes iff the case-folded query is a
/// substring of its name or category. Sorting is applied after filtering
/// and is stable, so ties keep their original relative order. Calling twice
/// with identical inputs yields an identical result.
pub fn query(products: &[Product], raw_query: &str, sort: SortKey) -> Vec<Product> {
    let needle = raw_query.to_lowercase();

    let mut results: Vec<Product> = products
        .iter()
        .filter(|p| needle.is_empty() || p.matches(&needle))
        .cloned()
        .collect();

    match sort {
        // Deliberate no-op: relevance keeps filter-pass order.
        SortKey::Relevance => {}
        SortKey::PriceLow => results.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceHigh => results.sort_by_key(|p| Reverse(p.price.amount_cents)),
        // New arrivals first; within each group original order survives.
        SortKey::Newest => results.sort_by_key(|p| !p.is_new),
        SortKey::Rating => {
            results.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()))
        }
    }

    results
}
