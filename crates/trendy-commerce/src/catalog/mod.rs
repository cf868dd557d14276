//! Catalog types: products, categories, reviews.

mod category;
mod product;
mod review;

pub use category::Category;
pub use product::{Product, ProductColor};
pub use review::Review;

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
