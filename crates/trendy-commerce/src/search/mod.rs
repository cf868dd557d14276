//! Catalog search: free-text filtering and sorting.

mod engine;
mod query;
mod sort;

pub use engine::query;
pub use query::CatalogQuery;
pub use sort::SortKey;
