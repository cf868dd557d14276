//! Catalog domain types and query logic for the TrendyCloth storefront.
//!
//! This crate is the data side of the storefront demo:
//!
//! - **Catalog**: products, color swatches, categories, reviews
//! - **Search**: free-text filtering and sorting over an in-memory catalog
//! - **Purchase**: quantity/payment-plan quotes against a wallet balance
//! - **Demo**: the deterministic mock catalog the views render
//!
//! Everything operates on plain in-memory collections; there is no storage
//! layer and no network surface.
//!
//! # Example
//!
//! ```rust
//! use trendy_commerce::prelude::*;
//!
//! let catalog = trendy_commerce::demo::demo_catalog();
//! let hits = search::query(&catalog, "shirt", SortKey::PriceLow);
//! for product in &hits {
//!     println!("{}: {}", product.name, product.price);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod demo;
pub mod purchase;
pub mod search;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, ProductColor, Review};

    // Search
    pub use crate::search::{self, CatalogQuery, SortKey};

    // Purchase
    pub use crate::purchase::{PaymentPlan, PurchaseQuote, Receipt, Wallet, MAX_QUANTITY};
}
