//! Store error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Sort key string is not one of the supported keys.
    ///
    /// Unknown keys are a configuration error and fail fast; the engine
    /// never silently falls back to relevance.
    #[error("Unknown sort key: {0:?}")]
    UnknownSortKey(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Quantity outside the allowed purchase range.
    #[error("Invalid quantity: {0} (allowed 1..={1})")]
    InvalidQuantity(i64, i64),

    /// Product cannot be purchased right now.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Wallet balance does not cover the amount due.
    #[error("Insufficient balance: {required} due, {available} available")]
    InsufficientBalance {
        required: crate::money::Money,
        available: crate::money::Money,
    },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Review comment is blank.
    #[error("Review comment must not be empty")]
    EmptyReviewComment,

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::ValidationError(e.to_string())
    }
}
