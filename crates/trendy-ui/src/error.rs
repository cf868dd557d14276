//! UI state errors.

use thiserror::Error;
use trendy_commerce::StoreError;

/// Errors that can occur driving view state.
#[derive(Error, Debug)]
pub enum UiError {
    /// `go_to` was asked for a slide outside `[0, max_index]`.
    ///
    /// Out-of-range jumps are precondition violations and are rejected;
    /// they never wrap or clamp.
    #[error("Slide index {index} out of range (max {max})")]
    SlideOutOfRange { index: usize, max: usize },

    /// A gallery image or color swatch index outside the product's lists.
    #[error("{what} index {index} out of range (max {max})")]
    SelectionOutOfRange {
        what: &'static str,
        index: usize,
        max: usize,
    },

    /// The requested size is not offered for this product.
    #[error("Size {0:?} is not available for this product")]
    UnknownSize(String),

    /// Purchase attempted without choosing a size.
    #[error("Select a size before continuing")]
    MissingSize,

    /// The carousel task has already shut down.
    #[error("Carousel is no longer running")]
    CarouselStopped,

    /// Domain-level failure bubbled up from the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}
