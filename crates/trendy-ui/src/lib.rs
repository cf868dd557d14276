//! View-state engines for the TrendyCloth storefront.
//!
//! Each view owns an explicit state struct and drives it through the
//! methods here; there are no module-level singletons. The crate covers:
//!
//! - **Carousel**: cyclic slide index with auto-advance
//!   ([`carousel::Carousel`]) and the timer task that drives it
//!   ([`autoplay::CarouselHandle`])
//! - **Viewport**: responsive breakpoints and carousel capacity
//! - **Search panel**: query text + sort key with live recomputation
//! - **Product page**: gallery/color/size/quantity/wishlist/purchase state
//!
//! All transitions run to completion in response to a single event; the
//! only asynchronous piece is the auto-advance timer, which is an ordinary
//! tokio task with a cancellation handle.

pub mod autoplay;
pub mod carousel;
pub mod error;
pub mod product_page;
pub mod search_panel;
pub mod viewport;

pub use autoplay::{CarouselHandle, CarouselSnapshot, AUTO_ADVANCE_INTERVAL};
pub use carousel::Carousel;
pub use error::UiError;
pub use product_page::ProductPageState;
pub use search_panel::SearchPanel;
pub use viewport::Breakpoint;
