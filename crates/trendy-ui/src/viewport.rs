//! Responsive breakpoints.

use serde::{Deserialize, Serialize};

/// Widths below this many CSS pixels are treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// The two layout classes the storefront distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Breakpoint {
    Mobile,
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width.
    pub fn from_width(px: u32) -> Self {
        if px < MOBILE_BREAKPOINT {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    /// Carousel viewport capacity at this breakpoint.
    pub fn visible_count(&self) -> usize {
        match self {
            Breakpoint::Mobile => 1,
            Breakpoint::Desktop => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Desktop => "desktop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(Breakpoint::from_width(767), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768), Breakpoint::Desktop);
    }

    #[test]
    fn test_visible_counts() {
        assert_eq!(Breakpoint::Mobile.visible_count(), 1);
        assert_eq!(Breakpoint::Desktop.visible_count(), 4);
    }
}
