//! Sort keys for catalog queries.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Sort options for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Keep filter-pass order. Performs no ranking by match quality.
    #[default]
    Relevance,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// New arrivals first. This is a partial ordering on the `is_new`
    /// flag, not a recency sort.
    Newest,
    /// Highest rated first; unrated counts as zero.
    Rating,
}

impl SortKey {
    /// All keys, in the order the sort dropdown lists them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Newest,
        SortKey::Rating,
    ];

    /// Parse a sort key token.
    ///
    /// Anything outside the supported set is a configuration error; there
    /// is no fallback key.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        match s {
            "relevance" => Ok(SortKey::Relevance),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "newest" => Ok(SortKey::Newest),
            "rating" => Ok(SortKey::Rating),
            other => Err(StoreError::UnknownSortKey(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Rating => "Highest Rated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_all_keys() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        for bad in ["best-selling", "RELEVANCE", "price_asc", ""] {
            let err = SortKey::parse(bad).unwrap_err();
            assert!(matches!(err, StoreError::UnknownSortKey(_)));
        }
    }
}
