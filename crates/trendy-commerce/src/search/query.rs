//! Query state: the free-text string plus sort key a view holds.

use crate::catalog::Product;
use crate::error::StoreError;
use crate::search::{engine, SortKey};
use serde::{Deserialize, Serialize};

/// A catalog query: raw search text and sort key.
///
/// The routing layer feeds this from the URL (`?q=...&sort=...`) and
/// reflects changes back; the engine itself only sees plain strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Free-text search string, possibly empty.
    pub raw: String,
    /// Sort key.
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create an empty relevance query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.raw = q.into();
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Parse from a URL query string (e.g., `q=red+shirt&sort=price-low`).
    ///
    /// Unknown keys are ignored; an unsupported `sort` value is an error.
    pub fn from_query_string(qs: &str) -> Result<Self, StoreError> {
        let mut query = CatalogQuery::new();

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = urlencoding_decode(parts.next().unwrap_or(""));

            match key {
                "q" => query.raw = value,
                "sort" => query.sort = SortKey::parse(&value)?,
                _ => {}
            }
        }

        Ok(query)
    }

    /// Serialize back to a URL query string.
    pub fn to_query_string(&self) -> String {
        if self.raw.is_empty() {
            format!("sort={}", self.sort.as_str())
        } else {
            format!(
                "q={}&sort={}",
                urlencoding_encode(&self.raw),
                self.sort.as_str()
            )
        }
    }

    /// Whether there is no search text.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Run this query against a catalog.
    pub fn run(&self, products: &[Product]) -> Vec<Product> {
        engine::query(products, &self.raw, self.sort)
    }
}

/// Simple URL decoding.
fn urlencoding_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                result.push(byte as char);
            }
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

/// Simple URL encoding.
fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query_string() {
        let q = CatalogQuery::from_query_string("q=red+shirt&sort=price-low").unwrap();
        assert_eq!(q.raw, "red shirt");
        assert_eq!(q.sort, SortKey::PriceLow);
    }

    #[test]
    fn test_missing_params_default() {
        let q = CatalogQuery::from_query_string("").unwrap();
        assert!(q.is_empty());
        assert_eq!(q.sort, SortKey::Relevance);
    }

    #[test]
    fn test_unknown_sort_fails_fast() {
        let err = CatalogQuery::from_query_string("q=tee&sort=cheapest").unwrap_err();
        assert!(matches!(err, StoreError::UnknownSortKey(_)));
    }

    #[test]
    fn test_unknown_params_ignored() {
        let q = CatalogQuery::from_query_string("q=tee&page=3&utm=x").unwrap();
        assert_eq!(q.raw, "tee");
    }

    #[test]
    fn test_query_string_round_trip() {
        let q = CatalogQuery::new()
            .with_query("red shirt")
            .with_sort(SortKey::Rating);
        let parsed = CatalogQuery::from_query_string(&q.to_query_string()).unwrap();
        assert_eq!(parsed, q);
    }

    #[test]
    fn test_percent_decoding() {
        let q = CatalogQuery::from_query_string("q=50%25+off").unwrap();
        assert_eq!(q.raw, "50% off");
    }
}
