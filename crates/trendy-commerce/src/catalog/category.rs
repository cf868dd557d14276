//! Category directory entries.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A browsable category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique, URL-friendly identifier (e.g., "men").
    pub id: CategoryId,
    /// Display name; products reference categories by this text.
    pub name: String,
    /// Short blurb for the directory page.
    pub description: String,
    /// Number of products filed under this category.
    pub product_count: u32,
}

impl Category {
    /// Create a category with a zero product count.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            product_count: 0,
        }
    }

    /// Check whether a product is filed under this category.
    pub fn contains(&self, product: &Product) -> bool {
        product.category.eq_ignore_ascii_case(&self.name)
    }

    /// Recount products from a catalog slice.
    pub fn with_count_from(mut self, catalog: &[Product]) -> Self {
        self.product_count = catalog.iter().filter(|p| self.contains(p)).count() as u32;
        self
    }

    /// Path to this category's listing page.
    pub fn path(&self) -> String {
        format!("/category/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_contains_ignores_case() {
        let cat = Category::new("men", "Men", "Menswear");
        let p = Product::new("p-1", "Polo", "MEN", Money::new(2499, Currency::USD));
        assert!(cat.contains(&p));
    }

    #[test]
    fn test_count_from_catalog() {
        let catalog = vec![
            Product::new("p-1", "Polo", "Men", Money::new(2499, Currency::USD)),
            Product::new("p-2", "Scarf", "Accessories", Money::new(4599, Currency::USD)),
            Product::new("p-3", "Tee", "Men", Money::new(1999, Currency::USD)),
        ];
        let cat = Category::new("men", "Men", "Menswear").with_count_from(&catalog);
        assert_eq!(cat.product_count, 2);
    }
}
