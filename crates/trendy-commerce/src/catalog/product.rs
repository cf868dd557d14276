//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A color swatch offered for a product.
///
/// `image_index` points at the gallery image showing the product in this
/// color, so selecting a swatch can switch the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductColor {
    /// Display name (e.g., "Navy").
    pub name: String,
    /// CSS hex value (e.g., "#1E40AF").
    pub hex: String,
    /// Index into the product's image gallery.
    pub image_index: usize,
}

impl ProductColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>, image_index: usize) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
            image_index,
        }
    }
}

/// A catalog entry.
///
/// Products are supplied wholesale by the data source and are immutable for
/// the duration of any query. `name` is the primary search key and the
/// category display text the secondary one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category display text (e.g., "Men", "Accessories").
    pub category: String,
    /// Current price.
    pub price: Money,
    /// Pre-sale price. Present implies the product is on sale; when
    /// present it is >= `price`.
    pub original_price: Option<Money>,
    /// Average rating in [0, 5], if the product has been rated.
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// New-arrival flag.
    pub is_new: bool,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// Full description for the detail page.
    pub description: Option<String>,
    /// Gallery image URLs; the first is the listing thumbnail.
    pub images: Vec<String>,
    /// Color swatches.
    pub colors: Vec<ProductColor>,
    /// Available sizes (e.g., "S", "M", "L").
    pub sizes: Vec<String>,
    /// Feature bullets for the detail page.
    pub features: Vec<String>,
}

impl Product {
    /// Create a minimal in-stock product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            original_price: None,
            rating: None,
            review_count: 0,
            is_new: false,
            in_stock: true,
            description: None,
            images: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Set the pre-sale price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        debug_assert!(original.amount_cents >= self.price.amount_cents);
        self.original_price = Some(original);
        self
    }

    /// Set the rating and review count.
    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = review_count;
        self
    }

    /// Mark as a new arrival.
    pub fn with_new_flag(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image gallery.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Set the color swatches.
    pub fn with_colors(mut self, colors: Vec<ProductColor>) -> Self {
        self.colors = colors;
        self
    }

    /// Set the available sizes.
    pub fn with_sizes(mut self, sizes: &[&str]) -> Self {
        self.sizes = sizes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set the feature bullets.
    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = features.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Mark as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Check if this product is on sale (original price above current).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<u32> {
        self.original_price.and_then(|op| {
            if op.amount_cents > self.price.amount_cents {
                let savings = op.amount_cents - self.price.amount_cents;
                Some(((savings as f64 / op.amount_cents as f64) * 100.0).round() as u32)
            } else {
                None
            }
        })
    }

    /// Rating with missing treated as zero, for sort comparisons.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Check whether a case-folded needle is a substring of the name or
    /// category. Substring containment only; no tokenizing.
    pub fn matches(&self, needle_folded: &str) -> bool {
        self.name.to_lowercase().contains(needle_folded)
            || self.category.to_lowercase().contains(needle_folded)
    }

    /// Listing thumbnail, if the product has any image.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn tee() -> Product {
        Product::new(
            "p-1",
            "Premium Cotton T-Shirt",
            "Men",
            Money::new(2999, Currency::USD),
        )
    }

    #[test]
    fn test_on_sale_requires_higher_original() {
        let p = tee().with_original_price(Money::new(3999, Currency::USD));
        assert!(p.is_on_sale());
        assert_eq!(p.discount_percentage(), Some(25));

        let p = tee().with_original_price(Money::new(2999, Currency::USD));
        assert!(!p.is_on_sale());
        assert_eq!(p.discount_percentage(), None);
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        let p = tee();
        assert!(p.matches("cotton"));
        assert!(p.matches("men"));
        assert!(!p.matches("cotton tee"));
    }

    #[test]
    fn test_rating_or_zero() {
        assert_eq!(tee().rating_or_zero(), 0.0);
        assert_eq!(tee().with_rating(4.8, 324).rating_or_zero(), 4.8);
    }
}
