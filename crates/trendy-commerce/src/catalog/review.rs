//! Product reviews.

use crate::catalog::current_timestamp;
use crate::error::StoreError;
use crate::ids::{ProductId, ReviewId};
use serde::{Deserialize, Serialize};

/// A customer review on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Product this review belongs to.
    pub product_id: ProductId,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Review body.
    pub comment: String,
    /// Unix timestamp of posting.
    pub posted_at: i64,
}

impl Review {
    /// Create a review, validating that the comment is not blank.
    pub fn new(
        product_id: ProductId,
        user_name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let comment = comment.into();
        if comment.trim().is_empty() {
            return Err(StoreError::EmptyReviewComment);
        }

        Ok(Self {
            id: ReviewId::generate(),
            product_id,
            user_name: user_name.into(),
            comment: comment.trim().to_string(),
            posted_at: current_timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_trims_comment() {
        let r = Review::new(ProductId::new("p-1"), "Sara", "  Great fit!  ").unwrap();
        assert_eq!(r.comment, "Great fit!");
    }

    #[test]
    fn test_blank_comment_rejected() {
        let err = Review::new(ProductId::new("p-1"), "Sara", "   ").unwrap_err();
        assert!(matches!(err, StoreError::EmptyReviewComment));
    }
}
