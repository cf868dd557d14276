//! Product detail page state.

use crate::error::UiError;
use tracing::debug;
use trendy_commerce::prelude::*;

/// Everything the product detail view tracks between renders.
///
/// Owned by the view and mutated through these methods only; destroyed
/// with the view.
#[derive(Debug, Clone)]
pub struct ProductPageState {
    product: Product,
    reviews: Vec<Review>,
    selected_image: usize,
    selected_color: usize,
    selected_size: Option<String>,
    quantity: i64,
    wishlisted: bool,
    dialog_open: bool,
    plan: PaymentPlan,
}

impl ProductPageState {
    /// Create the initial state for a product and its seed reviews.
    pub fn new(product: Product, reviews: Vec<Review>) -> Self {
        Self {
            product,
            reviews,
            selected_image: 0,
            selected_color: 0,
            selected_size: None,
            quantity: 1,
            wishlisted: false,
            dialog_open: false,
            plan: PaymentPlan::Full,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    pub fn selected_color(&self) -> usize {
        self.selected_color
    }

    pub fn selected_size(&self) -> Option<&str> {
        self.selected_size.as_deref()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_wishlisted(&self) -> bool {
        self.wishlisted
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn payment_plan(&self) -> PaymentPlan {
        self.plan
    }

    /// Show a specific gallery image.
    pub fn select_image(&mut self, index: usize) -> Result<(), UiError> {
        if index >= self.product.images.len() {
            return Err(UiError::SelectionOutOfRange {
                what: "Image",
                index,
                max: self.product.images.len().saturating_sub(1),
            });
        }
        self.selected_image = index;
        Ok(())
    }

    /// Pick a color swatch. Also switches the gallery to the swatch's
    /// image, so the photo always shows the chosen color.
    pub fn select_color(&mut self, index: usize) -> Result<(), UiError> {
        let color = self.product.colors.get(index).ok_or_else(|| {
            UiError::SelectionOutOfRange {
                what: "Color",
                index,
                max: self.product.colors.len().saturating_sub(1),
            }
        })?;

        let image_index = color
            .image_index
            .min(self.product.images.len().saturating_sub(1));
        self.selected_color = index;
        self.selected_image = image_index;
        Ok(())
    }

    /// Pick a size; it must be one the product offers.
    pub fn select_size(&mut self, size: &str) -> Result<(), UiError> {
        if !self.product.sizes.iter().any(|s| s == size) {
            return Err(UiError::UnknownSize(size.to_string()));
        }
        self.selected_size = Some(size.to_string());
        Ok(())
    }

    /// Bump the quantity, capped at [`MAX_QUANTITY`].
    pub fn increment_quantity(&mut self) {
        self.quantity = (self.quantity + 1).min(MAX_QUANTITY);
    }

    /// Drop the quantity, floored at one.
    pub fn decrement_quantity(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    /// Flip the wishlist heart.
    pub fn toggle_wishlist(&mut self) {
        self.wishlisted = !self.wishlisted;
    }

    /// Post a review; blank comments are rejected, new reviews go first.
    pub fn add_review(
        &mut self,
        user_name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<&Review, UiError> {
        let review = Review::new(self.product.id.clone(), user_name, comment)?;
        self.reviews.insert(0, review);
        Ok(&self.reviews[0])
    }

    /// Open the purchase-confirmation dialog. A size must be chosen first
    /// when the product offers sizes.
    pub fn begin_purchase(&mut self) -> Result<(), UiError> {
        if !self.product.sizes.is_empty() && self.selected_size.is_none() {
            return Err(UiError::MissingSize);
        }
        self.dialog_open = true;
        Ok(())
    }

    /// Close the dialog without buying.
    pub fn cancel_purchase(&mut self) {
        self.dialog_open = false;
    }

    /// Pick how to pay.
    pub fn set_payment_plan(&mut self, plan: PaymentPlan) {
        self.plan = plan;
    }

    /// Price the order as currently configured.
    pub fn quote(&self) -> Result<PurchaseQuote, UiError> {
        Ok(PurchaseQuote::new(&self.product, self.quantity, self.plan)?)
    }

    /// Confirm the purchase against the buyer's wallet. The dialog closes
    /// only on success; a failed charge leaves it open for another try.
    pub fn confirm_purchase(&mut self, wallet: &mut Wallet) -> Result<Receipt, UiError> {
        let quote = self.quote()?;
        let receipt = wallet.confirm(&quote)?;
        debug!(
            product = %quote.product_id,
            amount = %receipt.amount_paid,
            "purchase confirmed"
        );
        self.dialog_open = false;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendy_commerce::demo;
    use trendy_commerce::money::{Currency, Money};

    fn rich_product() -> Product {
        demo::demo_catalog()
            .into_iter()
            .find(|p| p.id.as_str() == "prod-1")
            .unwrap()
    }

    fn state() -> ProductPageState {
        let product = rich_product();
        let reviews = demo::demo_reviews(&product.id);
        ProductPageState::new(product, reviews)
    }

    #[test]
    fn test_select_color_switches_image() {
        let mut s = state();
        s.select_color(2).unwrap();
        assert_eq!(s.selected_color(), 2);
        assert_eq!(s.selected_image(), 2);
    }

    #[test]
    fn test_select_color_out_of_range() {
        let mut s = state();
        assert!(matches!(
            s.select_color(9),
            Err(UiError::SelectionOutOfRange { what: "Color", .. })
        ));
    }

    #[test]
    fn test_quantity_clamps_both_ends() {
        let mut s = state();
        s.decrement_quantity();
        assert_eq!(s.quantity(), 1);
        for _ in 0..20 {
            s.increment_quantity();
        }
        assert_eq!(s.quantity(), MAX_QUANTITY);
    }

    #[test]
    fn test_purchase_requires_size() {
        let mut s = state();
        assert!(matches!(s.begin_purchase(), Err(UiError::MissingSize)));

        s.select_size("M").unwrap();
        s.begin_purchase().unwrap();
        assert!(s.is_dialog_open());
    }

    #[test]
    fn test_unknown_size_rejected() {
        let mut s = state();
        assert!(matches!(
            s.select_size("XXXL"),
            Err(UiError::UnknownSize(_))
        ));
    }

    #[test]
    fn test_sizeless_product_skips_size_gate() {
        let product = Product::new("p-x", "Scarf", "Accessories", Money::new(4599, Currency::USD));
        let mut s = ProductPageState::new(product, Vec::new());
        s.begin_purchase().unwrap();
        assert!(s.is_dialog_open());
    }

    #[test]
    fn test_confirm_purchase_closes_dialog_and_debits() {
        let mut s = state();
        let mut wallet = demo::demo_wallet();
        s.select_size("L").unwrap();
        s.increment_quantity();
        s.begin_purchase().unwrap();
        s.set_payment_plan(PaymentPlan::Deposit);

        let receipt = s.confirm_purchase(&mut wallet).unwrap();
        assert!(!s.is_dialog_open());
        // Two tees at $29.99, half now.
        assert_eq!(receipt.amount_paid.amount_cents, 2999);
        assert_eq!(receipt.outstanding.amount_cents, 2999);
    }

    #[test]
    fn test_failed_charge_keeps_dialog_open() {
        let mut s = state();
        let mut wallet = Wallet::new(Money::new(100, Currency::USD));
        s.select_size("L").unwrap();
        s.begin_purchase().unwrap();

        let err = s.confirm_purchase(&mut wallet).unwrap_err();
        assert!(matches!(
            err,
            UiError::Store(StoreError::InsufficientBalance { .. })
        ));
        assert!(s.is_dialog_open());
    }

    #[test]
    fn test_add_review_prepends() {
        let mut s = state();
        let before = s.reviews().len();
        s.add_review("Noor", "Lovely fabric.").unwrap();
        assert_eq!(s.reviews().len(), before + 1);
        assert_eq!(s.reviews()[0].comment, "Lovely fabric.");
    }

    #[test]
    fn test_blank_review_rejected() {
        let mut s = state();
        assert!(matches!(
            s.add_review("Noor", "   "),
            Err(UiError::Store(StoreError::EmptyReviewComment))
        ));
    }
}
