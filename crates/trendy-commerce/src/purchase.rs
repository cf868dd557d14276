//! Purchase confirmation: quotes, payment plans, wallet balance.

use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::{ProductId, ReceiptId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Maximum quantity purchasable in one order.
pub const MAX_QUANTITY: i64 = 10;

/// Share of the total paid up front on the deposit plan.
pub const DEPOSIT_PERCENT: f64 = 50.0;

/// How the buyer settles the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentPlan {
    /// Pay the full amount now.
    #[default]
    Full,
    /// Pay half now, the rest on delivery.
    Deposit,
}

impl PaymentPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPlan::Full => "full",
            PaymentPlan::Deposit => "deposit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentPlan::Full => "Pay Full Amount",
            PaymentPlan::Deposit => "Pay 50% Now",
        }
    }
}

/// A priced order, ready to confirm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseQuote {
    /// Product being bought.
    pub product_id: ProductId,
    /// Product name, for the confirmation dialog.
    pub product_name: String,
    /// Units ordered.
    pub quantity: i64,
    /// Price per unit.
    pub unit_price: Money,
    /// Order total.
    pub total: Money,
    /// Amount charged now, per the payment plan.
    pub amount_due: Money,
    /// Selected payment plan.
    pub plan: PaymentPlan,
}

impl PurchaseQuote {
    /// Price an order for a product.
    ///
    /// Rejects out-of-stock products and quantities outside
    /// `1..=MAX_QUANTITY`.
    pub fn new(product: &Product, quantity: i64, plan: PaymentPlan) -> Result<Self, StoreError> {
        if !product.in_stock {
            return Err(StoreError::OutOfStock(product.name.clone()));
        }
        if !(1..=MAX_QUANTITY).contains(&quantity) {
            return Err(StoreError::InvalidQuantity(quantity, MAX_QUANTITY));
        }

        let total = product.price.multiply(quantity);
        let amount_due = match plan {
            PaymentPlan::Full => total,
            PaymentPlan::Deposit => total.percentage(DEPOSIT_PERCENT),
        };

        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            unit_price: product.price,
            total,
            amount_due,
            plan,
        })
    }

    /// Balance still owed after the up-front charge.
    pub fn outstanding(&self) -> Money {
        self.total
            .try_subtract(&self.amount_due)
            .unwrap_or_else(|| Money::zero(self.total.currency))
    }
}

/// Proof of a completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Unique receipt identifier.
    pub id: ReceiptId,
    /// Product bought.
    pub product_id: ProductId,
    /// Units bought.
    pub quantity: i64,
    /// Amount actually charged.
    pub amount_paid: Money,
    /// Remaining balance owed on a deposit plan (zero on full payment).
    pub outstanding: Money,
}

/// The buyer's store-credit balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    balance: Money,
}

impl Wallet {
    /// Create a wallet holding the given balance.
    pub fn new(balance: Money) -> Self {
        Self { balance }
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Charge a quote against the balance.
    ///
    /// Fails with `InsufficientBalance` when the amount due exceeds the
    /// balance, and with `CurrencyMismatch` when the quote is priced in a
    /// different currency. The balance is only debited on success.
    pub fn confirm(&mut self, quote: &PurchaseQuote) -> Result<Receipt, StoreError> {
        if quote.amount_due.currency != self.balance.currency {
            return Err(StoreError::CurrencyMismatch {
                expected: self.balance.currency.code().to_string(),
                got: quote.amount_due.currency.code().to_string(),
            });
        }
        if quote.amount_due.amount_cents > self.balance.amount_cents {
            return Err(StoreError::InsufficientBalance {
                required: quote.amount_due,
                available: self.balance,
            });
        }

        self.balance = self
            .balance
            .try_subtract(&quote.amount_due)
            .expect("currency checked above");

        Ok(Receipt {
            id: ReceiptId::generate(),
            product_id: quote.product_id.clone(),
            quantity: quote.quantity,
            amount_paid: quote.amount_due,
            outstanding: quote.outstanding(),
        })
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
    fn test_full_plan_charges_total() {
        let quote = PurchaseQuote::new(&tee(), 2, PaymentPlan::Full).unwrap();
        assert_eq!(quote.total.amount_cents, 5998);
        assert_eq!(quote.amount_due, quote.total);
        assert!(quote.outstanding().is_zero());
    }

    #[test]
    fn test_deposit_plan_charges_half() {
        let quote = PurchaseQuote::new(&tee(), 2, PaymentPlan::Deposit).unwrap();
        assert_eq!(quote.amount_due.amount_cents, 2999);
        assert_eq!(quote.outstanding().amount_cents, 2999);
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(matches!(
            PurchaseQuote::new(&tee(), 0, PaymentPlan::Full),
            Err(StoreError::InvalidQuantity(0, MAX_QUANTITY))
        ));
        assert!(matches!(
            PurchaseQuote::new(&tee(), 11, PaymentPlan::Full),
            Err(StoreError::InvalidQuantity(11, MAX_QUANTITY))
        ));
        assert!(PurchaseQuote::new(&tee(), 10, PaymentPlan::Full).is_ok());
    }

    #[test]
    fn test_out_of_stock_rejected() {
        let sold_out = tee().out_of_stock();
        assert!(matches!(
            PurchaseQuote::new(&sold_out, 1, PaymentPlan::Full),
            Err(StoreError::OutOfStock(_))
        ));
    }

    #[test]
    fn test_wallet_debits_on_success() {
        let mut wallet = Wallet::new(Money::new(125000, Currency::USD));
        let quote = PurchaseQuote::new(&tee(), 1, PaymentPlan::Full).unwrap();
        let receipt = wallet.confirm(&quote).unwrap();
        assert_eq!(receipt.amount_paid.amount_cents, 2999);
        assert_eq!(wallet.balance().amount_cents, 122001);
    }

    #[test]
    fn test_insufficient_balance_keeps_funds() {
        let mut wallet = Wallet::new(Money::new(1000, Currency::USD));
        let quote = PurchaseQuote::new(&tee(), 1, PaymentPlan::Full).unwrap();
        let err = wallet.confirm(&quote).unwrap_err();
        assert!(matches!(err, StoreError::InsufficientBalance { .. }));
        assert_eq!(wallet.balance().amount_cents, 1000);
    }

    #[test]
    fn test_deposit_fits_where_full_does_not() {
        let mut wallet = Wallet::new(Money::new(2000, Currency::USD));
        let full = PurchaseQuote::new(&tee(), 1, PaymentPlan::Full).unwrap();
        assert!(wallet.confirm(&full).is_err());

        let deposit = PurchaseQuote::new(&tee(), 1, PaymentPlan::Deposit).unwrap();
        let receipt = wallet.confirm(&deposit).unwrap();
        assert_eq!(receipt.outstanding.amount_cents, 1499);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut wallet = Wallet::new(Money::new(100000, Currency::SAR));
        let quote = PurchaseQuote::new(&tee(), 1, PaymentPlan::Full).unwrap();
        assert!(matches!(
            wallet.confirm(&quote),
            Err(StoreError::CurrencyMismatch { .. })
        ));
    }
}
