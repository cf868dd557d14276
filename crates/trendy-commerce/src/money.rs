//! Money type for product prices and wallet balances.
//!
//! Amounts are stored in the smallest unit of the currency (cents, halalas)
//! to keep price comparisons and sums exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Currencies the storefront displays prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    /// Saudi riyal; symbol renders after the amount.
    SAR,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::SAR => "SAR",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::SAR => "\u{631}.\u{633}",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Whether the symbol is written after the amount.
    pub fn symbol_trails(&self) -> bool {
        matches!(self, Currency::SAR)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "SAR" => Some(Currency::SAR),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use trendy_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(29.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 2999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$29.99" or "299.00 ر.س").
    pub fn display(&self) -> String {
        if self.currency.symbol_trails() {
            format!("{:.2} {}", self.to_decimal(), self.currency.symbol())
        } else {
            format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
        }
    }

    /// Format the bare amount (e.g., "29.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Multiply by a scalar (e.g., a quantity).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: f64) -> Money {
        let amount = (self.amount_cents as f64 * percent / 100.0).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Try to add another Money value; None on currency mismatch.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Try to subtract another Money value; None on currency mismatch.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(29.99, Currency::USD);
        assert_eq!(m.amount_cents, 2999);
    }

    #[test]
    fn test_money_display_leading_symbol() {
        let m = Money::new(2999, Currency::USD);
        assert_eq!(m.display(), "$29.99");
    }

    #[test]
    fn test_money_display_trailing_symbol() {
        let m = Money::new(29900, Currency::SAR);
        assert_eq!(m.display(), "299.00 \u{631}.\u{633}");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(2999, Currency::USD);
        assert_eq!(m.multiply(3).amount_cents, 8997);
    }

    #[test]
    fn test_money_percentage_rounds_to_cent() {
        let m = Money::new(8997, Currency::USD);
        // Half of $89.97 is $44.985, rounded to $44.99.
        assert_eq!(m.percentage(50.0).amount_cents, 4499);
    }

    #[test]
    fn test_money_try_add_currency_mismatch() {
        let usd = Money::new(100, Currency::USD);
        let sar = Money::new(100, Currency::SAR);
        assert!(usd.try_add(&sar).is_none());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_add_panics_on_mismatch() {
        let usd = Money::new(100, Currency::USD);
        let eur = Money::new(100, Currency::EUR);
        let _ = usd + eur;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("sar"), Some(Currency::SAR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
