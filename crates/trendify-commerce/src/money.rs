//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's minor unit (paise for INR) so
//! totals never pick up floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Number of minor units per major unit.
    pub fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
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

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units (e.g. rupees).
    ///
    /// ```
    /// use trendify_commerce::money::{Currency, Money};
    /// let price = Money::from_major(499, Currency::INR);
    /// assert_eq!(price.amount_minor, 49_900);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount * currency.minor_per_major(), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Whole major units, truncated toward zero.
    pub fn major(&self) -> i64 {
        self.amount_minor / self.currency.minor_per_major()
    }

    /// Leftover minor units after `major()`, always non-negative.
    pub fn minor_remainder(&self) -> i64 {
        (self.amount_minor % self.currency.minor_per_major()).abs()
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_major() as f64
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, quantity: u32) -> Option<Money> {
        self.amount_minor
            .checked_mul(i64::from(quantity))
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning None on currency mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let m = Money::from_major(1299, Currency::INR);
        assert_eq!(m.amount_minor, 129_900);
        assert_eq!(m.major(), 1299);
        assert_eq!(m.minor_remainder(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(49_950, Currency::INR).to_string(), "\u{20b9}499.50");
        assert_eq!(Money::new(4999, Currency::USD).to_string(), "$49.99");
    }

    #[test]
    fn test_multiply_and_sum() {
        let price = Money::from_major(499, Currency::INR);
        let line = price.try_multiply(2).unwrap();
        assert_eq!(line, Money::from_major(998, Currency::INR));

        let items = [line, Money::from_major(2, Currency::INR)];
        let total = Money::try_sum(items.iter(), Currency::INR).unwrap();
        assert_eq!(total.major(), 1000);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total = Money::try_sum(std::iter::empty(), Currency::INR).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_currency_mismatch_and_overflow() {
        let inr = Money::from_major(1, Currency::INR);
        let usd = Money::from_major(1, Currency::USD);
        assert_eq!(inr.try_add(&usd), None);

        let huge = Money::new(i64::MAX / 2 + 1, Currency::INR);
        assert_eq!(huge.try_multiply(2), None);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
