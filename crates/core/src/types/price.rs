//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Adding two prices keeps the left-hand currency; the catalog only ever
/// holds one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in whole units of the default currency.
    #[must_use]
    pub fn whole(units: i64) -> Self {
        Self::new(Decimal::from(units), CurrencyCode::default())
    }

    /// A zero price in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::USD)
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.amount += rhs.amount;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(Price::whole(10) + Price::whole(5), Price::whole(15));
    }

    #[test]
    fn test_add_assign() {
        let mut total = Price::zero();
        total += Price::whole(8);
        total += Price::whole(8);
        assert_eq!(total, Price::whole(16));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::whole(10), Price::whole(5), Price::whole(6)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::whole(21));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::whole(10).to_string(), "$10.00");
        assert_eq!(Price::new(Decimal::new(1999, 2), CurrencyCode::GBP).to_string(), "£19.99");
    }

    #[test]
    fn test_zero() {
        assert!(Price::zero().is_zero());
        assert!(!Price::whole(1).is_zero());
        assert_eq!(Price::default(), Price::zero());
    }
}
