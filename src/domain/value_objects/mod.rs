//! Value objects shared across pricing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money value object. Amounts stay in `Decimal` so repeated price
/// recalculation never accumulates float error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self { amount, currency: currency.to_string() }
    }
    /// Storefront currency shorthand.
    pub fn brl(amount: Decimal) -> Self {
        Self::new(amount, "BRL")
    }
    pub fn amount(&self) -> Decimal {
        self.amount
    }
    pub fn currency(&self) -> &str {
        &self.currency
    }
    /// Scales the amount by `factor`, rounding to cents.
    pub fn scale(&self, factor: Decimal) -> Money {
        Money::new((self.amount * factor).round_dp(2), &self.currency)
    }
}
