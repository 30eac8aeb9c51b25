//! Sale price derivation and the price integrity log entry.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Money;
use crate::{PricingError, Result};

/// Derives the sale price from cost and the stored margin multiplier.
///
/// Same formula the backend recalculation procedure runs; this copy exists
/// for admin previews and for verifying persisted prices. Multipliers that
/// are non-finite or `<= 1` never describe a sellable margin and are
/// rejected rather than clamped.
pub fn sale_price(cost: &Money, multiplier: f64) -> Result<Money> {
    let factor = Decimal::from_f64(multiplier)
        .filter(|f| *f > Decimal::ONE)
        .ok_or(PricingError::InvalidMultiplier(multiplier))?;
    Ok(cost.scale(factor))
}

/// One entry of the price integrity log, recorded whenever a margin change
/// rewrites a product price.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceChange {
    pub product_id: Uuid,
    pub cost: Money,
    pub previous_price: Option<Money>,
    pub new_price: Money,
    pub multiplier: f64,
    pub changed_at: DateTime<Utc>,
}

impl PriceChange {
    /// Prices the product at `cost * multiplier` and records the change.
    pub fn record(
        product_id: Uuid,
        cost: Money,
        previous_price: Option<Money>,
        multiplier: f64,
    ) -> Result<Self> {
        let new_price = sale_price(&cost, multiplier)?;
        Ok(Self {
            product_id,
            cost,
            previous_price,
            new_price,
            multiplier,
            changed_at: Utc::now(),
        })
    }
}
