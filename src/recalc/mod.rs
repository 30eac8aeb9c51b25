//! Seam to the backend price recalculation procedure.
//!
//! Recalculation itself lives server-side: a stored procedure reads each
//! affected product's cost and the stored multiplier, rewrites
//! `price = cost * multiplier` and appends a price integrity log entry.
//! This crate only dispatches to it; implementors wrap the actual remote
//! call.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::pricing::PriceChange;
use crate::Result;

/// Which product records a recalculation touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecalcScope {
    /// Every product in the catalog, after a storewide margin change.
    AllProducts,
    /// A single product, after a per-product margin override.
    Product(Uuid),
}

/// Outcome reported by the recalculation procedure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecalculationReport {
    pub scope: RecalcScope,
    pub multiplier: f64,
    pub products_updated: u64,
    pub changes: Vec<PriceChange>,
    pub completed_at: DateTime<Utc>,
}

/// Remote procedure that rewrites product prices from cost and multiplier.
///
/// Callers validate the margin before dispatching; implementations may
/// assume `multiplier > 1`.
#[async_trait]
pub trait PriceRecalculator: Send + Sync {
    async fn recalculate(&self, scope: RecalcScope, multiplier: f64) -> Result<RecalculationReport>;
}
