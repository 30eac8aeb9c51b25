//! Essenza Pricing
//!
//! Margin and price integrity engine for the Essenza perfume storefront.
//!
//! A product margin lives in two representations: the markup percentage
//! edited in the admin console (`80` means "sell at cost plus 80%") and the
//! multiplier stored on the product record (`price = cost * multiplier`).
//! This crate owns the conversion between the two, the validation gate in
//! front of every margin update, and the dispatch to the backend procedure
//! that rewrites every affected price.
//!
//! ## Features
//! - Percentage/multiplier conversion shared by display and storage
//! - Margin policy validation for admin-entered markups
//! - Sale price derivation with decimal cent rounding
//! - Price integrity log entries for every recalculated price

use thiserror::Error;

pub mod domain;
pub mod recalc;
pub mod service;

pub use domain::margin::{multiplier_to_percentage, percentage_to_multiplier, MarginPolicy};
pub use domain::pricing::{sale_price, PriceChange};
pub use domain::value_objects::Money;
pub use recalc::{PriceRecalculator, RecalcScope, RecalculationReport};
pub use service::MarginService;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("margin {percentage}% outside allowed range {min}%-{max}%")]
    MarginOutOfRange {
        percentage: f64,
        min: f64,
        max: f64,
    },

    #[error("multiplier {0} cannot price a product")]
    InvalidMultiplier(f64),

    #[error("price recalculation failed: {0}")]
    Recalculation(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
