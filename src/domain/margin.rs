//! Margin conversion and validation.
//!
//! Every part of the system that shows or persists a margin goes through
//! this module, so the admin console and the product store always agree on
//! what a percentage means.

use serde::{Deserialize, Serialize};

/// Converts a markup percentage to the stored multiplier form
/// (`80` becomes `1.8`).
pub fn percentage_to_multiplier(percentage: f64) -> f64 {
    1.0 + percentage / 100.0
}

/// Inverse of [`percentage_to_multiplier`] (`1.8` becomes `80`).
pub fn multiplier_to_percentage(multiplier: f64) -> f64 {
    (multiplier - 1.0) * 100.0
}

/// Margin business policy: the percentage range accepted from the admin
/// console and the multiplier assumed when a product record carries none.
///
/// The numbers in `Default` are current business policy, not domain
/// invariants; consumers may load different ones from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarginPolicy {
    pub min_percentage: f64,
    pub max_percentage: f64,
    pub default_multiplier: f64,
}

impl Default for MarginPolicy {
    fn default() -> Self {
        Self {
            min_percentage: 50.0,
            max_percentage: 300.0,
            default_multiplier: 2.0,
        }
    }
}

impl MarginPolicy {
    /// True iff `percentage` may be persisted. This is the sole gate in
    /// front of any margin update reaching the price store; out-of-range
    /// values are rejected, never clamped.
    pub fn is_valid_percentage(&self, percentage: f64) -> bool {
        percentage >= self.min_percentage && percentage <= self.max_percentage
    }

    /// Resolves a stored multiplier to a usable one. Absent or `<= 1`
    /// values mean the record predates margins or was never set; those
    /// fall back to the policy default.
    pub fn resolve_multiplier(&self, stored: Option<f64>) -> f64 {
        match stored {
            Some(m) if m > 1.0 => m,
            _ => self.default_multiplier,
        }
    }

    /// Formats a stored multiplier as a whole-percent display string,
    /// e.g. `"80%"`. Unset records render as the default margin rather
    /// than a blank or negative figure.
    pub fn display_percentage(&self, stored: Option<f64>) -> String {
        format!(
            "{:.0}%",
            multiplier_to_percentage(self.resolve_multiplier(stored))
        )
    }
}
