//! Margin update orchestration.

use tracing::{info, warn};

use crate::domain::margin::{percentage_to_multiplier, MarginPolicy};
use crate::recalc::{PriceRecalculator, RecalcScope, RecalculationReport};
use crate::{PricingError, Result};

/// Applies margin updates coming from the admin console: validates the
/// entered percentage, converts it to multiplier form and hands it to the
/// recalculation procedure. Out-of-range input never reaches the store.
pub struct MarginService<R> {
    policy: MarginPolicy,
    recalculator: R,
}

impl<R: PriceRecalculator> MarginService<R> {
    pub fn new(policy: MarginPolicy, recalculator: R) -> Self {
        Self { policy, recalculator }
    }

    pub fn policy(&self) -> &MarginPolicy {
        &self.policy
    }

    /// Validates and applies a margin update over `scope`.
    pub async fn update_margin(
        &self,
        scope: RecalcScope,
        percentage: f64,
    ) -> Result<RecalculationReport> {
        if !self.policy.is_valid_percentage(percentage) {
            warn!(percentage, "rejected margin update outside policy range");
            return Err(PricingError::MarginOutOfRange {
                percentage,
                min: self.policy.min_percentage,
                max: self.policy.max_percentage,
            });
        }
        let multiplier = percentage_to_multiplier(percentage);
        let report = self.recalculator.recalculate(scope, multiplier).await?;
        info!(
            ?scope,
            multiplier,
            products = report.products_updated,
            "margin updated, prices recalculated"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::PriceChange;
    use crate::domain::value_objects::Money;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    struct Record {
        id: Uuid,
        cost: Money,
        price: Option<Money>,
    }

    struct InMemoryRecalculator {
        products: Mutex<Vec<Record>>,
        calls: AtomicUsize,
    }

    impl InMemoryRecalculator {
        fn with_products(products: Vec<Record>) -> Self {
            Self { products: Mutex::new(products), calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl PriceRecalculator for InMemoryRecalculator {
        async fn recalculate(&self, scope: RecalcScope, multiplier: f64) -> Result<RecalculationReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert!(multiplier > 1.0, "caller handed an unset multiplier");
            let mut products = self.products.lock().unwrap();
            let mut changes = Vec::new();
            for record in products.iter_mut() {
                let affected = match scope {
                    RecalcScope::AllProducts => true,
                    RecalcScope::Product(id) => id == record.id,
                };
                if !affected {
                    continue;
                }
                let change =
                    PriceChange::record(record.id, record.cost.clone(), record.price.clone(), multiplier)?;
                record.price = Some(change.new_price.clone());
                changes.push(change);
            }
            Ok(RecalculationReport {
                scope,
                multiplier,
                products_updated: changes.len() as u64,
                changes,
                completed_at: Utc::now(),
            })
        }
    }

    fn catalog() -> Vec<Record> {
        vec![
            Record { id: Uuid::new_v4(), cost: Money::brl(dec!(100.00)), price: Some(Money::brl(dec!(200.00))) },
            Record { id: Uuid::new_v4(), cost: Money::brl(dec!(49.90)), price: None },
        ]
    }

    #[tokio::test]
    async fn test_update_margin_storewide() {
        let service = MarginService::new(
            MarginPolicy::default(),
            InMemoryRecalculator::with_products(catalog()),
        );
        let report = service.update_margin(RecalcScope::AllProducts, 80.0).await.unwrap();
        assert_eq!(report.products_updated, 2);
        assert_eq!(report.changes[0].new_price.amount(), dec!(180.00));
        assert_eq!(report.changes[1].new_price.amount(), dec!(89.82));
        assert_eq!(report.changes[0].previous_price.as_ref().unwrap().amount(), dec!(200.00));
    }

    #[tokio::test]
    async fn test_update_margin_single_product() {
        let products = catalog();
        let target = products[1].id;
        let service = MarginService::new(
            MarginPolicy::default(),
            InMemoryRecalculator::with_products(products),
        );
        let report = service.update_margin(RecalcScope::Product(target), 100.0).await.unwrap();
        assert_eq!(report.products_updated, 1);
        assert_eq!(report.changes[0].product_id, target);
        assert_eq!(report.changes[0].new_price.amount(), dec!(99.80));
    }

    #[tokio::test]
    async fn test_out_of_range_never_dispatched() {
        let recalculator = InMemoryRecalculator::with_products(catalog());
        let service = MarginService::new(MarginPolicy::default(), recalculator);
        let err = service.update_margin(RecalcScope::AllProducts, 30.0).await.unwrap_err();
        assert!(matches!(err, PricingError::MarginOutOfRange { .. }));
        assert_eq!(service.recalculator.calls.load(Ordering::SeqCst), 0);

        let err = service.update_margin(RecalcScope::AllProducts, 300.001).await.unwrap_err();
        assert!(matches!(err, PricingError::MarginOutOfRange { .. }));
        assert_eq!(service.recalculator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_boundary_percentages_accepted() {
        let service = MarginService::new(
            MarginPolicy::default(),
            InMemoryRecalculator::with_products(catalog()),
        );
        assert!(service.update_margin(RecalcScope::AllProducts, 50.0).await.is_ok());
        assert!(service.update_margin(RecalcScope::AllProducts, 300.0).await.is_ok());
    }
}
