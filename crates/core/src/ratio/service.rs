//! Ratio evaluation service.

use finreport_shared::types::Period;
use rayon::prelude::*;

use super::evaluator::evaluate;
use super::types::{RatioDefinition, RatioResult, RatioStatus};
use crate::reports::DerivedTotals;

/// Service for evaluating analyst-defined ratios.
pub struct RatioService;

impl RatioService {
    /// Evaluates one ratio for both periods.
    ///
    /// A failing formula never aborts the caller; the failure is carried in
    /// the result and the status becomes not-applicable.
    #[must_use]
    pub fn evaluate_one(definition: &RatioDefinition, totals: &DerivedTotals) -> RatioResult {
        let previous_value = evaluate(&definition.formula, totals, Period::Previous);
        let current_value = evaluate(&definition.formula, totals, Period::Current);
        let status = RatioStatus::derive(&current_value, definition.threshold, definition.direction);

        if let Err(failure) = &current_value {
            tracing::debug!(
                ratio = %definition.name,
                formula = %definition.formula,
                error = %failure,
                "ratio evaluation failed"
            );
        }

        RatioResult {
            ratio_id: definition.id,
            name: definition.name.clone(),
            previous_value,
            current_value,
            status,
        }
    }

    /// Evaluates every ratio, keeping definition order.
    ///
    /// Lists longer than `parallel_threshold` are evaluated on the rayon pool.
    #[must_use]
    pub fn evaluate_all(
        definitions: &[RatioDefinition],
        totals: &DerivedTotals,
        parallel_threshold: usize,
    ) -> Vec<RatioResult> {
        if definitions.len() > parallel_threshold {
            tracing::debug!(ratios = definitions.len(), "evaluating ratios in parallel");
            definitions
                .par_iter()
                .map(|definition| Self::evaluate_one(definition, totals))
                .collect()
        } else {
            definitions
                .iter()
                .map(|definition| Self::evaluate_one(definition, totals))
                .collect()
        }
    }
}
