//! Property-based tests for ratio evaluation.

use finreport_shared::types::{Period, PeriodAmount};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::EvaluationFailure;
use super::evaluator::evaluate;
use super::types::{RatioDirection, RatioStatus};
use crate::reports::DerivedTotals;

/// Strategy to generate amounts with two decimal places (-10,000,000.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn period_amount() -> impl Strategy<Value = PeriodAmount> {
    (amount(), amount()).prop_map(|(previous, current)| PeriodAmount::new(previous, current))
}

fn period() -> impl Strategy<Value = Period> {
    prop_oneof![Just(Period::Previous), Just(Period::Current)]
}

prop_compose! {
    fn derived_totals()(
        current_assets in period_amount(),
        current_liabilities in period_amount(),
        total_assets in period_amount(),
        revenue in period_amount(),
    ) -> DerivedTotals {
        DerivedTotals {
            current_assets,
            current_liabilities,
            total_assets,
            revenue,
            ..DerivedTotals::default()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A longer variable name is never shadowed by a shorter one it contains.
    #[test]
    fn prop_longest_variable_wins(totals in derived_totals(), period in period()) {
        let expected = totals.current_assets.get(period) - totals.current_liabilities.get(period);
        prop_assert_eq!(
            evaluate("currentAssets - currentLiabilities", &totals, period),
            Ok(expected)
        );
        prop_assert_eq!(
            evaluate("totalAssets", &totals, period),
            Ok(totals.total_assets.get(period))
        );
    }

    /// Dividing by a zero-valued variable always reports division by zero.
    #[test]
    fn prop_zero_divisor(totals in derived_totals(), period in period()) {
        prop_assert_eq!(
            evaluate("revenue / totalEquity", &totals, period),
            Err(EvaluationFailure::DivisionByZero)
        );
    }

    /// Literal arithmetic follows operator precedence.
    #[test]
    fn prop_precedence(a in -10_000i64..10_000, b in -10_000i64..10_000, c in -10_000i64..10_000) {
        let formula = format!("{a} + {b} * {c}");
        let (a, b, c) = (Decimal::from(a), Decimal::from(b), Decimal::from(c));
        prop_assert_eq!(
            evaluate(&formula, &DerivedTotals::default(), Period::Current),
            Ok(a + b * c)
        );
    }

    /// Arbitrary input never panics; it yields a value or a failure.
    #[test]
    fn prop_arbitrary_input_is_total(formula in ".{0,64}", totals in derived_totals()) {
        let _ = evaluate(&formula, &totals, Period::Current);
    }

    /// Status is Good exactly when the value sits on the healthy side of the threshold.
    #[test]
    fn prop_status_matches_direction(value in amount(), threshold in amount()) {
        let higher = RatioStatus::derive(&Ok(value), Some(threshold), RatioDirection::HigherIsBetter);
        let lower = RatioStatus::derive(&Ok(value), Some(threshold), RatioDirection::LowerIsBetter);

        prop_assert_eq!(higher == RatioStatus::Good, value >= threshold);
        prop_assert_eq!(lower == RatioStatus::Good, value <= threshold);
        prop_assert_ne!(higher, RatioStatus::NotApplicable);
    }
}
