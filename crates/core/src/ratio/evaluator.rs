//! Formula evaluation and status derivation.

use finreport_shared::types::Period;
use rust_decimal::Decimal;

use super::error::EvaluationFailure;
use super::formula::{Parser, substitute};
use super::types::{RatioDirection, RatioStatus};
use crate::reports::DerivedTotals;

/// Evaluates `formula` against one reporting column of `totals`.
///
/// Only `+ - * / ( )`, decimal literals and the fixed variable table are
/// understood; the formula text is never handed to any general interpreter.
pub fn evaluate(
    formula: &str,
    totals: &DerivedTotals,
    period: Period,
) -> Result<Decimal, EvaluationFailure> {
    let tokens = substitute(formula, totals, period)?;
    Parser::new(&tokens, formula.len()).evaluate()
}

impl RatioStatus {
    /// Compares a ratio value to its threshold.
    #[must_use]
    pub fn derive(
        value: &Result<Decimal, EvaluationFailure>,
        threshold: Option<Decimal>,
        direction: RatioDirection,
    ) -> Self {
        let (Ok(value), Some(threshold)) = (value, threshold) else {
            return Self::NotApplicable;
        };
        let healthy = match direction {
            RatioDirection::LowerIsBetter => *value <= threshold,
            RatioDirection::HigherIsBetter => *value >= threshold,
        };
        if healthy { Self::Good } else { Self::Alert }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finreport_shared::types::PeriodAmount;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_working_capital() {
        let totals = DerivedTotals {
            current_assets: PeriodAmount::new(dec!(450), dec!(500)),
            current_liabilities: PeriodAmount::new(dec!(150), dec!(200)),
            total_assets: PeriodAmount::new(dec!(9000), dec!(9999)),
            ..DerivedTotals::default()
        };
        let formula = "currentAssets - currentLiabilities";
        assert_eq!(evaluate(formula, &totals, Period::Current), Ok(dec!(300)));
        assert_eq!(evaluate(formula, &totals, Period::Previous), Ok(dec!(300)));
    }

    #[test]
    fn test_return_on_equity_with_zero_equity() {
        let totals = DerivedTotals {
            net_profit: PeriodAmount::new(dec!(10), dec!(20)),
            ..DerivedTotals::default()
        };
        assert_eq!(
            evaluate("netProfit / totalEquity", &totals, Period::Current),
            Err(EvaluationFailure::DivisionByZero)
        );
    }

    #[test]
    fn test_unknown_variable() {
        assert_eq!(
            evaluate("ebitda * 2", &DerivedTotals::default(), Period::Current),
            Err(EvaluationFailure::UnknownVariable {
                name: "ebitda".to_string()
            })
        );
    }

    #[test]
    fn test_code_is_not_executed() {
        let totals = DerivedTotals::default();
        assert!(evaluate("process.exit(1)", &totals, Period::Current).is_err());
        assert!(evaluate("revenue; alert(1)", &totals, Period::Current).is_err());
        assert!(evaluate("[revenue]", &totals, Period::Current).is_err());
    }

    #[rstest]
    #[case(Ok(dec!(1)), Some(dec!(2)), RatioDirection::LowerIsBetter, RatioStatus::Good)]
    #[case(Ok(dec!(2)), Some(dec!(2)), RatioDirection::LowerIsBetter, RatioStatus::Good)]
    #[case(Ok(dec!(3)), Some(dec!(2)), RatioDirection::LowerIsBetter, RatioStatus::Alert)]
    #[case(Ok(dec!(3)), Some(dec!(2)), RatioDirection::HigherIsBetter, RatioStatus::Good)]
    #[case(Ok(dec!(2)), Some(dec!(2)), RatioDirection::HigherIsBetter, RatioStatus::Good)]
    #[case(Ok(dec!(1)), Some(dec!(2)), RatioDirection::HigherIsBetter, RatioStatus::Alert)]
    #[case(Ok(dec!(1)), None, RatioDirection::HigherIsBetter, RatioStatus::NotApplicable)]
    #[case(
        Err(EvaluationFailure::DivisionByZero),
        Some(dec!(2)),
        RatioDirection::LowerIsBetter,
        RatioStatus::NotApplicable
    )]
    fn test_status_derivation(
        #[case] value: Result<Decimal, EvaluationFailure>,
        #[case] threshold: Option<Decimal>,
        #[case] direction: RatioDirection,
        #[case] expected: RatioStatus,
    ) {
        assert_eq!(RatioStatus::derive(&value, threshold, direction), expected);
    }
}
