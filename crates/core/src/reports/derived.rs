//! Statement-level derived figures.

use finreport_shared::types::PeriodAmount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregator::BucketTotals;
use super::error::ReportError;

/// Subtotals of the profit & loss statement and balance sheet.
///
/// Also carries the bucket figures ratio formulas may reference, so ratio
/// evaluation depends on this type alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// Operating revenue.
    pub revenue: PeriodAmount,
    /// Revenue less cost of goods sold.
    pub gross_profit: PeriodAmount,
    /// Gross profit less operating and tax expenses.
    pub net_profit: PeriodAmount,
    /// Current assets.
    pub current_assets: PeriodAmount,
    /// Non-current assets.
    pub fixed_assets: PeriodAmount,
    /// Current plus non-current assets.
    pub total_assets: PeriodAmount,
    /// Current liabilities.
    pub current_liabilities: PeriodAmount,
    /// Current plus non-current liabilities.
    pub total_liabilities: PeriodAmount,
    /// Capital, plus net profit for the open current year only.
    pub total_equity: PeriodAmount,
}

impl DerivedTotals {
    /// Total liabilities plus total equity, or `None` if out of range.
    #[must_use]
    pub fn liabilities_and_equity(&self) -> Option<PeriodAmount> {
        self.total_liabilities.checked_add(self.total_equity)
    }

    /// `assets - (liabilities + equity)` for the current period.
    ///
    /// Zero when the balance sheet balances. Mismatched input is reported
    /// here, never corrected. `None` if the figure leaves the decimal range;
    /// totals returned by [`derive`] always have a difference.
    #[must_use]
    pub fn balance_difference(&self) -> Option<Decimal> {
        let liabilities_and_equity = self
            .total_liabilities
            .current
            .checked_add(self.total_equity.current)?;
        self.total_assets.current.checked_sub(liabilities_and_equity)
    }

    /// Returns true if the current-period identity holds within `tolerance`.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.balance_difference()
            .is_some_and(|difference| difference.abs() <= tolerance)
    }
}

fn in_range(value: Option<PeriodAmount>, figure: &'static str) -> Result<PeriodAmount, ReportError> {
    value.ok_or(ReportError::TotalOverflow { figure })
}

/// Computes the derived totals from bucket totals.
///
/// Previous-year equity is capital alone: that year is closed and its profit
/// already sits in opening capital. Current-year equity adds this year's net profit.
///
/// # Errors
///
/// Returns `ReportError::TotalOverflow` if a subtotal, or the balance
/// difference, leaves the decimal range.
pub fn derive(totals: &BucketTotals) -> Result<DerivedTotals, ReportError> {
    let revenue = totals.revenue.total;
    let gross_profit = in_range(revenue.checked_sub(totals.cogs.total), "gross_profit")?;
    let net_profit = in_range(
        gross_profit
            .checked_sub(totals.operating_expenses.total)
            .and_then(|profit| profit.checked_sub(totals.tax_expense.total)),
        "net_profit",
    )?;

    let current_assets = totals.current_assets.total;
    let fixed_assets = totals.non_current_assets.total;
    let current_liabilities = totals.current_liabilities.total;

    let capital = totals.capital.total;
    let total_equity = in_range(
        capital
            .current
            .checked_add(net_profit.current)
            .map(|current| PeriodAmount::new(capital.previous, current)),
        "total_equity",
    )?;

    let derived = DerivedTotals {
        revenue,
        gross_profit,
        net_profit,
        current_assets,
        fixed_assets,
        total_assets: in_range(current_assets.checked_add(fixed_assets), "total_assets")?,
        current_liabilities,
        total_liabilities: in_range(
            current_liabilities.checked_add(totals.non_current_liabilities.total),
            "total_liabilities",
        )?,
        total_equity,
    };

    in_range(derived.liabilities_and_equity(), "liabilities_and_equity")?;
    if derived.balance_difference().is_none() {
        return Err(ReportError::TotalOverflow {
            figure: "balance_difference",
        });
    }

    Ok(derived)
}
