//! Report data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::aggregator::BucketTotals;
use super::derived::DerivedTotals;
use crate::ratio::RatioResult;

/// Profit & loss, balance sheet and ratios computed from one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Per-bucket totals and line items.
    pub buckets: BucketTotals,
    /// Statement subtotals.
    pub derived: DerivedTotals,
    /// `assets - (liabilities + equity)` for the current year.
    pub balance_difference: Decimal,
    /// Whether the balance difference is within the configured tolerance.
    pub is_balanced: bool,
    /// Ratio results in definition order.
    pub ratios: Vec<RatioResult>,
}
