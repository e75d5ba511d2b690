//! Report generation service.

use finreport_shared::ReportSettings;

use super::aggregator::aggregate;
use super::derived::derive;
use super::error::ReportError;
use super::types::FinancialReport;
use crate::ledger::LedgerEntry;
use crate::ratio::{RatioDefinition, RatioService};

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates the full report for a ledger snapshot.
    ///
    /// Aggregates the entries, derives the statement subtotals, checks the
    /// balance identity and evaluates every ratio. An imbalanced sheet is
    /// logged and flagged, not corrected.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Classification` for the first entry that cannot
    /// be mapped to a statement bucket, and an overflow error when a bucket
    /// total or a subtotal leaves the decimal range.
    pub fn generate(
        entries: &[LedgerEntry],
        ratios: &[RatioDefinition],
        settings: &ReportSettings,
    ) -> Result<FinancialReport, ReportError> {
        let buckets = aggregate(entries)?;
        let derived = derive(&buckets)?;
        tracing::debug!(
            net_profit = %derived.net_profit.current,
            total_assets = %derived.total_assets.current,
            "derived statement totals"
        );

        let balance_difference = derived.balance_difference().ok_or(ReportError::TotalOverflow {
            figure: "balance_difference",
        })?;
        let is_balanced = balance_difference.abs() <= settings.balance_tolerance;
        if !is_balanced {
            tracing::warn!(
                %balance_difference,
                total_assets = %derived.total_assets.current,
                total_liabilities = %derived.total_liabilities.current,
                total_equity = %derived.total_equity.current,
                "balance sheet does not balance"
            );
        }

        let ratios = RatioService::evaluate_all(ratios, &derived, settings.parallel_ratio_threshold);

        Ok(FinancialReport {
            generated_at: chrono::Utc::now(),
            buckets,
            derived,
            balance_difference,
            is_balanced,
            ratios,
        })
    }
}
