//! Single-pass bucket aggregation.

use finreport_shared::types::PeriodAmount;
use serde::{Deserialize, Serialize};

use super::classifier::{Bucket, classify};
use super::error::ReportError;
use crate::ledger::LedgerEntry;

/// Totals and line items of one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotal {
    /// Sum of the contributing entries, per period.
    pub total: PeriodAmount,
    /// Contributing entries in input order.
    pub entries: Vec<LedgerEntry>,
}

impl BucketTotal {
    /// Adds one entry. Returns `None`, leaving the bucket untouched, if the
    /// total would leave the decimal range.
    fn add(&mut self, entry: &LedgerEntry) -> Option<()> {
        self.total = self.total.checked_add(entry.amounts())?;
        self.entries.push(entry.clone());
        Some(())
    }
}

/// Per-bucket totals for both periods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    /// Operating revenue.
    pub revenue: BucketTotal,
    /// Non-operating income.
    pub other_income: BucketTotal,
    /// Cost of goods sold.
    pub cogs: BucketTotal,
    /// Operating expenses.
    pub operating_expenses: BucketTotal,
    /// Income tax expense.
    pub tax_expense: BucketTotal,
    /// Current assets.
    pub current_assets: BucketTotal,
    /// Non-current assets.
    pub non_current_assets: BucketTotal,
    /// Current liabilities.
    pub current_liabilities: BucketTotal,
    /// Non-current liabilities.
    pub non_current_liabilities: BucketTotal,
    /// Capital and reserves.
    pub capital: BucketTotal,
}

impl BucketTotals {
    /// Returns one bucket.
    #[must_use]
    pub const fn bucket(&self, bucket: Bucket) -> &BucketTotal {
        match bucket {
            Bucket::Revenue => &self.revenue,
            Bucket::OtherIncome => &self.other_income,
            Bucket::Cogs => &self.cogs,
            Bucket::OperatingExpenses => &self.operating_expenses,
            Bucket::TaxExpense => &self.tax_expense,
            Bucket::CurrentAssets => &self.current_assets,
            Bucket::NonCurrentAssets => &self.non_current_assets,
            Bucket::CurrentLiabilities => &self.current_liabilities,
            Bucket::NonCurrentLiabilities => &self.non_current_liabilities,
            Bucket::Capital => &self.capital,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BucketTotal {
        match bucket {
            Bucket::Revenue => &mut self.revenue,
            Bucket::OtherIncome => &mut self.other_income,
            Bucket::Cogs => &mut self.cogs,
            Bucket::OperatingExpenses => &mut self.operating_expenses,
            Bucket::TaxExpense => &mut self.tax_expense,
            Bucket::CurrentAssets => &mut self.current_assets,
            Bucket::NonCurrentAssets => &mut self.non_current_assets,
            Bucket::CurrentLiabilities => &mut self.current_liabilities,
            Bucket::NonCurrentLiabilities => &mut self.non_current_liabilities,
            Bucket::Capital => &mut self.capital,
        }
    }

    /// Total of one bucket.
    #[must_use]
    pub const fn total(&self, bucket: Bucket) -> PeriodAmount {
        self.bucket(bucket).total
    }
}

/// Classifies and sums every entry in one pass.
///
/// The first entry that cannot be classified, or that pushes a bucket total
/// out of the decimal range, aborts the whole aggregation: statements must
/// never render with silently missing lines.
pub fn aggregate(entries: &[LedgerEntry]) -> Result<BucketTotals, ReportError> {
    let mut totals = BucketTotals::default();

    for (index, entry) in entries.iter().enumerate() {
        let bucket = classify(entry).map_err(|source| {
            tracing::warn!(index, name = %entry.name, error = %source, "unclassifiable ledger entry");
            ReportError::Classification {
                index,
                name: entry.name.clone(),
                source,
            }
        })?;
        totals.bucket_mut(bucket).add(entry).ok_or_else(|| {
            tracing::warn!(index, name = %entry.name, ?bucket, "bucket total out of range");
            ReportError::AmountOverflow {
                index,
                name: entry.name.clone(),
            }
        })?;
    }

    tracing::debug!(entries = entries.len(), "aggregated ledger entries");
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, ParentGroup};
    use crate::reports::error::ClassificationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_income_and_expense() {
        let entries = vec![
            LedgerEntry::new(Category::Income, None, "Sales", dec!(1000), dec!(1200)),
            LedgerEntry::new(Category::Expense, None, "Rent", dec!(400), dec!(500)),
        ];

        let totals = aggregate(&entries).unwrap();
        assert_eq!(totals.revenue.total, PeriodAmount::new(dec!(1000), dec!(1200)));
        assert_eq!(
            totals.operating_expenses.total,
            PeriodAmount::new(dec!(400), dec!(500))
        );
        assert_eq!(totals.cogs.total, PeriodAmount::ZERO);
        assert_eq!(totals.revenue.entries.len(), 1);
    }

    #[test]
    fn test_line_items_keep_input_order() {
        let entries = vec![
            LedgerEntry::new(Category::Income, None, "b", dec!(1), dec!(1)),
            LedgerEntry::new(Category::Expense, None, "x", dec!(1), dec!(1)),
            LedgerEntry::new(Category::Income, None, "a", dec!(2), dec!(2)),
            LedgerEntry::new(Category::Income, None, "c", dec!(3), dec!(3)),
        ];

        let totals = aggregate(&entries).unwrap();
        let names: Vec<_> = totals.revenue.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(totals.revenue.total, PeriodAmount::new(dec!(6), dec!(6)));
    }

    #[test]
    fn test_capital_and_reserves_share_a_bucket() {
        let entries = vec![
            LedgerEntry::new(Category::Capital, None, "Share capital", dec!(500), dec!(500)),
            LedgerEntry::new(Category::Reserves, None, "Retained", dec!(100), dec!(150)),
        ];

        let totals = aggregate(&entries).unwrap();
        assert_eq!(totals.total(Bucket::Capital), PeriodAmount::new(dec!(600), dec!(650)));
    }

    #[test]
    fn test_failure_reports_offending_index() {
        let entries = vec![
            LedgerEntry::new(Category::Income, None, "Sales", dec!(1), dec!(1)),
            LedgerEntry::new(
                Category::Asset,
                Some(ParentGroup::CurrentAssets),
                "Cash",
                dec!(1),
                dec!(1),
            ),
            LedgerEntry::from_raw("asset", None, "Mystery", Some("10"), Some("20")),
            LedgerEntry::from_raw("bogus", None, "Later", None, None),
        ];

        let err = aggregate(&entries).unwrap_err();
        assert_eq!(
            err,
            ReportError::Classification {
                index: 2,
                name: "Mystery".to_string(),
                source: ClassificationError::MissingParentGroup {
                    category: Category::Asset
                },
            }
        );
    }

    #[test]
    fn test_bucket_overflow_reports_offending_index() {
        let max = "79228162514264337593543950335";
        let entries = vec![
            LedgerEntry::from_raw("income", None, "Sales", Some(max), Some(max)),
            LedgerEntry::from_raw("expense", None, "Rent", Some(max), Some(max)),
            LedgerEntry::from_raw("income", None, "More sales", Some("0"), Some(max)),
        ];

        let err = aggregate(&entries).unwrap_err();
        assert_eq!(
            err,
            ReportError::AmountOverflow {
                index: 2,
                name: "More sales".to_string(),
            }
        );
    }

    #[test]
    fn test_opposite_extremes_cancel() {
        let entries = vec![
            LedgerEntry::from_raw("income", None, "Sales", None, Some("79228162514264337593543950335")),
            LedgerEntry::from_raw("income", None, "Refund", None, Some("-79228162514264337593543950335")),
        ];

        let totals = aggregate(&entries).unwrap();
        assert_eq!(totals.revenue.total, PeriodAmount::ZERO);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(&[]).unwrap(), BucketTotals::default());
    }
}
