//! Maps ledger entries to statement buckets.

use serde::{Deserialize, Serialize};

use super::error::ClassificationError;
use crate::ledger::{Category, LedgerEntry, ParentGroup};

/// Statement line an entry aggregates into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Operating revenue.
    Revenue,
    /// Non-operating income.
    OtherIncome,
    /// Cost of goods sold.
    Cogs,
    /// Operating expenses.
    OperatingExpenses,
    /// Income tax expense.
    TaxExpense,
    /// Current assets.
    CurrentAssets,
    /// Non-current (fixed) assets.
    NonCurrentAssets,
    /// Current liabilities.
    CurrentLiabilities,
    /// Non-current liabilities (loans).
    NonCurrentLiabilities,
    /// Capital and reserves.
    Capital,
}

impl Bucket {
    /// Every bucket, profit & loss lines first, then balance-sheet lines.
    pub const ALL: [Self; 10] = [
        Self::Revenue,
        Self::OtherIncome,
        Self::Cogs,
        Self::OperatingExpenses,
        Self::TaxExpense,
        Self::CurrentAssets,
        Self::NonCurrentAssets,
        Self::CurrentLiabilities,
        Self::NonCurrentLiabilities,
        Self::Capital,
    ];
}

/// Resolves the bucket for one entry.
///
/// The parent group is only consulted for assets and liabilities, where it is
/// mandatory. Anything outside the known tag set is an error, never dropped.
pub fn classify(entry: &LedgerEntry) -> Result<Bucket, ClassificationError> {
    let category = &entry.category;
    match category {
        Category::Income => Ok(Bucket::Revenue),
        Category::OtherIncome => Ok(Bucket::OtherIncome),
        Category::CostOfGoodsSold => Ok(Bucket::Cogs),
        Category::Expense => Ok(Bucket::OperatingExpenses),
        Category::TaxExpense => Ok(Bucket::TaxExpense),
        Category::Capital | Category::Reserves => Ok(Bucket::Capital),
        Category::Asset | Category::Liability => {
            let parent_group = entry
                .parent_group
                .as_ref()
                .ok_or_else(|| ClassificationError::MissingParentGroup {
                    category: category.clone(),
                })?;
            match (category, parent_group) {
                (Category::Asset, ParentGroup::CurrentAssets) => Ok(Bucket::CurrentAssets),
                (Category::Asset, ParentGroup::NonCurrentAssets) => Ok(Bucket::NonCurrentAssets),
                (Category::Liability, ParentGroup::CurrentLiabilities) => {
                    Ok(Bucket::CurrentLiabilities)
                }
                (Category::Liability, ParentGroup::LoansLiability) => {
                    Ok(Bucket::NonCurrentLiabilities)
                }
                _ => Err(ClassificationError::UnsupportedParentGroup {
                    category: category.clone(),
                    parent_group: parent_group.clone(),
                }),
            }
        }
        Category::Unrecognized(raw) => Err(ClassificationError::UnknownCategory(raw.clone())),
    }
}
