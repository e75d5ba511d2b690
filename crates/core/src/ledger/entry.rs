//! Ledger entry domain types.
//!
//! Category and parent-group tags arrive as free text from forms and CSV
//! imports. Both enums keep an `Unrecognized` variant for anything outside the
//! closed tag set so that malformed input survives until classification, which
//! rejects it explicitly.

use std::fmt;

use finreport_shared::types::{LedgerEntryId, PeriodAmount, amount::deserialize_lenient, parse_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Statement category of a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Operating revenue.
    Income,
    /// Non-operating income.
    OtherIncome,
    /// Operating expense.
    Expense,
    /// Cost of goods sold.
    CostOfGoodsSold,
    /// Income tax expense.
    TaxExpense,
    /// Asset, split by parent group.
    Asset,
    /// Liability, split by parent group.
    Liability,
    /// Owner's capital.
    Capital,
    /// Reserves and surplus.
    Reserves,
    /// Any tag outside the set above, kept verbatim.
    Unrecognized(String),
}

/// Balance-sheet sub-classification of an asset or liability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParentGroup {
    /// Assets realised within the operating cycle.
    CurrentAssets,
    /// Fixed and other long-term assets.
    NonCurrentAssets,
    /// Long-term borrowings.
    LoansLiability,
    /// Obligations due within the operating cycle.
    CurrentLiabilities,
    /// Owner's capital account.
    CapitalAccount,
    /// Any group outside the set above, kept verbatim.
    Unrecognized(String),
}

/// Lowercases and strips separators so `cost_of_goods_sold`, `Cost Of Goods Sold`
/// and `costOfGoodsSold` compare equal.
fn normalize_tag(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl Category {
    /// Canonical snake_case tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::OtherIncome => "other_income",
            Self::Expense => "expense",
            Self::CostOfGoodsSold => "cost_of_goods_sold",
            Self::TaxExpense => "tax_expense",
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Capital => "capital",
            Self::Reserves => "reserves",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        match normalize_tag(raw).as_str() {
            "income" | "revenue" => Self::Income,
            "otherincome" => Self::OtherIncome,
            "expense" | "expenses" => Self::Expense,
            "costofgoodssold" | "cogs" => Self::CostOfGoodsSold,
            "taxexpense" | "tax" => Self::TaxExpense,
            "asset" | "assets" => Self::Asset,
            "liability" | "liabilities" => Self::Liability,
            "capital" => Self::Capital,
            "reserves" | "reserve" => Self::Reserves,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParentGroup {
    /// Canonical snake_case tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CurrentAssets => "current_assets",
            Self::NonCurrentAssets => "non_current_assets",
            Self::LoansLiability => "loans_liability",
            Self::CurrentLiabilities => "current_liabilities",
            Self::CapitalAccount => "capital_account",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for ParentGroup {
    fn from(raw: &str) -> Self {
        match normalize_tag(raw).as_str() {
            "currentassets" => Self::CurrentAssets,
            "noncurrentassets" | "fixedassets" => Self::NonCurrentAssets,
            "loansliability" | "loans" | "noncurrentliabilities" => Self::LoansLiability,
            "currentliabilities" => Self::CurrentLiabilities,
            "capitalaccount" => Self::CapitalAccount,
            _ => Self::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for ParentGroup {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<ParentGroup> for String {
    fn from(group: ParentGroup) -> Self {
        match group {
            ParentGroup::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One account line entered by the user.
///
/// Entries are immutable once built; the store replaces them wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    #[serde(default)]
    pub id: LedgerEntryId,
    /// Statement category.
    #[serde(alias = "accountType")]
    pub category: Category,
    /// Balance-sheet sub-classification; only consulted for assets and liabilities.
    #[serde(
        default,
        alias = "parentGroup",
        deserialize_with = "deserialize_parent_group"
    )]
    pub parent_group: Option<ParentGroup>,
    /// Display label. Not unique.
    #[serde(default, alias = "accountName")]
    pub name: String,
    /// Previous-year amount.
    #[serde(
        default,
        alias = "previousYearAmount",
        deserialize_with = "deserialize_lenient"
    )]
    pub previous_year_amount: Decimal,
    /// Current-year amount.
    #[serde(
        default,
        alias = "currentYearAmount",
        deserialize_with = "deserialize_lenient"
    )]
    pub current_year_amount: Decimal,
}

fn deserialize_parent_group<'de, D>(deserializer: D) -> Result<Option<ParentGroup>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|s| !s.trim().is_empty())
        .map(ParentGroup::from))
}

impl LedgerEntry {
    /// Creates an entry with a fresh ID.
    #[must_use]
    pub fn new(
        category: Category,
        parent_group: Option<ParentGroup>,
        name: impl Into<String>,
        previous_year_amount: Decimal,
        current_year_amount: Decimal,
    ) -> Self {
        Self {
            id: LedgerEntryId::new(),
            category,
            parent_group,
            name: name.into(),
            previous_year_amount,
            current_year_amount,
        }
    }

    /// Builds an entry from raw form or CSV cells.
    ///
    /// Tags are parsed leniently (unknown values become `Unrecognized`), a blank
    /// parent group counts as absent, and missing or unparseable amounts become zero.
    #[must_use]
    pub fn from_raw(
        category: &str,
        parent_group: Option<&str>,
        name: &str,
        previous_year_amount: Option<&str>,
        current_year_amount: Option<&str>,
    ) -> Self {
        let amount = |raw: Option<&str>| raw.map_or(Decimal::ZERO, parse_amount);
        Self::new(
            Category::from(category),
            parent_group
                .filter(|g| !g.trim().is_empty())
                .map(ParentGroup::from),
            name,
            amount(previous_year_amount),
            amount(current_year_amount),
        )
    }

    /// Both amounts as a pair.
    #[must_use]
    pub const fn amounts(&self) -> PeriodAmount {
        PeriodAmount::new(self.previous_year_amount, self.current_year_amount)
    }
}
