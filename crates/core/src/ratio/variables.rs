//! The closed set of names a ratio formula may reference.

use finreport_shared::types::Period;
use rust_decimal::Decimal;

use crate::reports::DerivedTotals;

/// A named financial figure available to formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// `totalAssets`
    TotalAssets,
    /// `currentAssets`
    CurrentAssets,
    /// `fixedAssets` (non-current assets)
    FixedAssets,
    /// `totalLiabilities`
    TotalLiabilities,
    /// `currentLiabilities`
    CurrentLiabilities,
    /// `totalEquity`
    TotalEquity,
    /// `revenue`
    Revenue,
    /// `grossProfit`
    GrossProfit,
    /// `netProfit`, also reachable as `netIncome`
    NetProfit,
}

/// Variable names, longest first.
///
/// Substitution tries names in this order so a shorter name can never claim
/// the prefix of a longer one.
pub const VARIABLES_LONGEST_FIRST: [(&str, Variable); 10] = [
    ("currentLiabilities", Variable::CurrentLiabilities),
    ("totalLiabilities", Variable::TotalLiabilities),
    ("currentAssets", Variable::CurrentAssets),
    ("grossProfit", Variable::GrossProfit),
    ("totalAssets", Variable::TotalAssets),
    ("fixedAssets", Variable::FixedAssets),
    ("totalEquity", Variable::TotalEquity),
    ("netProfit", Variable::NetProfit),
    ("netIncome", Variable::NetProfit),
    ("revenue", Variable::Revenue),
];

impl Variable {
    /// Value of this variable in one reporting column.
    #[must_use]
    pub const fn value(self, totals: &DerivedTotals, period: Period) -> Decimal {
        let amount = match self {
            Self::TotalAssets => totals.total_assets,
            Self::CurrentAssets => totals.current_assets,
            Self::FixedAssets => totals.fixed_assets,
            Self::TotalLiabilities => totals.total_liabilities,
            Self::CurrentLiabilities => totals.current_liabilities,
            Self::TotalEquity => totals.total_equity,
            Self::Revenue => totals.revenue,
            Self::GrossProfit => totals.gross_profit,
            Self::NetProfit => totals.net_profit,
        };
        amount.get(period)
    }

    /// Finds the variable whose name is a whole identifier at the start of `input`.
    ///
    /// Returns the variable and the length of its name.
    #[must_use]
    pub fn match_prefix(input: &str) -> Option<(Self, usize)> {
        VARIABLES_LONGEST_FIRST.iter().find_map(|&(name, variable)| {
            let rest = input.strip_prefix(name)?;
            let at_boundary = !rest.chars().next().is_some_and(is_identifier_char);
            at_boundary.then_some((variable, name.len()))
        })
    }
}

/// Characters that may continue an identifier.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
