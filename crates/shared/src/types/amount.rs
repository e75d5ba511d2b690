//! Two-period amounts with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every figure in a report is a `(previous, current)` pair of `rust_decimal::Decimal`.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Reporting column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Closed prior year.
    Previous,
    /// Open current year.
    Current,
}

/// A figure reported for both the previous and the current year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAmount {
    /// Previous-year amount.
    pub previous: Decimal,
    /// Current-year amount.
    pub current: Decimal,
}

impl PeriodAmount {
    /// Both columns zero.
    pub const ZERO: Self = Self {
        previous: Decimal::ZERO,
        current: Decimal::ZERO,
    };

    /// Creates a new pair.
    #[must_use]
    pub const fn new(previous: Decimal, current: Decimal) -> Self {
        Self { previous, current }
    }

    /// Returns the amount for one column.
    #[must_use]
    pub const fn get(&self, period: Period) -> Decimal {
        match period {
            Period::Previous => self.previous,
            Period::Current => self.current,
        }
    }

    /// Returns true if both columns are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.previous.is_zero() && self.current.is_zero()
    }

    /// Column-wise sum, or `None` if either column leaves the decimal range.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self {
            previous: self.previous.checked_add(rhs.previous)?,
            current: self.current.checked_add(rhs.current)?,
        })
    }

    /// Column-wise difference, or `None` if either column leaves the decimal range.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Self {
            previous: self.previous.checked_sub(rhs.previous)?,
            current: self.current.checked_sub(rhs.current)?,
        })
    }

    /// Year-over-year change in percent: `(current - previous) / previous * 100`.
    ///
    /// Returns `None` when there is no previous amount to compare against or
    /// the result leaves the decimal range.
    #[must_use]
    pub fn change_percent(&self) -> Option<Decimal> {
        if self.previous.is_zero() {
            return None;
        }
        self.current
            .checked_sub(self.previous)?
            .checked_div(self.previous)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }
}

/// Parses a user-entered amount, falling back to zero.
///
/// Blank, missing, or unparseable input is treated as zero, never as an error:
/// form and CSV input routinely leaves amount cells empty.
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Serde helper accepting numbers, numeric strings, `null`, or garbage for an amount.
///
/// Use together with `#[serde(default)]` so an absent field also becomes zero.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientAmountVisitor)
}

struct LenientAmountVisitor;

impl<'de> Visitor<'de> for LenientAmountVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an amount as a number or string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Ok(Decimal::try_from(v).unwrap_or(Decimal::ZERO))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Ok(parse_amount(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
        Ok(Decimal::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Decimal, D::Error> {
        deserializer.deserialize_any(Self)
    }
}
