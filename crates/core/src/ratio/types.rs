//! Ratio data types.

use std::str::FromStr;

use finreport_shared::types::RatioId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::EvaluationFailure;

/// Which side of the threshold is healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioDirection {
    /// Healthy at or below the threshold (e.g. leverage).
    LowerIsBetter,
    /// Healthy at or above the threshold (e.g. liquidity, margins).
    HigherIsBetter,
}

impl RatioDirection {
    /// Guesses the direction from a ratio name: debt ratios are lower-is-better.
    #[must_use]
    pub fn infer_from_name(name: &str) -> Self {
        if name.to_lowercase().contains("debt") {
            Self::LowerIsBetter
        } else {
            Self::HigherIsBetter
        }
    }
}

impl FromStr for RatioDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "lowerisbetter" | "lower" => Ok(Self::LowerIsBetter),
            "higherisbetter" | "higher" => Ok(Self::HigherIsBetter),
            _ => Err(format!("Unknown ratio direction: {s}")),
        }
    }
}

/// Analyst-defined ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioDefinition {
    /// Ratio ID.
    pub id: RatioId,
    /// Display name.
    pub name: String,
    /// Arithmetic formula over named totals.
    pub formula: String,
    /// Threshold the current value is compared against.
    pub threshold: Option<Decimal>,
    /// Which side of the threshold is healthy.
    pub direction: RatioDirection,
}

impl RatioDefinition {
    /// Creates a definition with a fresh ID.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        formula: impl Into<String>,
        threshold: Option<Decimal>,
        direction: RatioDirection,
    ) -> Self {
        Self {
            id: RatioId::new(),
            name: name.into(),
            formula: formula.into(),
            threshold,
            direction,
        }
    }
}

/// Health flag of a ratio's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioStatus {
    /// On the healthy side of the threshold.
    Good,
    /// On the wrong side of the threshold.
    Alert,
    /// No threshold, or no value to compare.
    NotApplicable,
}

/// Outcome of evaluating one ratio for both periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatioResult {
    /// Ratio ID.
    pub ratio_id: RatioId,
    /// Display name.
    pub name: String,
    /// Previous-year value.
    pub previous_value: Result<Decimal, EvaluationFailure>,
    /// Current-year value.
    pub current_value: Result<Decimal, EvaluationFailure>,
    /// Status of the current-year value.
    pub status: RatioStatus,
}
