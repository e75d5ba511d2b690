//! Ratio evaluation failures.

use serde::Serialize;
use thiserror::Error;

/// Why a ratio formula produced no value.
///
/// Failures are local to one ratio: they never abort other ratios or the statements.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvaluationFailure {
    /// A divisor evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The formula names something outside the variable table.
    #[error("Unknown variable: {name}")]
    UnknownVariable {
        /// The unrecognised identifier.
        name: String,
    },

    /// The formula is not a well-formed arithmetic expression.
    #[error("Syntax error at position {position}: {message}")]
    SyntaxError {
        /// Byte offset into the formula.
        position: usize,
        /// What was wrong.
        message: String,
    },

    /// An intermediate result left the decimal range.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl EvaluationFailure {
    pub(crate) fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            position,
            message: message.into(),
        }
    }

    /// Returns the error code reported to the host.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::UnknownVariable { .. } => "UNKNOWN_VARIABLE",
            Self::SyntaxError { .. } => "SYNTAX_ERROR",
            Self::Overflow => "OVERFLOW",
        }
    }
}
