//! Report error types.

use thiserror::Error;

use crate::ledger::{Category, ParentGroup};

/// Why a single ledger entry could not be mapped to a statement bucket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Category tag outside the known set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Asset or liability without a parent group.
    #[error("{category} entry has no parent group")]
    MissingParentGroup {
        /// Category of the entry.
        category: Category,
    },

    /// Asset or liability whose parent group is unknown or belongs to another section.
    #[error("{category} entry has unsupported parent group: {parent_group}")]
    UnsupportedParentGroup {
        /// Category of the entry.
        category: Category,
        /// Offending parent group.
        parent_group: ParentGroup,
    },
}

impl ClassificationError {
    /// Returns the error code reported to the host.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            Self::MissingParentGroup { .. } => "MISSING_PARENT_GROUP",
            Self::UnsupportedParentGroup { .. } => "UNSUPPORTED_PARENT_GROUP",
        }
    }
}

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A ledger entry could not be classified; no partial report is produced.
    #[error("Ledger entry #{index} ({name}) cannot be classified: {source}")]
    Classification {
        /// Zero-based position of the entry in the input.
        index: usize,
        /// Display name of the entry.
        name: String,
        /// Underlying classification failure.
        #[source]
        source: ClassificationError,
    },

    /// Adding a ledger entry pushed its bucket total out of the decimal range.
    #[error("Ledger entry #{index} ({name}) pushes its bucket total out of range")]
    AmountOverflow {
        /// Zero-based position of the entry in the input.
        index: usize,
        /// Display name of the entry.
        name: String,
    },

    /// A statement subtotal left the decimal range.
    #[error("Derived figure {figure} is out of range")]
    TotalOverflow {
        /// Name of the subtotal, e.g. `gross_profit`.
        figure: &'static str,
    },
}

impl ReportError {
    /// Returns the error code reported to the host.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Classification { source, .. } => source.error_code(),
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
            Self::TotalOverflow { .. } => "TOTAL_OVERFLOW",
        }
    }

    /// Position of the offending ledger entry, if one entry is to blame.
    #[must_use]
    pub const fn entry_index(&self) -> Option<usize> {
        match self {
            Self::Classification { index, .. } | Self::AmountOverflow { index, .. } => Some(*index),
            Self::TotalOverflow { .. } => None,
        }
    }
}
