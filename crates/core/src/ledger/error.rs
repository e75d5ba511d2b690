//! Ledger store error types.

use finreport_shared::types::LedgerEntryId;
use thiserror::Error;

/// Errors that can occur while editing the ledger entry store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No entry with this ID is in the store.
    #[error("Ledger entry not found: {0}")]
    EntryNotFound(LedgerEntryId),
}

impl LedgerError {
    /// Returns the error code reported to the host.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
        }
    }
}
