//! Ledger entries and the caller-owned entry store.
//!
//! This module holds the raw input of the reporting engine:
//! - Ledger entries with category and parent-group tags
//! - The ordered entry store edited by the UI layer
//! - Error types for store operations

pub mod entry;
pub mod error;
pub mod store;

pub use entry::{Category, LedgerEntry, ParentGroup};
pub use error::LedgerError;
pub use store::LedgerStore;
