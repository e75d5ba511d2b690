//! Core business logic for finreport.
//!
//! This crate contains pure reporting logic with no I/O, rendering or
//! persistence. Every entry point is a synchronous function over borrowed
//! inputs.
//!
//! # Modules
//!
//! - `ledger` - Ledger entries and the in-memory entry store
//! - `reports` - Classification, aggregation, derived totals and report generation
//! - `ratio` - Analyst-defined ratio formulas and their evaluation

pub mod ledger;
pub mod ratio;
pub mod reports;

pub use ledger::{Category, LedgerEntry, LedgerError, LedgerStore, ParentGroup};
pub use ratio::{EvaluationFailure, RatioDefinition, RatioDirection, RatioResult, RatioService, RatioStatus};
pub use reports::{BucketTotals, ClassificationError, DerivedTotals, FinancialReport, ReportError, ReportService};
