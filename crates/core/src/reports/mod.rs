//! Financial report generation.
//!
//! This module provides pure business logic for turning ledger entries into
//! statements:
//! - Classification of entries into statement buckets
//! - Single-pass aggregation of bucket totals
//! - Profit & loss and balance sheet subtotals
//! - Whole-report generation including ratios

pub mod aggregator;
pub mod classifier;
pub mod derived;
pub mod error;
pub mod service;
pub mod types;


pub use aggregator::{BucketTotal, BucketTotals, aggregate};
pub use classifier::{Bucket, classify};
pub use derived::{DerivedTotals, derive};
pub use error::{ClassificationError, ReportError};
pub use service::ReportService;
pub use types::FinancialReport;
