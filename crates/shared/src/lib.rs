//! Shared types, errors, and configuration for finreport.
//!
//! This crate provides common types used by the reporting engine and its host:
//! - Two-period amounts with decimal precision
//! - Typed IDs for ledger entries and ratio definitions
//! - Application-wide error types
//! - Configuration management
//! - Tracing initialisation for the embedding host

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{AppConfig, RatioConfig, ReportSettings};
pub use error::{AppError, AppResult};
