//! Analyst-defined financial ratios.
//!
//! Ratios are arithmetic formulas over named derived totals, evaluated
//! separately for the previous and current year:
//! - Formula tokenization and restricted evaluation
//! - The fixed variable table
//! - Threshold status derivation
//! - Built-in ratio set and configuration mapping

pub mod error;
pub mod evaluator;
pub mod formula;
pub mod presets;
pub mod service;
pub mod types;
pub mod variables;

#[cfg(test)]
mod props;

pub use error::EvaluationFailure;
pub use evaluator::evaluate;
pub use presets::{default_ratios, definitions_from_config};
pub use service::RatioService;
pub use types::{RatioDefinition, RatioDirection, RatioResult, RatioStatus};
pub use variables::Variable;
