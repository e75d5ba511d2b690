//! Common types used across the workspace.

pub mod amount;
pub mod id;

pub use amount::{Period, PeriodAmount, parse_amount};
pub use id::*;
