//! Tracing subscriber setup for the process embedding the engine.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{AppError, AppResult};

/// Installs a global `tracing` subscriber with an env filter and a fmt layer.
///
/// `RUST_LOG` wins over `default_filter` when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> AppResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AppError::Internal(format!("failed to install tracing subscriber: {e}")))
}
