//! # Initialization
//!
//! Tracing subscriber setup. Logs are written to stderr so that stdout carries
//! nothing but the secret value.

use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::{anyhow, Result};

/// Install the global tracing subscriber
///
/// The filter comes from `RUST_LOG`, falling back to warnings only.
///
/// # Errors
/// Fails when a global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))
}
