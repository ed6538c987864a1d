//! # Environment Overrides
//!
//! Settings read from environment variables rather than flags.

use crate::constants::{PACT_MODE_ENV, SECRETS_MANAGER_ENDPOINT_ENV};
use tracing::info;

/// Overrides read from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Secrets Manager endpoint, only honoured when `PACT_MODE` is set
    pub endpoint_url: Option<String>,
}

impl EnvOverrides {
    /// Load overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load overrides through `lookup` (used by tests to avoid touching the process environment)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // When PACT_MODE is set, route requests to the mock server instead of real AWS
        if lookup(PACT_MODE_ENV).is_none() {
            return Self::default();
        }

        match lookup(SECRETS_MANAGER_ENDPOINT_ENV).filter(|e| !e.is_empty()) {
            Some(endpoint) => {
                info!(
                    "Pact mode enabled: routing AWS Secrets Manager requests to {}",
                    endpoint
                );
                Self {
                    endpoint_url: Some(endpoint),
                }
            }
            None => {
                info!("Pact mode enabled but {SECRETS_MANAGER_ENDPOINT_ENV} not set, using default AWS endpoint");
                Self::default()
            }
        }
    }
}
