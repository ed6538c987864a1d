//! # Client Configuration
//!
//! Per-invocation configuration for the Secrets Manager client.
//!
//! The retry policy is fixed at a single attempt so that total latency is
//! bounded by the invocation timeout. Environment overrides (endpoint URL for
//! mock servers) are read once at startup, see [`EnvOverrides`].

mod env;

pub use env::EnvOverrides;

use crate::cli::InvocationParameters;
use crate::constants::MAX_ATTEMPTS;
use crate::error::ConfigurationError;
use aws_credential_types::Credentials;
use std::time::Duration;

/// Configuration for one Secrets Manager client
///
/// Built once per invocation and never reused.
#[derive(Debug, Clone)]
pub struct ClientConfiguration {
    /// AWS region the client is bound to
    pub region: String,
    /// Maximum number of attempts per request (always 1)
    pub max_attempts: u32,
    /// Operation timeout handed to the SDK, `None` when the invocation timeout is zero
    pub operation_timeout: Option<Duration>,
    /// Endpoint override, `None` for the regional AWS endpoint
    pub endpoint_url: Option<String>,
    /// Explicit credentials, `None` to resolve ambient credentials
    pub credentials: Option<Credentials>,
}

impl ClientConfiguration {
    /// Configuration bound to `region` with retries disabled
    pub fn new(region: impl Into<String>, timeout: Duration) -> Self {
        Self {
            region: region.into(),
            max_attempts: MAX_ATTEMPTS,
            operation_timeout: (!timeout.is_zero()).then_some(timeout),
            endpoint_url: None,
            credentials: None,
        }
    }

    /// Configuration for an invocation, with environment overrides applied
    pub fn for_invocation(params: &InvocationParameters, overrides: &EnvOverrides) -> Self {
        let mut config = Self::new(params.region.clone(), params.timeout());
        if let Some(endpoint) = &overrides.endpoint_url {
            config = config.with_endpoint_url(endpoint.clone());
        }
        config
    }

    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Check the parts of the configuration that do not need the network
    ///
    /// # Errors
    /// [`ConfigurationError::InvalidEndpoint`] when the endpoint override is not an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Some(endpoint) = &self.endpoint_url {
            let has_host = endpoint
                .strip_prefix("http://")
                .or_else(|| endpoint.strip_prefix("https://"))
                .is_some_and(|rest| !rest.is_empty());
            if !has_host {
                return Err(ConfigurationError::InvalidEndpoint(endpoint.clone()));
            }
        }
        Ok(())
    }
}
