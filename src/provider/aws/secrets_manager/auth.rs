//! # AWS Secrets Manager Authentication
//!
//! Handles AWS SDK configuration and credential resolution.

use crate::config::ClientConfiguration;
use crate::error::ConfigurationError;
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use tracing::{debug, info};

/// Create AWS SDK config for the requested region with retries disabled
///
/// Credentials come from `config.credentials` when set, otherwise from the
/// default credential chain (environment, profile, web identity, container, IMDS).
pub async fn create_sdk_config(config: &ClientConfiguration) -> SdkConfig {
    let mut builder = aws_config::defaults(BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts));

    if let Some(timeout) = config.operation_timeout {
        builder = builder.timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());
    }

    if let Some(endpoint) = &config.endpoint_url {
        info!("Routing AWS Secrets Manager requests to {}", endpoint);
        builder = builder.endpoint_url(endpoint);
    }

    if let Some(credentials) = &config.credentials {
        debug!("Using explicitly supplied credentials");
        builder = builder.credentials_provider(credentials.clone());
    }

    builder.load().await
}

/// Resolve credentials once so that a missing identity is reported as a configuration error
///
/// # Errors
/// - [`ConfigurationError::NoCredentialsProvider`] when the SDK config has no provider
/// - [`ConfigurationError::Credentials`] when the provider chain fails
pub async fn resolve_credentials(sdk_config: &SdkConfig) -> Result<Credentials, ConfigurationError> {
    let provider = sdk_config
        .credentials_provider()
        .ok_or(ConfigurationError::NoCredentialsProvider)?;

    let credentials = provider
        .provide_credentials()
        .await
        .map_err(|e| ConfigurationError::Credentials(DisplayErrorContext(&e).to_string()))?;

    debug!(
        expires = credentials.expiry().is_some(),
        "Resolved AWS credentials"
    );
    Ok(credentials)
}
