//! # AWS Secrets Manager Client
//!
//! Client for the AWS Secrets Manager `GetSecretValue` API.
//!
//! The client is built from a [`ClientConfiguration`] with retries disabled and
//! the credentials resolved up front, then issues exactly one request per call.

mod auth;

pub use self::auth::{create_sdk_config, resolve_credentials};

use crate::config::ClientConfiguration;
use crate::error::{ConfigurationError, RetrievalError};
use crate::provider::{SecretStore, SecretValue};
use async_trait::async_trait;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::{debug, info};

/// AWS Secrets Manager provider implementation
pub struct AwsSecretManager {
    client: SecretsManagerClient,
    region: String,
    timeout_ms: u64,
}

impl std::fmt::Debug for AwsSecretManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretManager")
            .field("region", &self.region)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

impl AwsSecretManager {
    /// Create a new AWS Secrets Manager client
    ///
    /// Loads the SDK config, resolves credentials once and pins them on the
    /// client so the request does not resolve them a second time.
    ///
    /// # Errors
    /// Returns [`ConfigurationError`] when the endpoint override is invalid or
    /// no credentials can be resolved.
    pub async fn connect(config: &ClientConfiguration) -> Result<Self, ConfigurationError> {
        config.validate()?;

        let sdk_config = create_sdk_config(config).await;
        let credentials = resolve_credentials(&sdk_config).await?;

        let client_config = aws_sdk_secretsmanager::config::Builder::from(&sdk_config)
            .credentials_provider(credentials)
            .build();

        info!(region = %config.region, "Created AWS Secrets Manager client");

        Ok(Self {
            client: SecretsManagerClient::from_conf(client_config),
            region: config.region.clone(),
            timeout_ms: config
                .operation_timeout
                .map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
        })
    }
}

#[async_trait]
impl SecretStore for AwsSecretManager {
    async fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue, RetrievalError> {
        debug!(secret_id, "Calling GetSecretValue");

        let mut output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e, self.timeout_ms))?;

        let value = output
            .secret_string
            .take()
            .ok_or_else(|| RetrievalError::NoStringValue {
                secret_id: secret_id.to_string(),
            })?;

        Ok(SecretValue::new(value).with_metadata(
            output.arn.take(),
            output.name.take(),
            output.version_id.take(),
        ))
    }
}

/// Map an SDK failure onto the retrieval taxonomy
fn classify_sdk_error(err: &SdkError<GetSecretValueError>, timeout_ms: u64) -> RetrievalError {
    match err {
        SdkError::TimeoutError(_) => RetrievalError::DeadlineExceeded { timeout_ms },
        SdkError::DispatchFailure(failure) if failure.is_timeout() => {
            RetrievalError::DeadlineExceeded { timeout_ms }
        }
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            let message = service_err
                .message()
                .unwrap_or("no message returned by the service")
                .to_string();
            if service_err.is_resource_not_found_exception() {
                RetrievalError::NotFound { message }
            } else {
                RetrievalError::Service {
                    code: service_err.code().unwrap_or("Unknown").to_string(),
                    message,
                }
            }
        }
        _ => RetrievalError::Dispatch(DisplayErrorContext(err).to_string()),
    }
}
