//! # Error Types
//!
//! Every failure in `get-secret` is terminal. The variants below classify the
//! failure for the message and exit code only; none of them is retried.

use crate::constants::{EXIT_CODE_FAILURE, EXIT_CODE_USAGE};
use thiserror::Error;

/// Top-level error for a single invocation
#[derive(Debug, Error)]
pub enum FetchError {
    /// Invalid or missing command-line parameters (raised before any network call)
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// Client configuration could not be built
    #[error("configuration error {0}")]
    Configuration(#[from] ConfigurationError),
    /// The `GetSecretValue` call failed
    #[error("Failed to retrieve secret due to error {0}")]
    Retrieval(#[from] RetrievalError),
    /// The secret could not be written to stdout
    #[error("failed to write secret to stdout: {0}")]
    Output(#[from] std::io::Error),
}

impl FetchError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            // clap uses 0 for --help and 2 for usage errors
            FetchError::Parameter(ParameterError::Usage(e)) => {
                u8::try_from(e.exit_code()).unwrap_or(EXIT_CODE_USAGE)
            }
            FetchError::Parameter(ParameterError::MissingRequired { .. }) => EXIT_CODE_USAGE,
            FetchError::Configuration(_) | FetchError::Retrieval(_) | FetchError::Output(_) => {
                EXIT_CODE_FAILURE
            }
        }
    }
}

/// Command-line parameter errors
#[derive(Debug, Error)]
pub enum ParameterError {
    /// clap rejected the arguments (unknown flag, bad value) or help was requested
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// Region or secret identifier was empty after parsing
    #[error("You must supply a region and secret ARN. -r REGION -s SECRET-ARN [-t TIMEOUT IN MILLISECONDS -n SESSION NAME]")]
    MissingRequired {
        /// Rendered usage and defaults, printed before the message
        usage: String,
    },
}

/// Failures while building the client configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Endpoint override is not an http(s) URL
    #[error("invalid endpoint override '{0}': expected an http:// or https:// URL")]
    InvalidEndpoint(String),
    /// The SDK config carries no credentials provider
    #[error("no credentials provider available")]
    NoCredentialsProvider,
    /// The credentials provider failed to produce credentials
    #[error("unable to resolve credentials: {0}")]
    Credentials(String),
}

/// Failures of the remote `GetSecretValue` call
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// The execution context deadline elapsed before the call completed
    #[error("deadline exceeded after {timeout_ms}ms")]
    DeadlineExceeded { timeout_ms: u64 },
    /// The secret does not exist
    #[error("ResourceNotFoundException: {message}")]
    NotFound { message: String },
    /// Any other error returned by the service (access denied, decryption failure, ...)
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    /// The request never produced a response (connection refused, DNS, TLS)
    #[error("dispatch failure: {0}")]
    Dispatch(String),
    /// The secret exists but only carries a binary payload
    #[error("secret '{secret_id}' has no string value")]
    NoStringValue { secret_id: String },
}

impl RetrievalError {
    /// Whether this is a timeout-class failure
    pub fn is_timeout(&self) -> bool {
        matches!(self, RetrievalError::DeadlineExceeded { .. })
    }

    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            RetrievalError::DeadlineExceeded { .. } => "deadline_exceeded",
            RetrievalError::NotFound { .. } => "not_found",
            RetrievalError::Service { .. } => "service",
            RetrievalError::Dispatch(_) => "dispatch",
            RetrievalError::NoStringValue { .. } => "no_string_value",
        }
    }
}
