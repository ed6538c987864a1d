//! # Constants
//!
//! Default values for the `get-secret` CLI and its client configuration.

/// Region used when `-r` is not supplied
pub const DEFAULT_REGION: &str = "eu-west-2";

/// Timeout for the whole retrieval (milliseconds) when `-t` is not supplied
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Session name used when `-n` is not supplied
pub const DEFAULT_SESSION_NAME: &str = "param_session";

/// Retries are disabled: one attempt per invocation
pub const MAX_ATTEMPTS: u32 = 1;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "get_secret=warn,secret_fetcher=warn";

/// Enables the endpoint override (mock servers, local stacks)
pub const PACT_MODE_ENV: &str = "PACT_MODE";

/// Endpoint URL used for Secrets Manager when `PACT_MODE` is set
pub const SECRETS_MANAGER_ENDPOINT_ENV: &str = "AWS_SECRETS_MANAGER_ENDPOINT";

/// Provider name attached to explicitly supplied credentials
pub const STATIC_CREDENTIALS_PROVIDER: &str = "secret-fetcher-static";

/// Exit code for invalid or missing command-line parameters
pub const EXIT_CODE_USAGE: u8 = 2;

/// Exit code for configuration, retrieval, and output failures
pub const EXIT_CODE_FAILURE: u8 = 1;
