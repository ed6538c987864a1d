//! # Command-Line Parameters
//!
//! Argument surface of `get-secret`:
//!
//! ```bash
//! get-secret -r eu-west-2 -s arn:aws:secretsmanager:eu-west-2:123456789012:secret:my-secret -t 2000
//! ```
//!
//! Parsing produces an [`InvocationParameters`] value that is handed to the
//! retrieval step explicitly. Validation failures are returned, never acted on
//! here; `main` decides how to report them.

use crate::constants::{DEFAULT_REGION, DEFAULT_SESSION_NAME, DEFAULT_TIMEOUT_MS};
use crate::error::ParameterError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::time::Duration;

/// Retrieve a secret from AWS Secrets Manager and print its value
#[derive(Parser, Debug)]
#[command(name = "get-secret")]
#[command(
    about = "Retrieve a secret from AWS Secrets Manager and print its decrypted value",
    long_about = None
)]
struct Cli {
    /// The AWS region to use
    #[arg(short = 'r', long = "region", default_value = DEFAULT_REGION)]
    region: String,

    /// The ARN (or name) of the secret to access
    #[arg(short = 's', long = "secret-id", default_value = "")]
    secret_id: String,

    /// The amount of time to wait for the API call, in milliseconds
    #[arg(short = 't', long = "timeout", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// The name of the session for AWS STS (reserved, not used by the request)
    #[arg(short = 'n', long = "session-name", default_value = DEFAULT_SESSION_NAME)]
    session_name: String,
}

/// Validated parameters for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationParameters {
    /// Target AWS region
    pub region: String,
    /// Secret ARN or name
    pub secret_id: String,
    /// Deadline for configuration and the request, in milliseconds
    pub timeout_ms: u64,
    /// Reserved for role assumption
    pub session_name: String,
}

impl InvocationParameters {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Parse and validate the process arguments (the first item is the binary name)
///
/// # Errors
/// - [`ParameterError::Usage`] when clap rejects the arguments or help was requested
/// - [`ParameterError::MissingRequired`] when region or secret identifier is empty
pub fn parse_parameters<I, T>(args: I) -> Result<InvocationParameters, ParameterError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    if cli.region.is_empty() || cli.secret_id.is_empty() {
        return Err(ParameterError::MissingRequired { usage: usage() });
    }

    Ok(InvocationParameters {
        region: cli.region,
        secret_id: cli.secret_id,
        timeout_ms: cli.timeout_ms,
        session_name: cli.session_name,
    })
}

/// Rendered help text listing every flag with its default
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
