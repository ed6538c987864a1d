//! # Secret Fetcher
//!
//! Retrieves a single secret from AWS Secrets Manager and prints its decrypted
//! value, for deployment pipelines that turn secrets into Lambda environment
//! variables.
//!
//! One invocation performs exactly one `GetSecretValue` request, bounded by a
//! deadline and with retries disabled. Any failure is terminal.
//!
//! ```bash
//! export DB_PASSWORD="$(get-secret -r eu-west-2 -s prod/db/password -t 2000)"
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod runtime;

pub use cli::{parse_parameters, InvocationParameters};
pub use error::{ConfigurationError, FetchError, ParameterError, RetrievalError};
pub use provider::{SecretStore, SecretValue};
