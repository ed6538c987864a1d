//! # Secret Retrieval
//!
//! The linear flow of one invocation:
//!
//! `parameters validated → context created → config built → secret fetched → printed`
//!
//! Any failure ends the flow with a [`FetchError`]. Nothing is retried.

use crate::cli::{parse_parameters, InvocationParameters};
use crate::config::{ClientConfiguration, EnvOverrides};
use crate::error::{ConfigurationError, FetchError, RetrievalError};
use crate::provider::aws::AwsSecretManager;
use crate::provider::{SecretStore, SecretValue};
use crate::runtime::context::ExecutionContext;
use std::ffi::OsString;
use std::future::Future;
use std::io::Write;
use tracing::{debug, Instrument};

/// Retrieve the secret named by `params` from AWS Secrets Manager
///
/// # Errors
/// [`FetchError::Configuration`] or [`FetchError::Retrieval`]
pub async fn retrieve_secret(
    params: &InvocationParameters,
    overrides: &EnvOverrides,
) -> Result<SecretValue, FetchError> {
    fetch_secret(params, overrides, connect_aws).await
}

/// Retrieve a secret through a store built by `connect`
///
/// The deadline starts before `connect` runs and covers both the client
/// construction and the request.
///
/// # Errors
/// - [`FetchError::Configuration`] when `connect` fails
/// - [`FetchError::Retrieval`] when the deadline passes or the store call fails
pub async fn fetch_secret<F, Fut, S>(
    params: &InvocationParameters,
    overrides: &EnvOverrides,
    connect: F,
) -> Result<SecretValue, FetchError>
where
    F: FnOnce(ClientConfiguration) -> Fut,
    Fut: Future<Output = Result<S, ConfigurationError>>,
    S: SecretStore,
{
    let span = tracing::span!(
        tracing::Level::DEBUG,
        "get_secret.fetch",
        region = %params.region,
        secret_id = %params.secret_id,
        timeout_ms = params.timeout_ms
    );

    async {
        debug!(
            session_name = %params.session_name,
            "Session name is reserved for role assumption and not used by the request"
        );

        let ctx = ExecutionContext::with_timeout(params.timeout());
        let config = ClientConfiguration::for_invocation(params, overrides);

        let store = ctx.run(connect(config)).await??;
        debug!(remaining = ?ctx.remaining(), "Client configured");

        let secret = retrieve_from(&store, params, &ctx).await?;
        debug!(
            arn = secret.arn.as_deref().unwrap_or("-"),
            version_id = secret.version_id.as_deref().unwrap_or("-"),
            "Secret retrieved"
        );
        Ok::<SecretValue, FetchError>(secret)
    }
    .instrument(span)
    .await
}

/// Issue exactly one request against `store` within the context deadline
///
/// # Errors
/// [`RetrievalError`] from the store, or `DeadlineExceeded`
pub async fn retrieve_from<S>(
    store: &S,
    params: &InvocationParameters,
    ctx: &ExecutionContext,
) -> Result<SecretValue, RetrievalError>
where
    S: SecretStore + ?Sized,
{
    ctx.run(store.get_secret_value(&params.secret_id)).await?
}

/// Write the raw secret value: no trailing newline, no escaping
///
/// # Errors
/// Any I/O error from writing or flushing `out`
pub fn emit_result<W: Write>(result: &SecretValue, out: &mut W) -> std::io::Result<()> {
    out.write_all(result.expose().as_bytes())?;
    out.flush()
}

/// Parse `args`, fetch the secret through `connect` and write it to `out`
///
/// # Errors
/// Any [`FetchError`]; `out` is untouched unless the secret was fetched.
pub async fn run<I, T, F, Fut, S, W>(
    args: I,
    overrides: &EnvOverrides,
    connect: F,
    out: &mut W,
) -> Result<(), FetchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(ClientConfiguration) -> Fut,
    Fut: Future<Output = Result<S, ConfigurationError>>,
    S: SecretStore,
    W: Write,
{
    let params = parse_parameters(args)?;
    let secret = fetch_secret(&params, overrides, connect).await?;
    emit_result(&secret, out)?;
    Ok(())
}

/// Build the AWS Secrets Manager store for `config`
///
/// # Errors
/// [`ConfigurationError`] from [`AwsSecretManager::connect`]
pub async fn connect_aws(config: ClientConfiguration) -> Result<AwsSecretManager, ConfigurationError> {
    AwsSecretManager::connect(&config).await
}
