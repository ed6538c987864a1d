//! Library-level retrieval against the mock server
//!
//! These tests build a real AWS SDK client with static credentials and an
//! endpoint override pointing at the mock.

use super::common::{
    aws_error_types, closed_endpoint, test_credentials, MockBehaviour, MockSecret,
    MockSecretsManager,
};
use axum::http::StatusCode;
use secret_fetcher::config::EnvOverrides;
use secret_fetcher::provider::aws::AwsSecretManager;
use secret_fetcher::runtime::{fetch_secret, retrieve_secret, run};
use secret_fetcher::{FetchError, InvocationParameters, RetrievalError, SecretValue};
use std::time::Duration;

fn params(secret_id: &str, timeout_ms: u64) -> InvocationParameters {
    InvocationParameters {
        region: "us-east-1".to_string(),
        secret_id: secret_id.to_string(),
        timeout_ms,
        session_name: "param_session".to_string(),
    }
}

fn overrides(endpoint: &str) -> EnvOverrides {
    EnvOverrides {
        endpoint_url: Some(endpoint.to_string()),
    }
}

async fn fetch(endpoint: &str, params: &InvocationParameters) -> Result<SecretValue, FetchError> {
    fetch_secret(params, &overrides(endpoint), |config| async move {
        AwsSecretManager::connect(&config.with_credentials(test_credentials())).await
    })
    .await
}

#[tokio::test]
async fn test_fetch_string_secret() {
    let server = MockSecretsManager::with_secret("my/test/secret", "hello-world").await;

    let secret = fetch(server.url(), &params("my/test/secret", 2000))
        .await
        .unwrap();

    assert_eq!(secret.expose(), "hello-world");
    assert_eq!(secret.name.as_deref(), Some("my/test/secret"));
    assert!(secret
        .arn
        .as_deref()
        .is_some_and(|arn| arn.starts_with("arn:aws:secretsmanager:")));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_run_writes_exact_value() {
    let server = MockSecretsManager::with_secret("my/test/secret", "hello-world").await;

    let mut out = Vec::new();
    run(
        ["get-secret", "-r", "us-east-1", "-s", "my/test/secret", "-t", "2000"],
        &overrides(server.url()),
        |config| async move {
            AwsSecretManager::connect(&config.with_credentials(test_credentials())).await
        },
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(out, b"hello-world");
}

#[tokio::test]
async fn test_repeated_fetch_is_byte_identical() {
    let value = "{\"username\":\"admin\",\"password\":\"p@ss w0rd\\n\"}";
    let server = MockSecretsManager::with_secret("prod/db", value).await;

    let first = fetch(server.url(), &params("prod/db", 2000)).await.unwrap();
    let second = fetch(server.url(), &params("prod/db", 2000)).await.unwrap();

    assert_eq!(first.expose().as_bytes(), second.expose().as_bytes());
    assert_eq!(first.expose(), value);
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn test_not_found() {
    let server = MockSecretsManager::with_secret("my/test/secret", "hello-world").await;

    let err = fetch(server.url(), &params("missing/secret", 2000))
        .await
        .unwrap_err();

    match &err {
        FetchError::Retrieval(RetrievalError::NotFound { message }) => {
            assert!(message.contains("can't find the specified secret"));
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert!(err
        .to_string()
        .starts_with("Failed to retrieve secret due to error"));
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let server = MockSecretsManager::start(
        &[("my/test/secret", MockSecret::String("hello-world".to_string()))],
        MockBehaviour {
            latency: None,
            fail_with: Some((
                StatusCode::INTERNAL_SERVER_ERROR,
                aws_error_types::INTERNAL_SERVICE,
            )),
        },
    )
    .await;

    let err = fetch(server.url(), &params("my/test/secret", 2000))
        .await
        .unwrap_err();

    match err {
        FetchError::Retrieval(RetrievalError::Service { code, .. }) => {
            assert_eq!(code, "InternalServiceError");
        }
        other => panic!("Expected Service error, got {other:?}"),
    }
    assert_eq!(server.hits(), 1, "Retries must be disabled");
}

#[tokio::test]
async fn test_slow_service_times_out_after_one_attempt() {
    let server = MockSecretsManager::start(
        &[("my/test/secret", MockSecret::String("hello-world".to_string()))],
        MockBehaviour {
            latency: Some(Duration::from_secs(3)),
            fail_with: None,
        },
    )
    .await;

    let err = fetch(server.url(), &params("my/test/secret", 300))
        .await
        .unwrap_err();

    match err {
        FetchError::Retrieval(e) => assert!(e.is_timeout(), "Expected timeout, got {e:?}"),
        other => panic!("Expected Retrieval error, got {other:?}"),
    }
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_zero_timeout() {
    let server = MockSecretsManager::with_secret("my/test/secret", "hello-world").await;

    let err = fetch(server.url(), &params("my/test/secret", 0))
        .await
        .unwrap_err();

    match err {
        FetchError::Retrieval(e) => assert!(e.is_timeout(), "Expected timeout, got {e:?}"),
        other => panic!("Expected Retrieval error, got {other:?}"),
    }
    // A zero deadline is already expired, so nothing reaches the wire
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_binary_secret_rejected() {
    let server = MockSecretsManager::start(
        &[("certs/p12", MockSecret::Binary("AQID".to_string()))],
        MockBehaviour::default(),
    )
    .await;

    let err = fetch(server.url(), &params("certs/p12", 2000))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FetchError::Retrieval(RetrievalError::NoStringValue { ref secret_id }) if secret_id == "certs/p12"
    ));
}

#[tokio::test]
async fn test_connection_refused() {
    let endpoint = closed_endpoint().await;

    let err = fetch(&endpoint, &params("my/test/secret", 2000))
        .await
        .unwrap_err();

    assert!(
        matches!(err, FetchError::Retrieval(RetrievalError::Dispatch(_))),
        "Expected dispatch failure, got {err:?}"
    );
}

#[tokio::test]
async fn test_invalid_endpoint_is_configuration_error() {
    let err = fetch("localhost:4566", &params("my/test/secret", 2000))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Configuration(_)));
    assert!(err.to_string().starts_with("configuration error"));
}

#[tokio::test]
async fn test_retrieve_secret_rejects_bad_endpoint_before_network() {
    let err = retrieve_secret(&params("my/test/secret", 2000), &overrides("ftp://example.com"))
        .await
        .unwrap_err();

    match err {
        FetchError::Configuration(e) => assert!(e.to_string().contains("ftp://example.com")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}
