//! # Providers
//!
//! The secret store seam. `get-secret` talks to exactly one backend
//! (AWS Secrets Manager); the trait exists so the retrieval step can be
//! exercised against test doubles.

pub mod aws;

use crate::error::RetrievalError;
use async_trait::async_trait;
use zeroize::Zeroizing;

/// A store that returns the decrypted value of a secret by identifier
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Issue exactly one request for `secret_id`
    async fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue, RetrievalError>;
}

/// Decrypted secret returned by a [`SecretStore`]
///
/// The value is wiped from memory on drop and never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue {
    value: Zeroizing<String>,
    /// ARN reported by the service
    pub arn: Option<String>,
    /// Friendly name reported by the service
    pub name: Option<String>,
    /// Version id reported by the service
    pub version_id: Option<String>,
}

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
            arn: None,
            name: None,
            version_id: None,
        }
    }

    #[must_use]
    pub fn with_metadata(
        mut self,
        arn: Option<String>,
        name: Option<String>,
        version_id: Option<String>,
    ) -> Self {
        self.arn = arn;
        self.name = name;
        self.version_id = version_id;
        self
    }

    /// The decrypted secret string
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretValue")
            .field("value", &"<redacted>")
            .field("arn", &self.arn)
            .field("name", &self.name)
            .field("version_id", &self.version_id)
            .finish()
    }
}
