//! Suite configuration.
//!
//! A [`SuiteConfig`] names one algorithm per capability. Names are resolved
//! against an [`AlgorithmRegistry`](crate::registry::AlgorithmRegistry) by
//! [`CryptoSuite::from_config`](crate::suite::CryptoSuite::from_config).

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use suite_primitives::{Aes256Cipher, Ed25519, P384KeyExchange};

/// Algorithm selection for a [`CryptoSuite`](crate::suite::CryptoSuite).
///
/// Missing JSON fields take their defaults; unknown fields are rejected.
///
/// # Examples
/// ```rust
/// use suite_core::config::SuiteConfig;
///
/// let config = SuiteConfig::new()
///     .with_signature("ECDSA-P256")
///     .with_cipher("AES-128")
///     .build()
///     .expect("valid config");
///
/// let parsed = SuiteConfig::from_json(r#"{"signature": "ECDSA-P256", "cipher": "AES-128"}"#)
///     .expect("valid json");
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuiteConfig {
    /// Block cipher name. Default: `AES-256`
    pub cipher: String,

    /// Key exchange name. Default: `P-384`
    pub key_exchange: String,

    /// Signature scheme name. Default: `Ed25519`
    pub signature: String,

    /// Whether to self-check each resolved algorithm before handing out the
    /// suite. Default: `true`
    pub strict_validation: bool,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            cipher: Aes256Cipher::NAME.to_string(),
            key_exchange: P384KeyExchange::NAME.to_string(),
            signature: Ed25519::NAME.to_string(),
            strict_validation: true,
        }
    }
}

impl SuiteConfig {
    /// Configuration with the default algorithms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cipher name and return self for method chaining.
    #[must_use]
    pub fn with_cipher(mut self, name: impl Into<String>) -> Self {
        self.cipher = name.into();
        self
    }

    /// Set the key exchange name and return self for method chaining.
    #[must_use]
    pub fn with_key_exchange(mut self, name: impl Into<String>) -> Self {
        self.key_exchange = name.into();
        self
    }

    /// Set the signature scheme name and return self for method chaining.
    #[must_use]
    pub fn with_signature(mut self, name: impl Into<String>) -> Self {
        self.signature = name.into();
        self
    }

    /// Set strict validation and return self for method chaining.
    #[must_use]
    pub fn with_strict_validation(mut self, enabled: bool) -> Self {
        self.strict_validation = enabled;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// See [`SuiteConfig::validate`].
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Check that every algorithm name is present.
    ///
    /// Whether a name is actually registered is only known at resolution.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("cipher", &self.cipher),
            ("key_exchange", &self.key_exchange),
            ("signature", &self.signature),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigurationError(format!(
                    "{field} algorithm name must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON or unknown fields, and
    /// `ConfigurationError` if validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.build()
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
