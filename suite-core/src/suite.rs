//! Resolved algorithm suite.
//!
//! [`CryptoSuite`] holds one algorithm per capability, selected by name from
//! an [`AlgorithmRegistry`]. Callers only see trait objects, so swapping
//! `Ed25519` for `ECDSA-P256` is a configuration change.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::config::SuiteConfig;
use crate::consistency::{check_cipher, check_key_agreement, check_signature};
use crate::error::{CoreError, Result};
use crate::logging::sanitize_value;
use crate::registry::{AlgorithmRegistry, CipherEntry};
use std::fmt;
use suite_primitives::{BlockCipher, KeyAgreement, Scheme};
use tracing::{info, instrument};

/// One cipher, one key exchange and one signature scheme.
pub struct CryptoSuite {
    cipher: CipherEntry,
    key_exchange: Box<dyn KeyAgreement>,
    signature: Box<dyn Scheme>,
}

impl fmt::Debug for CryptoSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoSuite")
            .field("cipher", &self.cipher.name)
            .field("key_exchange", &self.key_exchange.algorithm())
            .field("signature", &self.signature.algorithm())
            .finish()
    }
}

impl CryptoSuite {
    /// Resolve `config` against `registry`.
    ///
    /// With `strict_validation` set, each algorithm runs its self-check
    /// (see [`crate::consistency`]) before the suite is returned. The
    /// cipher is checked under an all-zero key of its registered size.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError` if `config` is invalid or a self-check fails
    /// - `UnknownAlgorithm` if a name is not registered
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            cipher = %sanitize_value("algorithm", &config.cipher),
            key_exchange = %sanitize_value("algorithm", &config.key_exchange),
            signature = %sanitize_value("algorithm", &config.signature),
        )
    )]
    pub fn from_config(config: &SuiteConfig, registry: &AlgorithmRegistry) -> Result<Self> {
        config.validate()?;

        let cipher = registry.cipher_entry(&config.cipher)?;
        let key_exchange = registry.key_exchange(&config.key_exchange)?;
        let signature = registry.signature(&config.signature)?;

        let suite = Self { cipher, key_exchange, signature };
        if config.strict_validation {
            suite.self_check()?;
        }

        info!(
            cipher = suite.cipher_name(),
            key_exchange = suite.key_exchange.algorithm(),
            signature = suite.signature.algorithm(),
            strict_validation = config.strict_validation,
            "suite resolved"
        );
        Ok(suite)
    }

    /// Resolve `config` against the built-in algorithms.
    ///
    /// # Errors
    ///
    /// See [`CryptoSuite::from_config`].
    pub fn with_defaults(config: &SuiteConfig) -> Result<Self> {
        Self::from_config(config, &AlgorithmRegistry::with_defaults())
    }

    fn self_check(&self) -> Result<()> {
        let zero_key = vec![0u8; self.cipher.key_size];
        let cipher = self.cipher.new_cipher(&zero_key)?;
        check_cipher(cipher.as_ref())
            .and_then(|()| check_key_agreement(self.key_exchange.as_ref()))
            .and_then(|()| check_signature(self.signature.as_ref()))
            .map_err(|e| CoreError::ConfigurationError(e.to_string()))
    }

    /// Construct the configured cipher under `key`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyLength` if `key` is not [`Self::cipher_key_size`] bytes.
    pub fn cipher(&self, key: &[u8]) -> Result<Box<dyn BlockCipher>> {
        self.cipher.new_cipher(key)
    }

    /// Canonical name of the configured cipher.
    #[must_use]
    pub fn cipher_name(&self) -> &'static str {
        self.cipher.name
    }

    /// Key length the configured cipher expects.
    #[must_use]
    pub fn cipher_key_size(&self) -> usize {
        self.cipher.key_size
    }

    /// The configured key exchange.
    #[must_use]
    pub fn key_exchange(&self) -> &dyn KeyAgreement {
        self.key_exchange.as_ref()
    }

    /// The configured signature scheme.
    #[must_use]
    pub fn signature(&self) -> &dyn Scheme {
        self.signature.as_ref()
    }
}
