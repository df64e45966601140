//! Algorithm Registry
//!
//! Maps algorithm names to constructors so a suite can be chosen at
//! configuration time and then used through trait objects only.
//!
//! ## Built-in Names
//!
//! | Kind | Names |
//! |------|-------|
//! | Cipher | `AES-128`, `AES-256` |
//! | Key exchange | `P-384` |
//! | Signature | `Ed25519`, `ECDSA-P256` |
//!
//! Lookup ignores ASCII case; the canonical spelling is what `name()` /
//! `algorithm()` report.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use suite_primitives::cipher::{AES_128_KEY_LEN, AES_256_KEY_LEN};
use suite_primitives::{
    Aes128Cipher, Aes256Cipher, BlockCipher, EcdsaP256, Ed25519, KeyAgreement, P384KeyExchange,
    Scheme,
};

/// Registry table an algorithm belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// Block cipher
    Cipher,
    /// Key exchange
    KeyExchange,
    /// Signature scheme
    Signature,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Cipher => write!(f, "cipher"),
            AlgorithmKind::KeyExchange => write!(f, "key exchange"),
            AlgorithmKind::Signature => write!(f, "signature"),
        }
    }
}

/// Builds a keyed cipher.
pub type CipherConstructor = fn(&[u8]) -> suite_primitives::Result<Box<dyn BlockCipher>>;

/// Builds a key exchange.
pub type KeyExchangeConstructor = fn() -> Box<dyn KeyAgreement>;

/// Builds a signature scheme.
pub type SignatureConstructor = fn() -> Box<dyn Scheme>;

/// A registered cipher: its canonical name, key size and constructor.
#[derive(Clone, Copy)]
pub struct CipherEntry {
    /// Canonical name
    pub name: &'static str,
    /// Key length the constructor expects
    pub key_size: usize,
    construct: CipherConstructor,
}

impl fmt::Debug for CipherEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherEntry")
            .field("name", &self.name)
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

impl CipherEntry {
    /// Construct the cipher with `key`.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` from the primitive.
    pub fn new_cipher(&self, key: &[u8]) -> Result<Box<dyn BlockCipher>> {
        Ok((self.construct)(key)?)
    }
}

#[derive(Clone)]
struct Named<C> {
    name: &'static str,
    construct: C,
}

/// Name → constructor tables for every algorithm kind.
#[derive(Clone, Default)]
pub struct AlgorithmRegistry {
    ciphers: BTreeMap<String, CipherEntry>,
    key_exchanges: BTreeMap<String, Named<KeyExchangeConstructor>>,
    signatures: BTreeMap<String, Named<SignatureConstructor>>,
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("ciphers", &self.names(AlgorithmKind::Cipher))
            .field("key_exchanges", &self.names(AlgorithmKind::KeyExchange))
            .field("signatures", &self.names(AlgorithmKind::Signature))
            .finish()
    }
}

fn lookup_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn duplicate(kind: AlgorithmKind, name: &str) -> CoreError {
    CoreError::ConfigurationError(format!("{kind} algorithm {name} is already registered"))
}

impl AlgorithmRegistry {
    /// Registry with no algorithms.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in algorithm.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.insert_cipher(Aes128Cipher::NAME, AES_128_KEY_LEN, |key| {
            Ok(Box::new(Aes128Cipher::new(key)?))
        });
        registry.insert_cipher(Aes256Cipher::NAME, AES_256_KEY_LEN, |key| {
            Ok(Box::new(Aes256Cipher::new(key)?))
        });
        registry.insert_key_exchange(P384KeyExchange::NAME, || Box::new(P384KeyExchange::new()));
        registry.insert_signature(Ed25519::NAME, || Box::new(Ed25519));
        registry.insert_signature(EcdsaP256::NAME, || Box::new(EcdsaP256::new()));
        registry
    }

    fn insert_cipher(&mut self, name: &'static str, key_size: usize, construct: CipherConstructor) {
        self.ciphers.insert(lookup_key(name), CipherEntry { name, key_size, construct });
    }

    fn insert_key_exchange(&mut self, name: &'static str, construct: KeyExchangeConstructor) {
        self.key_exchanges.insert(lookup_key(name), Named { name, construct });
    }

    fn insert_signature(&mut self, name: &'static str, construct: SignatureConstructor) {
        self.signatures.insert(lookup_key(name), Named { name, construct });
    }

    /// Register an additional cipher.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the name is taken.
    pub fn register_cipher(
        &mut self,
        name: &'static str,
        key_size: usize,
        construct: CipherConstructor,
    ) -> Result<()> {
        if self.ciphers.contains_key(&lookup_key(name)) {
            return Err(duplicate(AlgorithmKind::Cipher, name));
        }
        self.insert_cipher(name, key_size, construct);
        Ok(())
    }

    /// Register an additional key exchange.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the name is taken.
    pub fn register_key_exchange(
        &mut self,
        name: &'static str,
        construct: KeyExchangeConstructor,
    ) -> Result<()> {
        if self.key_exchanges.contains_key(&lookup_key(name)) {
            return Err(duplicate(AlgorithmKind::KeyExchange, name));
        }
        self.insert_key_exchange(name, construct);
        Ok(())
    }

    /// Register an additional signature scheme.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the name is taken.
    pub fn register_signature(
        &mut self,
        name: &'static str,
        construct: SignatureConstructor,
    ) -> Result<()> {
        if self.signatures.contains_key(&lookup_key(name)) {
            return Err(duplicate(AlgorithmKind::Signature, name));
        }
        self.insert_signature(name, construct);
        Ok(())
    }

    /// Cipher entry for `name`.
    ///
    /// # Errors
    /// Returns `UnknownAlgorithm` if nothing is registered under `name`.
    pub fn cipher_entry(&self, name: &str) -> Result<CipherEntry> {
        self.ciphers
            .get(&lookup_key(name))
            .copied()
            .ok_or_else(|| unknown(AlgorithmKind::Cipher, name))
    }

    /// Construct the cipher `name` keyed with `key`.
    ///
    /// # Errors
    /// Returns `UnknownAlgorithm`, or the primitive's key length error.
    pub fn cipher(&self, name: &str, key: &[u8]) -> Result<Box<dyn BlockCipher>> {
        self.cipher_entry(name)?.new_cipher(key)
    }

    /// Construct the key exchange `name`.
    ///
    /// # Errors
    /// Returns `UnknownAlgorithm` if nothing is registered under `name`.
    pub fn key_exchange(&self, name: &str) -> Result<Box<dyn KeyAgreement>> {
        self.key_exchanges
            .get(&lookup_key(name))
            .map(|entry| (entry.construct)())
            .ok_or_else(|| unknown(AlgorithmKind::KeyExchange, name))
    }

    /// Construct the signature scheme `name`.
    ///
    /// # Errors
    /// Returns `UnknownAlgorithm` if nothing is registered under `name`.
    pub fn signature(&self, name: &str) -> Result<Box<dyn Scheme>> {
        self.signatures
            .get(&lookup_key(name))
            .map(|entry| (entry.construct)())
            .ok_or_else(|| unknown(AlgorithmKind::Signature, name))
    }

    /// Canonical names registered for `kind`, sorted by lookup key.
    #[must_use]
    pub fn names(&self, kind: AlgorithmKind) -> Vec<&'static str> {
        match kind {
            AlgorithmKind::Cipher => self.ciphers.values().map(|entry| entry.name).collect(),
            AlgorithmKind::KeyExchange => {
                self.key_exchanges.values().map(|entry| entry.name).collect()
            }
            AlgorithmKind::Signature => self.signatures.values().map(|entry| entry.name).collect(),
        }
    }

    /// Whether `name` is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: AlgorithmKind, name: &str) -> bool {
        let key = lookup_key(name);
        match kind {
            AlgorithmKind::Cipher => self.ciphers.contains_key(&key),
            AlgorithmKind::KeyExchange => self.key_exchanges.contains_key(&key),
            AlgorithmKind::Signature => self.signatures.contains_key(&key),
        }
    }
}

fn unknown(kind: AlgorithmKind, name: &str) -> CoreError {
    tracing::debug!(%kind, name, "unknown algorithm");
    CoreError::UnknownAlgorithm { kind, name: name.to_string() }
}
