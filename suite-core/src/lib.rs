#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Suite Core
//!
//! Composition layer over `suite-primitives`: pick one cipher, one key
//! exchange and one signature scheme by name, then use them through trait
//! objects.
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::OsRng;
//! use suite_core::{AlgorithmRegistry, CryptoSuite, SuiteConfig};
//!
//! let config = SuiteConfig::new().with_signature("ecdsa-p256");
//! let suite = CryptoSuite::from_config(&config, &AlgorithmRegistry::with_defaults())?;
//!
//! let scheme = suite.signature();
//! let (public_key, private_key) = scheme.generate_key_pair(&mut OsRng)?;
//! let signature = scheme.sign(&private_key, b"hello", &mut OsRng)?;
//! assert!(scheme.verify(&public_key, b"hello", &signature));
//! # Ok::<(), suite_core::CoreError>(())
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: name → constructor tables, case-insensitive lookup
//! - [`config`]: serde-backed [`SuiteConfig`]
//! - [`suite`]: the resolved [`CryptoSuite`]
//! - [`consistency`]: self-checks run under `strict_validation`
//! - [`logging`]: `tracing` setup and log sanitization
//! - [`error`]: [`CoreError`]

pub mod config;
pub mod consistency;
pub mod error;
pub mod logging;
pub mod registry;
pub mod suite;

pub use config::SuiteConfig;
pub use consistency::ConsistencyError;
pub use error::{CoreError, Result};
pub use logging::{init_tracing, sanitize_bytes, sanitize_value};
pub use registry::{AlgorithmKind, AlgorithmRegistry, CipherEntry};
pub use suite::CryptoSuite;

pub use suite_primitives::{BlockCipher, KeyAgreement, Scheme};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
