//! # Suite Logging Utilities
//!
//! Structured logging with `tracing`, plus helpers that keep key material
//! and secrets out of log output.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use suite_core::logging::{init_tracing, sanitize_bytes};
//!
//! // Sets the global subscriber; call once per process.
//! init_tracing().expect("Failed to init tracing");
//!
//! let public_key = [4u8; 97];
//! tracing::info!(public_key = %sanitize_bytes(&public_key), "peer key received");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "suite=info";

/// Keys that indicate potentially sensitive data.
///
/// Any metadata key containing one of these (case-insensitive) is redacted.
pub const SENSITIVE_KEY_PATTERNS: &[&str] = &[
    "key",
    "secret",
    "password",
    "token",
    "credential",
    "private",
    "seed",
    "auth",
    "session",
    "passphrase",
];

/// Maximum length for metadata values before truncation.
pub const MAX_METADATA_VALUE_LENGTH: usize = 1000;

/// Byte strings up to this length are logged by length only.
const FINGERPRINT_THRESHOLD: usize = 32;

/// Check if a metadata key might contain sensitive data.
///
/// ```rust
/// use suite_core::logging::is_potentially_sensitive;
///
/// assert!(is_potentially_sensitive("private_key"));
/// assert!(is_potentially_sensitive("SharedSecret"));
/// assert!(!is_potentially_sensitive("algorithm"));
/// ```
#[must_use]
pub fn is_potentially_sensitive(key: &str) -> bool {
    let lower = key.to_lowercase();
    SENSITIVE_KEY_PATTERNS.iter().any(|pattern| lower.contains(pattern))
}

/// Sanitize a single metadata value based on its key.
///
/// Sensitive keys yield `[REDACTED]`; values longer than
/// [`MAX_METADATA_VALUE_LENGTH`] are replaced by their length.
///
/// ```rust
/// use suite_core::logging::sanitize_value;
///
/// assert_eq!(sanitize_value("seed", "00112233"), "[REDACTED]");
/// assert_eq!(sanitize_value("signature_algorithm", "Ed25519"), "Ed25519");
/// ```
#[must_use]
pub fn sanitize_value(key: &str, value: &str) -> String {
    if is_potentially_sensitive(key) {
        "[REDACTED]".to_string()
    } else if value.len() > MAX_METADATA_VALUE_LENGTH {
        format!("[{} chars truncated]", value.len())
    } else {
        value.to_string()
    }
}

/// First 8 bytes of SHA-256, hex encoded.
fn sha256_fingerprint(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(data);
    digest.get(..8).map_or_else(|| hex::encode(digest), hex::encode)
}

/// Sanitize byte data for logging.
///
/// Never prints content. Inputs above 32 bytes also get a SHA-256
/// fingerprint so log lines can be correlated.
///
/// ```rust
/// use suite_core::logging::sanitize_bytes;
///
/// assert_eq!(sanitize_bytes(&[1, 2, 3]), "[3 bytes]");
/// assert!(sanitize_bytes(&[0u8; 65]).starts_with("[65 bytes, fingerprint: "));
/// ```
#[must_use]
pub fn sanitize_bytes(data: &[u8]) -> String {
    if data.len() <= FINGERPRINT_THRESHOLD {
        format!("[{} bytes]", data.len())
    } else {
        format!("[{} bytes, fingerprint: {}]", data.len(), sha256_fingerprint(data))
    }
}

/// Apply [`sanitize_value`] to every entry of a metadata map.
#[must_use]
pub fn sanitize_metadata(metadata: &HashMap<String, String>) -> HashMap<String, String> {
    metadata.iter().map(|(k, v)| (k.clone(), sanitize_value(k, v))).collect()
}

/// Install the global `tracing` subscriber.
///
/// Filtering follows `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns `ConfigurationError` if a global subscriber is already set.
pub fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| CoreError::ConfigurationError(format!("tracing init failed: {e}")))?;

    info!("suite logging initialized");
    Ok(())
}
