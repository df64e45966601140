//! Error types for suite-primitives crate.
//!
//! Every validation failure maps to exactly one variant so callers can branch on
//! the kind of failure. Signature verification is the exception: a signature
//! that does not check out is reported as `false`, not as an error.

/// Errors that can occur in cryptographic primitive operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Symmetric key, scalar or encoded private key has the wrong length.
    #[error("{algorithm}: invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Algorithm that rejected the key.
        algorithm: &'static str,
        /// Expected length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Ed25519 seed is not exactly 32 bytes.
    #[error("Invalid seed size: expected {expected}, got {actual}")]
    InvalidSeedSize {
        /// Expected seed length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Scalar is zero or not below the group order.
    #[error("{algorithm}: scalar out of range")]
    OutOfRange {
        /// Algorithm whose group order was violated.
        algorithm: &'static str,
    },

    /// Encoded public key is not a valid point of the curve, or is the identity.
    #[error("{algorithm}: invalid public key point")]
    InvalidPoint {
        /// Algorithm that rejected the point.
        algorithm: &'static str,
    },

    /// DER signature could not be decoded strictly.
    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    /// The injected random source failed or produced unusable output.
    #[error("Random source failure: {0}")]
    RandomSourceFailure(String),

    /// Block buffer length does not equal the cipher block size.
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch {
        /// Block size in bytes.
        expected: usize,
        /// Length of the offending buffer.
        actual: usize,
    },

    /// The signing primitive rejected the input.
    #[error("Signing failed: {0}")]
    SigningFailure(String),

    /// Shared secret derivation failed.
    #[error("Key exchange failed: {0}")]
    KeyExchangeFailure(String),

    /// The public half of an encoded private key does not match its seed.
    #[error("Private key does not match its embedded public key")]
    InconsistentKeyPair,
}

/// Result type alias for suite-primitives operations.
pub type Result<T> = std::result::Result<T, Error>;
