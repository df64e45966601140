#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Elliptic Curve Signatures
//!
//! ## Supported Schemes
//!
//! - **Ed25519**: RFC 8032, deterministic, raw 64-byte signatures
//! - **ECDSA-P256**: hedged ECDSA over NIST P-256, strict DER signatures
//!
//! ## Unified API Design
//!
//! - `SignatureScheme` trait for typed keys, generic over the random source
//! - `Scheme` trait as the object-safe byte-level facade
//! - `CurveParameters` constants shared by reference
//! - Verification is boolean; misuse is a typed error

/// Curve domain parameters and scalar/point boundary checks
pub mod curve;

/// Strict DER codec for ECDSA signatures
pub mod der;

/// ECDSA over NIST P-256
pub mod ecdsa_p256;

/// Ed25519 signature operations
pub mod ed25519;

/// Unified signature traits
pub mod traits;

pub use curve::CurveParameters;
pub use der::{SignatureComponents, encode_signature, parse_signature_components};
pub use ecdsa_p256::{EcdsaP256, EcdsaP256PrivateKey, EcdsaP256PublicKey};
pub use ed25519::{Ed25519, Ed25519PrivateKey, Ed25519PublicKey};
pub use traits::{Scheme, SignatureScheme};
