#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Suite Primitives
//!
//! Validated, interchangeable cryptographic primitives behind uniform traits,
//! so protocol code can swap algorithms without knowing their key formats.
//!
//! ## Algorithms
//!
//! ### Block Ciphers
//!
//! - **cipher::aes**: AES-128 / AES-256 single-block permutation (FIPS 197) via `aes`
//!
//! ### Key Exchange
//!
//! - **kex::ecdh**: ECDH over NIST P-384 via `p384`, raw X-coordinate output
//!
//! ### Signatures
//!
//! - **ec::ed25519**: Ed25519 (RFC 8032) via `ed25519-dalek`
//! - **ec::ecdsa_p256**: hedged ECDSA over NIST P-256 via `p256`, strict DER
//!
//! ## Boundary Discipline
//!
//! | Input | Check | Error |
//! |-------|-------|-------|
//! | Symmetric key | exact length | `InvalidKeyLength` |
//! | Private scalar | exact width, `0 < d < n` | `InvalidKeyLength` / `OutOfRange` |
//! | Public point | uncompressed framing, on curve, not identity | `InvalidPoint` |
//! | ECDSA signature | strict DER, re-encodes identically | `MalformedSignature` |
//! | Random source | `try_fill_bytes` succeeds | `RandomSourceFailure` |
//!
//! Checks run before any input reaches curve or cipher arithmetic.
//!
//! ## Randomness
//!
//! No function reads ambient randomness. Key generation and ECDSA signing take
//! a `rand_core::CryptoRngCore` from the caller.

pub mod cipher;
pub mod ec;
pub mod error;
pub mod kex;
pub mod rand;

pub use cipher::{Aes128Cipher, Aes256Cipher, BlockCipher};
pub use ec::{
    CurveParameters, EcdsaP256, EcdsaP256PrivateKey, EcdsaP256PublicKey, Ed25519,
    Ed25519PrivateKey, Ed25519PublicKey, Scheme, SignatureComponents, SignatureScheme,
};
pub use error::{Error, Result};
pub use kex::{KeyAgreement, KeyExchange, P384KeyExchange, P384PrivateKey, P384PublicKey};
