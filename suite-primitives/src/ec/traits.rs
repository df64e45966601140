#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Unified Signature Traits
//!
//! Two layers:
//!
//! - [`SignatureScheme`]: typed keys, generic over the random source. Used when
//!   the algorithm is known at compile time.
//! - [`Scheme`]: object-safe, byte-in/byte-out. Every `SignatureScheme` gets it
//!   through a blanket impl, so a registry can hand out `Box<dyn Scheme>`.
//!
//! Verification is a `bool` on both layers; only misuse (malformed keys) is an
//! error.

use crate::error::Result;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

/// Signature scheme over typed keys.
pub trait SignatureScheme: Send + Sync {
    /// Parsed private key
    type PrivateKey: Send + Sync;

    /// Parsed public key
    type PublicKey: Clone + PartialEq + Send + Sync;

    /// Algorithm name, e.g. `"Ed25519"`
    fn name(&self) -> &'static str;

    /// Encoded public key length
    fn public_key_size(&self) -> usize;

    /// Encoded private key length
    fn private_key_size(&self) -> usize;

    /// Maximum encoded signature length
    fn signature_size(&self) -> usize;

    /// Generate a key pair from `rng`.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails.
    fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::PrivateKey)>;

    /// Public half of `private_key`.
    fn public_key(&self, private_key: &Self::PrivateKey) -> Self::PublicKey;

    /// Parse an encoded public key.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` or `InvalidPoint`.
    fn parse_public_key(&self, bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Parse an encoded private key.
    ///
    /// # Errors
    /// Returns an error if the length, range or internal consistency is wrong.
    fn parse_private_key(&self, bytes: &[u8]) -> Result<Self::PrivateKey>;

    /// Encode a public key.
    fn marshal_public_key(&self, public_key: &Self::PublicKey) -> Vec<u8>;

    /// Encode a private key.
    fn marshal_private_key(&self, private_key: &Self::PrivateKey) -> Zeroizing<Vec<u8>>;

    /// Sign an arbitrary-length message.
    ///
    /// Deterministic schemes ignore `rng`.
    ///
    /// # Errors
    /// Returns `SigningFailure` or `RandomSourceFailure`.
    fn sign_message<R: CryptoRngCore + ?Sized>(
        &self,
        private_key: &Self::PrivateKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>>;

    /// Check `signature` over `message`. Malformed input is `false`.
    fn verify_message(&self, public_key: &Self::PublicKey, message: &[u8], signature: &[u8])
    -> bool;
}

/// Object-safe signature facade over encoded keys.
pub trait Scheme: Send + Sync {
    /// Algorithm name
    fn algorithm(&self) -> &'static str;

    /// Encoded public key length
    fn public_key_len(&self) -> usize;

    /// Encoded private key length
    fn private_key_len(&self) -> usize;

    /// Maximum signature length
    fn max_signature_len(&self) -> usize;

    /// Generate an encoded `(public, private)` key pair.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails.
    fn generate_key_pair(&self, rng: &mut dyn CryptoRngCore)
    -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)>;

    /// Encoded public key for an encoded private key.
    ///
    /// # Errors
    /// Returns an error if `private_key` does not parse.
    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>>;

    /// Sign `message` with an encoded private key.
    ///
    /// # Errors
    /// Returns an error if the key does not parse or signing fails.
    fn sign(&self, private_key: &[u8], message: &[u8], rng: &mut dyn CryptoRngCore)
    -> Result<Vec<u8>>;

    /// Verify with an encoded public key. Unparseable keys are `false`.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool;
}

impl<T: SignatureScheme> Scheme for T {
    fn algorithm(&self) -> &'static str {
        self.name()
    }

    fn public_key_len(&self) -> usize {
        self.public_key_size()
    }

    fn private_key_len(&self) -> usize {
        self.private_key_size()
    }

    fn max_signature_len(&self) -> usize {
        self.signature_size()
    }

    fn generate_key_pair(
        &self,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
        let (public_key, private_key) = self.generate_key(rng)?;
        Ok((self.marshal_public_key(&public_key), self.marshal_private_key(&private_key)))
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let private_key = self.parse_private_key(private_key)?;
        Ok(self.marshal_public_key(&self.public_key(&private_key)))
    }

    fn sign(
        &self,
        private_key: &[u8],
        message: &[u8],
        rng: &mut dyn CryptoRngCore,
    ) -> Result<Vec<u8>> {
        let private_key = self.parse_private_key(private_key)?;
        self.sign_message(&private_key, message, rng)
    }

    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
        match self.parse_public_key(public_key) {
            Ok(public_key) => self.verify_message(&public_key, message, signature),
            Err(_) => false,
        }
    }
}
