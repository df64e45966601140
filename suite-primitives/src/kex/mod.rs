#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Key Exchange
//!
//! Diffie-Hellman key agreement behind two traits:
//!
//! - [`KeyExchange`]: typed keys, generic over the random source
//! - [`KeyAgreement`]: object-safe, byte-in/byte-out, given to every
//!   `KeyExchange` by a blanket impl
//!
//! ## Algorithms
//!
//! - **P-384**: ECDH over NIST P-384, raw X-coordinate output (no KDF)
//!
//! The shared secret is returned as-is. Deriving keys from it is the job of the
//! calling protocol.

pub mod ecdh;

use crate::error::Result;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

pub use ecdh::{P384KeyExchange, P384PrivateKey, P384PublicKey};

/// Key agreement over typed keys.
pub trait KeyExchange: Send + Sync {
    /// Parsed private key
    type PrivateKey: Send + Sync;

    /// Parsed public key
    type PublicKey: Clone + PartialEq + Send + Sync;

    /// Algorithm name, e.g. `"P-384"`
    fn name(&self) -> &'static str;

    /// Encoded private key length
    fn private_key_size(&self) -> usize;

    /// Encoded public key length
    fn public_key_size(&self) -> usize;

    /// Shared secret length
    fn shared_secret_size(&self) -> usize;

    /// Generate a key pair from `rng`.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails.
    fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PrivateKey, Self::PublicKey)>;

    /// Public half of `private_key`.
    fn public_key(&self, private_key: &Self::PrivateKey) -> Self::PublicKey;

    /// Parse an encoded private key.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` or `OutOfRange`.
    fn parse_private_key(&self, bytes: &[u8]) -> Result<Self::PrivateKey>;

    /// Parse an encoded public key.
    ///
    /// # Errors
    /// Returns `InvalidPoint`.
    fn parse_public_key(&self, bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Encode a private key.
    fn marshal_private_key(&self, private_key: &Self::PrivateKey) -> Zeroizing<Vec<u8>>;

    /// Encode a public key.
    fn marshal_public_key(&self, public_key: &Self::PublicKey) -> Vec<u8>;

    /// Derive the shared secret with a peer.
    ///
    /// # Errors
    /// Returns `KeyExchangeFailure` if the agreement produces a degenerate
    /// result.
    fn shared_secret(
        &self,
        private_key: &Self::PrivateKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Zeroizing<Vec<u8>>>;
}

/// Object-safe key agreement over encoded keys.
pub trait KeyAgreement: Send + Sync {
    /// Algorithm name
    fn algorithm(&self) -> &'static str;

    /// Encoded private key length
    fn private_key_len(&self) -> usize;

    /// Encoded public key length
    fn public_key_len(&self) -> usize;

    /// Shared secret length
    fn shared_secret_len(&self) -> usize;

    /// Generate an encoded `(private, public)` key pair.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails.
    fn generate_key_pair(&self, rng: &mut dyn CryptoRngCore)
    -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)>;

    /// Encoded public key for an encoded private key.
    ///
    /// # Errors
    /// Returns an error if `private_key` does not parse.
    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>>;

    /// Derive the shared secret from encoded keys.
    ///
    /// # Errors
    /// Returns an error if either key does not parse or the agreement fails.
    fn agree(&self, private_key: &[u8], peer_public_key: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}

impl<T: KeyExchange> KeyAgreement for T {
    fn algorithm(&self) -> &'static str {
        self.name()
    }

    fn private_key_len(&self) -> usize {
        self.private_key_size()
    }

    fn public_key_len(&self) -> usize {
        self.public_key_size()
    }

    fn shared_secret_len(&self) -> usize {
        self.shared_secret_size()
    }

    fn generate_key_pair(
        &self,
        rng: &mut dyn CryptoRngCore,
    ) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)> {
        let (private_key, public_key) = self.generate_key(rng)?;
        Ok((self.marshal_private_key(&private_key), self.marshal_public_key(&public_key)))
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let private_key = self.parse_private_key(private_key)?;
        Ok(self.marshal_public_key(&self.public_key(&private_key)))
    }

    fn agree(&self, private_key: &[u8], peer_public_key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let private_key = self.parse_private_key(private_key)?;
        let peer_public_key = self.parse_public_key(peer_public_key)?;
        self.shared_secret(&private_key, &peer_public_key)
    }
}
