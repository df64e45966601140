#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ECDH (Elliptic Curve Diffie-Hellman) over NIST P-384
//!
//! Arithmetic is provided by the `p384` crate. Encodings:
//!
//! - private key: 48-byte big-endian scalar, `0 < d < n`
//! - public key: 97-byte uncompressed point `0x04 ‖ X ‖ Y`
//! - shared secret: 48-byte X coordinate of `d·Q`

use super::KeyExchange;
use crate::ec::curve::CurveParameters;
use crate::error::{Error, Result};
use p384::elliptic_curve::sec1::ToEncodedPoint;
use p384::{FieldBytes, PublicKey, SecretKey};
use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use tracing::instrument;
use zeroize::Zeroizing;

/// P-384 public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P384PublicKey(PublicKey);

/// P-384 private key. The scalar is zeroized on drop.
#[derive(Clone)]
pub struct P384PrivateKey(SecretKey);

impl std::fmt::Debug for P384PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("P384PrivateKey").field("scalar", &"[REDACTED]").finish()
    }
}

/// ECDH over P-384.
#[derive(Debug, Clone, Copy)]
pub struct P384KeyExchange {
    curve: &'static CurveParameters,
}

impl Default for P384KeyExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl P384KeyExchange {
    /// Algorithm name
    pub const NAME: &'static str = "P-384";

    /// Create the key exchange bound to the P-384 parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self { curve: &CurveParameters::P384 }
    }

    /// Curve domain parameters
    #[must_use]
    pub const fn curve(&self) -> &'static CurveParameters {
        self.curve
    }
}

impl KeyExchange for P384KeyExchange {
    type PrivateKey = P384PrivateKey;
    type PublicKey = P384PublicKey;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn private_key_size(&self) -> usize {
        self.curve.scalar_size
    }

    fn public_key_size(&self) -> usize {
        self.curve.uncompressed_point_size()
    }

    fn shared_secret_size(&self) -> usize {
        self.curve.field_size
    }

    fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(P384PrivateKey, P384PublicKey)> {
        let scalar = self.curve.random_scalar(rng)?;
        let private_key = self.parse_private_key(&scalar)?;
        let public_key = self.public_key(&private_key);
        Ok((private_key, public_key))
    }

    fn public_key(&self, private_key: &P384PrivateKey) -> P384PublicKey {
        P384PublicKey(private_key.0.public_key())
    }

    #[instrument(level = "debug", skip_all, fields(algorithm = "P-384", len = bytes.len()))]
    fn parse_private_key(&self, bytes: &[u8]) -> Result<P384PrivateKey> {
        self.curve.check_scalar(Self::NAME, bytes)?;
        SecretKey::from_bytes(FieldBytes::from_slice(bytes))
            .map(P384PrivateKey)
            .map_err(|_e| Error::OutOfRange { algorithm: Self::NAME })
    }

    #[instrument(level = "debug", skip_all, fields(algorithm = "P-384", len = bytes.len()))]
    fn parse_public_key(&self, bytes: &[u8]) -> Result<P384PublicKey> {
        self.curve.check_uncompressed_point(Self::NAME, bytes)?;
        PublicKey::from_sec1_bytes(bytes).map(P384PublicKey).map_err(|_e| {
            tracing::debug!("rejected P-384 point");
            Error::InvalidPoint { algorithm: Self::NAME }
        })
    }

    fn marshal_private_key(&self, private_key: &P384PrivateKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(private_key.0.to_bytes().to_vec())
    }

    fn marshal_public_key(&self, public_key: &P384PublicKey) -> Vec<u8> {
        public_key.0.to_encoded_point(false).as_bytes().to_vec()
    }

    fn shared_secret(
        &self,
        private_key: &P384PrivateKey,
        peer_public_key: &P384PublicKey,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let shared = p384::ecdh::diffie_hellman(
            private_key.0.to_nonzero_scalar(),
            peer_public_key.0.as_affine(),
        );
        let secret = Zeroizing::new(shared.raw_secret_bytes().to_vec());

        let zeros = vec![0u8; secret.len()];
        if bool::from(secret.as_slice().ct_eq(&zeros)) {
            return Err(Error::KeyExchangeFailure("all-zero shared secret".to_string()));
        }
        Ok(secret)
    }
}
