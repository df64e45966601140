#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # ECDSA over NIST P-256
//!
//! Curve arithmetic comes from the `p256` crate. Everything at the byte
//! boundary is checked here first:
//!
//! - private scalars are exactly 32 bytes with `0 < d < n`
//! - public keys are 65-byte uncompressed points that lie on the curve
//! - signatures are strict DER, decoded by [`super::der`] and handed to `p256`
//!   as fixed-width scalars
//!
//! Signing is hedged: RFC 6979 nonces mixed with 32 bytes drawn from the
//! caller's random source. Signatures are emitted with `s <= n/2` and
//! verification rejects the high-S twin `(r, n - s)` as malformed. The core
//! operations take a caller-computed digest; the [`SignatureScheme`] impl
//! hashes messages with SHA-256 first.

use super::curve::CurveParameters;
use super::der::{self, SignatureComponents};
use super::traits::SignatureScheme;
use crate::error::{Error, Result};
use crate::rand::random_array;
use ecdsa::hazmat::{SignPrimitive, bits2field};
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::{FieldBytes, NistP256};
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};
use tracing::instrument;
use zeroize::Zeroizing;

/// Private scalar length
pub const ECDSA_P256_PRIVATE_KEY_LEN: usize = 32;

/// Uncompressed public point length
pub const ECDSA_P256_PUBLIC_KEY_LEN: usize = 65;

/// Longest DER signature: two 33-byte integers plus headers
pub const ECDSA_P256_MAX_SIGNATURE_LEN: usize = 72;

/// Shortest digest accepted for signing
pub const MIN_DIGEST_LEN: usize = 16;

/// P-256 public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcdsaP256PublicKey(VerifyingKey);

/// P-256 private key. The scalar is zeroized on drop.
#[derive(Clone)]
pub struct EcdsaP256PrivateKey(SigningKey);

impl std::fmt::Debug for EcdsaP256PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdsaP256PrivateKey").field("scalar", &"[REDACTED]").finish()
    }
}

/// ECDSA over P-256.
#[derive(Debug, Clone, Copy)]
pub struct EcdsaP256 {
    curve: &'static CurveParameters,
}

impl Default for EcdsaP256 {
    fn default() -> Self {
        Self::new()
    }
}

impl EcdsaP256 {
    /// Algorithm name
    pub const NAME: &'static str = "ECDSA-P256";

    /// Create the scheme bound to the P-256 parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self { curve: &CurveParameters::P256 }
    }

    /// Curve domain parameters
    #[must_use]
    pub const fn curve(&self) -> &'static CurveParameters {
        self.curve
    }

    /// Generate a key pair with a scalar sampled from `rng`.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails.
    pub fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(EcdsaP256PrivateKey, EcdsaP256PublicKey)> {
        let scalar = self.curve.random_scalar(rng)?;
        let private_key = self.parse_private_key(&scalar)?;
        let public_key = self.public_key(&private_key);
        Ok((private_key, public_key))
    }

    /// Parse a 32-byte big-endian scalar.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` on a length mismatch and `OutOfRange` unless
    /// `0 < d < n`.
    #[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
    pub fn parse_private_key(&self, bytes: &[u8]) -> Result<EcdsaP256PrivateKey> {
        self.curve.check_scalar(Self::NAME, bytes)?;
        SigningKey::from_bytes(FieldBytes::from_slice(bytes))
            .map(EcdsaP256PrivateKey)
            .map_err(|_e| Error::OutOfRange { algorithm: Self::NAME })
    }

    /// Fixed-width big-endian scalar, left zero padded.
    #[must_use]
    pub fn marshal_private_key(&self, private_key: &EcdsaP256PrivateKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(private_key.0.to_bytes().to_vec())
    }

    /// Public point `d·G`.
    #[must_use]
    pub fn public_key(&self, private_key: &EcdsaP256PrivateKey) -> EcdsaP256PublicKey {
        EcdsaP256PublicKey(VerifyingKey::from(&private_key.0))
    }

    /// Uncompressed `0x04 ‖ X ‖ Y` encoding.
    #[must_use]
    pub fn marshal_public_key(&self, public_key: &EcdsaP256PublicKey) -> Vec<u8> {
        public_key.0.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Parse an uncompressed point.
    ///
    /// # Errors
    /// Returns `InvalidPoint` for any other length or prefix, for points that
    /// are not on the curve, and for the identity.
    #[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
    pub fn parse_public_key(&self, bytes: &[u8]) -> Result<EcdsaP256PublicKey> {
        self.curve.check_uncompressed_point(Self::NAME, bytes)?;
        VerifyingKey::from_sec1_bytes(bytes).map(EcdsaP256PublicKey).map_err(|_e| {
            tracing::debug!("rejected P-256 point");
            Error::InvalidPoint { algorithm: Self::NAME }
        })
    }

    /// Sign a digest and return the DER signature, normalized to low-S.
    ///
    /// # Errors
    /// - `SigningFailure` if `digest` is shorter than [`MIN_DIGEST_LEN`] or the
    ///   primitive rejects it
    /// - `RandomSourceFailure` if `rng` fails
    #[instrument(level = "debug", skip_all, fields(digest_len = digest.len()))]
    pub fn sign<R: CryptoRngCore + ?Sized>(
        &self,
        private_key: &EcdsaP256PrivateKey,
        digest: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        if digest.len() < MIN_DIGEST_LEN {
            return Err(Error::SigningFailure(format!(
                "digest of {} bytes is shorter than {MIN_DIGEST_LEN}",
                digest.len()
            )));
        }

        let z = bits2field::<NistP256>(digest).map_err(|e| Error::SigningFailure(e.to_string()))?;
        let hedge: Zeroizing<[u8; 32]> = Zeroizing::new(random_array(rng)?);
        let (signature, _) = private_key
            .0
            .as_nonzero_scalar()
            .try_sign_prehashed_rfc6979::<Sha256>(&z, hedge.as_slice())
            .map_err(|e| Error::SigningFailure(e.to_string()))?;
        let signature: Signature = signature.normalize_s().unwrap_or(signature);

        let (r, s) = signature.split_bytes();
        der::encode_signature(&r, &s)
    }

    /// Verify a DER signature over a digest.
    ///
    /// Malformed encodings are `false`; use [`Self::try_verify`] to tell them
    /// apart from a signature that does not check out.
    #[must_use]
    pub fn verify(&self, public_key: &EcdsaP256PublicKey, digest: &[u8], der: &[u8]) -> bool {
        self.try_verify(public_key, digest, der).unwrap_or(false)
    }

    /// Verify a DER signature, reporting undecodable input as an error.
    ///
    /// # Errors
    /// Returns `MalformedSignature` if `der` is not strict DER, a component
    /// is not below the group order, or `s` exceeds `n/2`.
    pub fn try_verify(
        &self,
        public_key: &EcdsaP256PublicKey,
        digest: &[u8],
        der: &[u8],
    ) -> Result<bool> {
        let (r, s) = self.parse_signature_components(der)?.to_fixed_width(self.curve.scalar_size)?;
        let signature =
            Signature::from_scalars(FieldBytes::clone_from_slice(&r), FieldBytes::clone_from_slice(&s))
                .map_err(|_e| Error::MalformedSignature("component not below order".to_string()))?;
        if signature.normalize_s().is_some() {
            return Err(Error::MalformedSignature("s is above n/2".to_string()));
        }

        Ok(public_key.0.verify_prehash(digest, &signature).is_ok())
    }

    /// Strictly decode a DER signature into minimal big-endian `r` and `s`.
    ///
    /// # Errors
    /// Returns `MalformedSignature` for any non-canonical encoding.
    pub fn parse_signature_components(&self, der: &[u8]) -> Result<SignatureComponents> {
        der::parse_signature_components(der)
    }
}

impl SignatureScheme for EcdsaP256 {
    type PrivateKey = EcdsaP256PrivateKey;
    type PublicKey = EcdsaP256PublicKey;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn public_key_size(&self) -> usize {
        self.curve.uncompressed_point_size()
    }

    fn private_key_size(&self) -> usize {
        self.curve.scalar_size
    }

    fn signature_size(&self) -> usize {
        ECDSA_P256_MAX_SIGNATURE_LEN
    }

    fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(EcdsaP256PublicKey, EcdsaP256PrivateKey)> {
        let (private_key, public_key) = EcdsaP256::generate_key(self, rng)?;
        Ok((public_key, private_key))
    }

    fn public_key(&self, private_key: &EcdsaP256PrivateKey) -> EcdsaP256PublicKey {
        EcdsaP256::public_key(self, private_key)
    }

    fn parse_public_key(&self, bytes: &[u8]) -> Result<EcdsaP256PublicKey> {
        EcdsaP256::parse_public_key(self, bytes)
    }

    fn parse_private_key(&self, bytes: &[u8]) -> Result<EcdsaP256PrivateKey> {
        EcdsaP256::parse_private_key(self, bytes)
    }

    fn marshal_public_key(&self, public_key: &EcdsaP256PublicKey) -> Vec<u8> {
        EcdsaP256::marshal_public_key(self, public_key)
    }

    fn marshal_private_key(&self, private_key: &EcdsaP256PrivateKey) -> Zeroizing<Vec<u8>> {
        EcdsaP256::marshal_private_key(self, private_key)
    }

    fn sign_message<R: CryptoRngCore + ?Sized>(
        &self,
        private_key: &EcdsaP256PrivateKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        self.sign(private_key, &Sha256::digest(message), rng)
    }

    fn verify_message(
        &self,
        public_key: &EcdsaP256PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> bool {
        self.verify(public_key, &Sha256::digest(message), signature)
    }
}
