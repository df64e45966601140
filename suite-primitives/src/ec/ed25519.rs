#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Ed25519 Signatures
//!
//! RFC 8032 Ed25519 over `ed25519-dalek`.
//!
//! ## Encodings
//!
//! | Item | Bytes | Layout |
//! |------|-------|--------|
//! | Public key | 32 | compressed Edwards point |
//! | Private key | 64 | `seed ‖ public key` |
//! | Seed | 32 | RFC 8032 secret |
//! | Signature | 64 | `R ‖ S` |
//!
//! Signing is deterministic and cannot fail. Verification uses the strict
//! rules of `verify_strict` (canonical `S`, no small-order keys or `R`).

use super::traits::SignatureScheme;
use crate::error::{Error, Result};
use crate::rand::random_array;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use rand_core::CryptoRngCore;
use tracing::instrument;
use zeroize::Zeroizing;

/// Public key length
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// Private key length (`seed ‖ public key`)
pub const ED25519_PRIVATE_KEY_LEN: usize = 64;

/// Seed length
pub const ED25519_SEED_LEN: usize = 32;

/// Signature length
pub const ED25519_SIGNATURE_LEN: usize = 64;

/// Ed25519 public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey(VerifyingKey);

impl Ed25519PublicKey {
    /// Compressed 32-byte encoding
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_LEN] {
        self.0.to_bytes()
    }
}

/// Ed25519 private key. The expanded secret is zeroized on drop.
#[derive(Clone)]
pub struct Ed25519PrivateKey(SigningKey);

impl std::fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ed25519PrivateKey").field("seed", &"[REDACTED]").finish()
    }
}

/// The Ed25519 signature scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519;

impl Ed25519 {
    /// Algorithm name
    pub const NAME: &'static str = "Ed25519";

    /// Generate a key pair from a 32-byte seed drawn from `rng`.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails.
    pub fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Ed25519PublicKey, Ed25519PrivateKey)> {
        let seed: Zeroizing<[u8; ED25519_SEED_LEN]> = Zeroizing::new(random_array(rng)?);
        self.derive_from_seed(seed.as_slice())
    }

    /// Deterministically derive a key pair from a seed.
    ///
    /// # Errors
    /// Returns `InvalidSeedSize` unless `seed` is exactly 32 bytes.
    #[instrument(level = "debug", skip_all, fields(seed_len = seed.len()))]
    pub fn derive_from_seed(&self, seed: &[u8]) -> Result<(Ed25519PublicKey, Ed25519PrivateKey)> {
        let seed: Zeroizing<[u8; ED25519_SEED_LEN]> =
            Zeroizing::new(seed.try_into().map_err(|_e| {
                tracing::debug!("rejected Ed25519 seed");
                Error::InvalidSeedSize { expected: ED25519_SEED_LEN, actual: seed.len() }
            })?);
        let signing_key = SigningKey::from_bytes(&seed);
        let public_key = Ed25519PublicKey(signing_key.verifying_key());
        Ok((public_key, Ed25519PrivateKey(signing_key)))
    }

    /// The 32-byte seed a private key was derived from.
    #[must_use]
    pub fn seed(&self, private_key: &Ed25519PrivateKey) -> Zeroizing<[u8; ED25519_SEED_LEN]> {
        Zeroizing::new(private_key.0.to_bytes())
    }

    /// Sign `message`.
    #[must_use]
    pub fn sign(&self, private_key: &Ed25519PrivateKey, message: &[u8]) -> [u8; ED25519_SIGNATURE_LEN] {
        private_key.0.sign(message).to_bytes()
    }

    /// Verify `signature` over `message`.
    ///
    /// Wrong-length or non-canonical signatures are `false`.
    #[must_use]
    pub fn verify(&self, public_key: &Ed25519PublicKey, message: &[u8], signature: &[u8]) -> bool {
        match self.parse_signature(signature) {
            Ok(signature) => public_key.0.verify_strict(message, &signature).is_ok(),
            Err(_) => false,
        }
    }

    /// Parse a 64-byte signature.
    ///
    /// # Errors
    /// Returns `MalformedSignature` on a length mismatch.
    pub fn parse_signature(&self, bytes: &[u8]) -> Result<Signature> {
        let bytes: &[u8; ED25519_SIGNATURE_LEN] = bytes.try_into().map_err(|_e| {
            Error::MalformedSignature(format!(
                "Ed25519 signature must be {ED25519_SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Signature::from_bytes(bytes))
    }

    /// Parse a 32-byte public key.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` on a length mismatch and `InvalidPoint` if the
    /// bytes do not decompress to a curve point.
    #[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
    pub fn parse_public_key(&self, bytes: &[u8]) -> Result<Ed25519PublicKey> {
        let bytes: &[u8; ED25519_PUBLIC_KEY_LEN] =
            bytes.try_into().map_err(|_e| Error::InvalidKeyLength {
                algorithm: Self::NAME,
                expected: ED25519_PUBLIC_KEY_LEN,
                actual: bytes.len(),
            })?;
        VerifyingKey::from_bytes(bytes).map(Ed25519PublicKey).map_err(|_e| {
            tracing::debug!("rejected Ed25519 point");
            Error::InvalidPoint { algorithm: Self::NAME }
        })
    }

    /// Parse a 64-byte `seed ‖ public key` private key.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` on a length mismatch and `InconsistentKeyPair`
    /// if the public half does not match the seed.
    #[instrument(level = "debug", skip_all, fields(len = bytes.len()))]
    pub fn parse_private_key(&self, bytes: &[u8]) -> Result<Ed25519PrivateKey> {
        let bytes: &[u8; ED25519_PRIVATE_KEY_LEN] =
            bytes.try_into().map_err(|_e| Error::InvalidKeyLength {
                algorithm: Self::NAME,
                expected: ED25519_PRIVATE_KEY_LEN,
                actual: bytes.len(),
            })?;
        SigningKey::from_keypair_bytes(bytes).map(Ed25519PrivateKey).map_err(|_e| {
            tracing::debug!("rejected Ed25519 keypair bytes");
            Error::InconsistentKeyPair
        })
    }
}

impl SignatureScheme for Ed25519 {
    type PrivateKey = Ed25519PrivateKey;
    type PublicKey = Ed25519PublicKey;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn public_key_size(&self) -> usize {
        ED25519_PUBLIC_KEY_LEN
    }

    fn private_key_size(&self) -> usize {
        ED25519_PRIVATE_KEY_LEN
    }

    fn signature_size(&self) -> usize {
        ED25519_SIGNATURE_LEN
    }

    fn generate_key<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(Ed25519PublicKey, Ed25519PrivateKey)> {
        Ed25519::generate_key(self, rng)
    }

    fn public_key(&self, private_key: &Ed25519PrivateKey) -> Ed25519PublicKey {
        Ed25519PublicKey(private_key.0.verifying_key())
    }

    fn parse_public_key(&self, bytes: &[u8]) -> Result<Ed25519PublicKey> {
        Ed25519::parse_public_key(self, bytes)
    }

    fn parse_private_key(&self, bytes: &[u8]) -> Result<Ed25519PrivateKey> {
        Ed25519::parse_private_key(self, bytes)
    }

    fn marshal_public_key(&self, public_key: &Ed25519PublicKey) -> Vec<u8> {
        public_key.to_bytes().to_vec()
    }

    fn marshal_private_key(&self, private_key: &Ed25519PrivateKey) -> Zeroizing<Vec<u8>> {
        let keypair = Zeroizing::new(private_key.0.to_keypair_bytes());
        Zeroizing::new(keypair.to_vec())
    }

    fn sign_message<R: CryptoRngCore + ?Sized>(
        &self,
        private_key: &Ed25519PrivateKey,
        message: &[u8],
        _rng: &mut R,
    ) -> Result<Vec<u8>> {
        Ok(self.sign(private_key, message).to_vec())
    }

    fn verify_message(&self, public_key: &Ed25519PublicKey, message: &[u8], signature: &[u8]) -> bool {
        self.verify(public_key, message, signature)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn decode(s: &str) -> Vec<u8> {
        hex::decode(s).expect("valid hex")
    }

    fn check_rfc8032_vector(seed: &str, public: &str, message: &str, signature: &str) {
        let scheme = Ed25519;
        let (public_key, private_key) = scheme.derive_from_seed(&decode(seed)).expect("seed");
        assert_eq!(public_key.to_bytes().to_vec(), decode(public));

        let produced = scheme.sign(&private_key, &decode(message));
        assert_eq!(produced.to_vec(), decode(signature));
        assert!(scheme.verify(&public_key, &decode(message), &produced));
    }

    // RFC 8032 Section 7.1, TEST 1 (empty message)
    #[test]
    fn test_rfc8032_vector_1() {
        check_rfc8032_vector(
            "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
            "",
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
             5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
        );
    }

    // RFC 8032 Section 7.1, TEST 2 (1-byte message)
    #[test]
    fn test_rfc8032_vector_2() {
        check_rfc8032_vector(
            "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
            "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
            "72",
            "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
             085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
        );
    }

    // RFC 8032 Section 7.1, TEST 3 (2-byte message)
    #[test]
    fn test_rfc8032_vector_3() {
        check_rfc8032_vector(
            "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
            "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
            "af82",
            "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac\
             18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a",
        );
    }

    #[test]
    fn test_seed_size_enforced() {
        let result = Ed25519.derive_from_seed(&[0u8; 31]);
        assert_eq!(result.err(), Some(Error::InvalidSeedSize { expected: 32, actual: 31 }));
        assert!(Ed25519.derive_from_seed(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_generate_is_reproducible_from_rng_seed() {
        let (pk_a, sk_a) = Ed25519.generate_key(&mut ChaCha20Rng::seed_from_u64(9)).expect("gen");
        let (pk_b, sk_b) = Ed25519.generate_key(&mut ChaCha20Rng::seed_from_u64(9)).expect("gen");
        assert_eq!(pk_a, pk_b);
        assert_eq!(*Ed25519.seed(&sk_a), *Ed25519.seed(&sk_b));
    }

    #[test]
    fn test_private_key_layout_is_seed_then_public() {
        let seed = [0x5au8; 32];
        let (public_key, private_key) = Ed25519.derive_from_seed(&seed).expect("seed");
        let encoded = Ed25519.marshal_private_key(&private_key);
        assert_eq!(encoded.len(), ED25519_PRIVATE_KEY_LEN);
        assert_eq!(&encoded[..32], &seed);
        assert_eq!(&encoded[32..], &public_key.to_bytes());

        let reparsed = Ed25519.parse_private_key(&encoded).expect("parse");
        assert_eq!(*Ed25519.seed(&reparsed), seed);
    }

    #[test]
    fn test_inconsistent_private_key_rejected() {
        let (_, private_key) = Ed25519.derive_from_seed(&[1u8; 32]).expect("seed");
        let (other_public, _) = Ed25519.derive_from_seed(&[2u8; 32]).expect("seed");
        let mut encoded = Ed25519.marshal_private_key(&private_key).to_vec();
        encoded[32..].copy_from_slice(&other_public.to_bytes());

        assert_eq!(Ed25519.parse_private_key(&encoded).err(), Some(Error::InconsistentKeyPair));
    }

    #[test]
    fn test_public_key_validation() {
        assert_eq!(
            Ed25519.parse_public_key(&[0u8; 31]).err(),
            Some(Error::InvalidKeyLength { algorithm: "Ed25519", expected: 32, actual: 31 })
        );

        let off_curve = (2u8..=255)
            .map(|y| {
                let mut bytes = [0u8; 32];
                bytes[0] = y;
                bytes
            })
            .find(|bytes| VerifyingKey::from_bytes(bytes).is_err())
            .expect("some y has no matching x");
        assert_eq!(
            Ed25519.parse_public_key(&off_curve).err(),
            Some(Error::InvalidPoint { algorithm: "Ed25519" })
        );
    }

    #[test]
    fn test_verify_never_errors() {
        let (public_key, private_key) = Ed25519.derive_from_seed(&[3u8; 32]).expect("seed");
        let message = b"verification is boolean";
        let signature = Ed25519.sign(&private_key, message);

        assert!(!Ed25519.verify(&public_key, b"other message", &signature));
        assert!(!Ed25519.verify(&public_key, message, &signature[..63]));
        assert!(!Ed25519.verify(&public_key, message, &[]));

        let mut tampered = signature;
        tampered[10] ^= 0x01;
        assert!(!Ed25519.verify(&public_key, message, &tampered));
    }

    #[test]
    fn test_small_order_key_rejected_where_cofactorless_verify_accepts() {
        use ed25519_dalek::Verifier;

        // Identity as both A and R, with S = 0: [S]B == R + [k]A for every message
        let mut identity = [0u8; 32];
        identity[0] = 0x01;
        let mut forged = [0u8; ED25519_SIGNATURE_LEN];
        forged[..32].copy_from_slice(&identity);

        let public_key = Ed25519.parse_public_key(&identity).expect("identity decompresses");
        let signature = Ed25519.parse_signature(&forged).expect("64 bytes");
        for message in [&b""[..], b"any message", b"another one"] {
            assert!(public_key.0.verify(message, &signature).is_ok());
            assert!(!Ed25519.verify(&public_key, message, &forged));
        }
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let (_, private_key) = Ed25519.derive_from_seed(&[4u8; 32]).expect("seed");
        assert!(format!("{private_key:?}").contains("REDACTED"));
    }
}
