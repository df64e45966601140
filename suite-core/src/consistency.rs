//! Consistency Self-Checks
//!
//! Known-input checks run on freshly resolved algorithms before a suite is
//! handed out:
//!
//! - **Cipher**: decrypt(encrypt(block)) returns the block and the ciphertext
//!   differs from it
//! - **Key exchange**: both sides of a generated pair derive the same secret
//! - **Signature**: a fixed message verifies, a different message does not
//!
//! Each check draws from a fixed-seed `ChaCha20Rng`, so a failure reproduces.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use subtle::ConstantTimeEq;
use suite_primitives::{BlockCipher, KeyAgreement, Scheme};
use thiserror::Error;
use tracing::{debug, instrument};

/// Fixed message signed by [`check_signature`].
pub const CONSISTENCY_TEST_MESSAGE: &[u8] = b"suite consistency test";

const CONSISTENCY_SEED: [u8; 32] = [0x5a; 32];

/// Why a self-check failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// The primitive returned an error during the check.
    #[error("{algorithm} self-check operation failed: {source}")]
    OperationFailed {
        /// Algorithm under test
        algorithm: &'static str,
        /// Underlying error
        source: suite_primitives::Error,
    },

    /// Round trip did not restore the input.
    #[error("{0} round trip did not restore the plaintext")]
    CipherMismatch(&'static str),

    /// The two sides derived different secrets.
    #[error("{0} peers derived different shared secrets")]
    AgreementMismatch(&'static str),

    /// Signature did not verify, or verified the wrong message.
    #[error("{0} key pair is inconsistent")]
    KeyPairInconsistent(&'static str),
}

fn op_failed(algorithm: &'static str) -> impl Fn(suite_primitives::Error) -> ConsistencyError {
    move |source| ConsistencyError::OperationFailed { algorithm, source }
}

fn test_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_seed(CONSISTENCY_SEED)
}

/// Encrypt and decrypt one known block.
///
/// # Errors
///
/// Returns `CipherMismatch` if the block is not restored or is left unchanged.
#[instrument(level = "debug", skip_all, fields(algorithm = cipher.name()))]
pub fn check_cipher(cipher: &dyn BlockCipher) -> Result<(), ConsistencyError> {
    let algorithm = cipher.name();
    let plaintext: Vec<u8> = (0u8..).take(cipher.block_size()).collect();
    let mut ciphertext = vec![0u8; cipher.block_size()];
    let mut recovered = vec![0u8; cipher.block_size()];

    cipher.encrypt_block(&mut ciphertext, &plaintext).map_err(op_failed(algorithm))?;
    cipher.decrypt_block(&mut recovered, &ciphertext).map_err(op_failed(algorithm))?;

    if ciphertext == plaintext || recovered != plaintext {
        return Err(ConsistencyError::CipherMismatch(algorithm));
    }
    debug!("cipher self-check passed");
    Ok(())
}

/// Run one agreement between two generated parties.
///
/// # Errors
///
/// Returns `AgreementMismatch` if the two secrets differ.
#[instrument(level = "debug", skip_all, fields(algorithm = kex.algorithm()))]
pub fn check_key_agreement(kex: &dyn KeyAgreement) -> Result<(), ConsistencyError> {
    let algorithm = kex.algorithm();
    let mut rng = test_rng();

    let (alice_sk, alice_pk) = kex.generate_key_pair(&mut rng).map_err(op_failed(algorithm))?;
    let (bob_sk, bob_pk) = kex.generate_key_pair(&mut rng).map_err(op_failed(algorithm))?;

    let derived = kex.derive_public_key(&alice_sk).map_err(op_failed(algorithm))?;
    let alice_view = kex.agree(&alice_sk, &bob_pk).map_err(op_failed(algorithm))?;
    let bob_view = kex.agree(&bob_sk, &alice_pk).map_err(op_failed(algorithm))?;

    if derived != alice_pk || !bool::from(alice_view.as_slice().ct_eq(bob_view.as_slice())) {
        return Err(ConsistencyError::AgreementMismatch(algorithm));
    }
    debug!("key agreement self-check passed");
    Ok(())
}

/// Sign [`CONSISTENCY_TEST_MESSAGE`] with a generated key pair.
///
/// # Errors
///
/// Returns `KeyPairInconsistent` if the signature fails to verify or also
/// verifies a different message.
#[instrument(level = "debug", skip_all, fields(algorithm = scheme.algorithm()))]
pub fn check_signature(scheme: &dyn Scheme) -> Result<(), ConsistencyError> {
    let algorithm = scheme.algorithm();
    let mut rng = test_rng();

    let (public_key, private_key) =
        scheme.generate_key_pair(&mut rng).map_err(op_failed(algorithm))?;
    let signature =
        scheme.sign(&private_key, CONSISTENCY_TEST_MESSAGE, &mut rng).map_err(op_failed(algorithm))?;

    if !scheme.verify(&public_key, CONSISTENCY_TEST_MESSAGE, &signature)
        || scheme.verify(&public_key, b"a different message", &signature)
    {
        return Err(ConsistencyError::KeyPairInconsistent(algorithm));
    }
    debug!("signature self-check passed");
    Ok(())
}
