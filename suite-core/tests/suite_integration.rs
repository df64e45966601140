//! Integration tests for resolved suites
//!
//! Drives every capability through the trait objects handed out by
//! `CryptoSuite`, the way protocol code would.
//!
//! Test coverage:
//! - Key agreement, signing and block encryption for each signature choice
//! - Errors from primitives surface as `CoreError::Primitive`
//! - Registry extension with aliases
//! - Log sanitization of suite material

#![allow(clippy::panic, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use suite_core::logging::{is_potentially_sensitive, sanitize_bytes, sanitize_value};
use suite_core::{AlgorithmKind, AlgorithmRegistry, CoreError, CryptoSuite, SuiteConfig};
use suite_primitives::{EcdsaP256, Ed25519, Error};

fn suite_for(signature: &str) -> CryptoSuite {
    let config = SuiteConfig::new().with_signature(signature);
    CryptoSuite::with_defaults(&config).expect("suite")
}

// ============================================================================
// End-to-end Flow
// ============================================================================

/// Authenticated exchange: each side signs its ephemeral key, both derive the
/// same secret, and the secret keys the block cipher.
fn run_exchange(suite: &CryptoSuite, rng: &mut ChaCha20Rng) {
    let kex = suite.key_exchange();
    let scheme = suite.signature();

    let (alice_id_pk, alice_id_sk) = scheme.generate_key_pair(rng).unwrap();
    let (alice_eph_sk, alice_eph_pk) = kex.generate_key_pair(rng).unwrap();
    let alice_sig = scheme.sign(&alice_id_sk, &alice_eph_pk, rng).unwrap();

    let (bob_eph_sk, bob_eph_pk) = kex.generate_key_pair(rng).unwrap();

    // Bob authenticates Alice's ephemeral key before using it
    assert!(scheme.verify(&alice_id_pk, &alice_eph_pk, &alice_sig));
    assert!(!scheme.verify(&alice_id_pk, &bob_eph_pk, &alice_sig));

    let alice_secret = kex.agree(&alice_eph_sk, &bob_eph_pk).unwrap();
    let bob_secret = kex.agree(&bob_eph_sk, &alice_eph_pk).unwrap();
    assert_eq!(*alice_secret, *bob_secret);
    assert_eq!(alice_secret.len(), kex.shared_secret_len());

    let key = &alice_secret[..suite.cipher_key_size()];
    let alice_cipher = suite.cipher(key).unwrap();
    let bob_cipher = suite.cipher(&bob_secret[..suite.cipher_key_size()]).unwrap();

    let block = [0x5au8; 16];
    let mut ciphertext = [0u8; 16];
    let mut recovered = [0u8; 16];
    alice_cipher.encrypt_block(&mut ciphertext, &block).unwrap();
    bob_cipher.decrypt_block(&mut recovered, &ciphertext).unwrap();
    assert_eq!(recovered, block);
}

#[test]
fn test_exchange_with_ed25519() {
    let mut rng = ChaCha20Rng::seed_from_u64(25519);
    run_exchange(&suite_for(Ed25519::NAME), &mut rng);
}

#[test]
fn test_exchange_with_ecdsa_p256() {
    let mut rng = ChaCha20Rng::seed_from_u64(256);
    run_exchange(&suite_for(EcdsaP256::NAME), &mut rng);
}

#[test]
fn test_exchange_with_aes_128() {
    let config = SuiteConfig::new().with_cipher("AES-128");
    let suite = CryptoSuite::with_defaults(&config).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(128);
    run_exchange(&suite, &mut rng);
}

#[test]
fn test_signature_lengths_through_facade() {
    let ed = suite_for("Ed25519");
    assert_eq!(ed.signature().public_key_len(), 32);
    assert_eq!(ed.signature().private_key_len(), 64);
    assert_eq!(ed.signature().max_signature_len(), 64);

    let ecdsa = suite_for("ECDSA-P256");
    assert_eq!(ecdsa.signature().public_key_len(), 65);
    assert_eq!(ecdsa.signature().private_key_len(), 32);
    assert_eq!(ecdsa.signature().max_signature_len(), 72);

    assert_eq!(ed.key_exchange().public_key_len(), 97);
    assert_eq!(ed.key_exchange().private_key_len(), 48);
}

// ============================================================================
// Error Propagation
// ============================================================================

#[test]
fn test_cipher_key_length_error_converts() {
    let suite = suite_for("Ed25519");
    match suite.cipher(&[0u8; 16]).err() {
        Some(CoreError::Primitive(Error::InvalidKeyLength { algorithm, expected, actual })) => {
            assert_eq!(algorithm, "AES-256");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        other => panic!("short key accepted: {other:?}"),
    }
}

#[test]
fn test_invalid_peer_point_rejected() {
    let suite = suite_for("Ed25519");
    let kex = suite.key_exchange();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let (sk, mut pk) = kex.generate_key_pair(&mut rng).unwrap();

    // Flip a bit in Y so the point leaves the curve
    let last = pk.len() - 1;
    pk[last] ^= 1;
    match kex.agree(&sk, &pk) {
        Err(Error::InvalidPoint { .. }) => {}
        other => panic!("off-curve point accepted: {other:?}"),
    }
}

#[test]
fn test_cross_scheme_keys_do_not_verify() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let ed = suite_for("Ed25519");
    let ecdsa = suite_for("ECDSA-P256");

    let (ed_pk, ed_sk) = ed.signature().generate_key_pair(&mut rng).unwrap();
    let sig = ed.signature().sign(&ed_sk, b"message", &mut rng).unwrap();

    assert!(!ecdsa.signature().verify(&ed_pk, b"message", &sig));
    assert!(ecdsa.signature().sign(&ed_sk, b"message", &mut rng).is_err());
}

// ============================================================================
// Registry Extension
// ============================================================================

#[test]
fn test_alias_registration_is_usable_in_config() {
    let mut registry = AlgorithmRegistry::with_defaults();
    registry.register_signature("EdDSA", || Box::new(Ed25519)).unwrap();
    registry
        .register_key_exchange("secp384r1", || Box::new(suite_primitives::P384KeyExchange::new()))
        .unwrap();

    let config = SuiteConfig::new().with_signature("eddsa").with_key_exchange("SECP384R1");
    let suite = CryptoSuite::from_config(&config, &registry).unwrap();

    assert_eq!(suite.signature().algorithm(), "Ed25519");
    assert_eq!(suite.key_exchange().algorithm(), "P-384");
    assert!(registry.names(AlgorithmKind::Signature).contains(&"EdDSA"));
}

#[test]
fn test_empty_registry_resolves_nothing() {
    let registry = AlgorithmRegistry::empty();
    assert!(registry.names(AlgorithmKind::Cipher).is_empty());
    match CryptoSuite::from_config(&SuiteConfig::new(), &registry) {
        Err(CoreError::UnknownAlgorithm { kind: AlgorithmKind::Cipher, .. }) => {}
        other => panic!("empty registry resolved: {other:?}"),
    }
}

// ============================================================================
// Log Sanitization
// ============================================================================

#[test]
fn test_key_material_is_never_rendered() {
    let suite = suite_for("ECDSA-P256");
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let (pk, sk) = suite.signature().generate_key_pair(&mut rng).unwrap();

    let rendered_sk = sanitize_bytes(&sk);
    assert_eq!(rendered_sk, "[32 bytes]");

    let rendered_pk = sanitize_bytes(&pk);
    assert!(rendered_pk.starts_with("[65 bytes, fingerprint: "));
    assert!(!rendered_pk.contains(&hex::encode(&pk[1..9])));

    assert!(is_potentially_sensitive("signing_private_key"));
    assert_eq!(sanitize_value("signing_private_key", &hex::encode(&*sk)), "[REDACTED]");
    assert_eq!(sanitize_value("signature", suite.signature().algorithm()), "ECDSA-P256");
}
