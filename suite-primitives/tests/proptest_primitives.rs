//! Property-Based Primitive Tests
//!
//! ## Properties Tested
//!
//! - **Roundtrip**: AES decrypt(encrypt(p)) == p for any key and block
//! - **Key length**: any non-AES key length is rejected with its actual length
//! - **Range**: scalar acceptance matches a big-integer comparison with the order
//! - **DER strictness**: any single-byte mutation of a valid signature either
//!   fails to decode or re-encodes to itself
//! - **Signatures**: Ed25519 verifies exactly the signed message

// JUSTIFICATION: Property-based test code requires these patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]

use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use suite_primitives::ec::der::{encode_signature, parse_signature_components};
use suite_primitives::{Aes128Cipher, Aes256Cipher, BlockCipher, CurveParameters, EcdsaP256, Ed25519};

fn ecdsa_fixture() -> (EcdsaP256, suite_primitives::EcdsaP256PublicKey, [u8; 32], Vec<u8>) {
    let scheme = EcdsaP256::new();
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    let (private_key, public_key) = scheme.generate_key(&mut rng).unwrap();
    let digest = [0x17u8; 32];
    let der = scheme.sign(&private_key, &digest, &mut rng).unwrap();
    (scheme, public_key, digest, der)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ==========================================================================
    // AES Property Tests
    // ==========================================================================

    /// AES-128 block roundtrip
    #[test]
    fn aes_128_roundtrip(
        key in prop::array::uniform16(any::<u8>()),
        block in prop::array::uniform16(any::<u8>())
    ) {
        let cipher = Aes128Cipher::new(&key).unwrap();
        let mut ciphertext = [0u8; 16];
        cipher.encrypt_block(&mut ciphertext, &block).unwrap();
        let mut recovered = [0u8; 16];
        cipher.decrypt_block(&mut recovered, &ciphertext).unwrap();
        prop_assert_eq!(recovered, block);
    }

    /// AES-256 block roundtrip
    #[test]
    fn aes_256_roundtrip(
        key in prop::array::uniform32(any::<u8>()),
        block in prop::array::uniform16(any::<u8>())
    ) {
        let cipher = Aes256Cipher::new(&key).unwrap();
        let mut ciphertext = [0u8; 16];
        cipher.encrypt_block(&mut ciphertext, &block).unwrap();
        let mut recovered = [0u8; 16];
        cipher.decrypt_block(&mut recovered, &ciphertext).unwrap();
        prop_assert_eq!(recovered, block);
    }

    /// Key lengths other than 16 / 32 are rejected
    #[test]
    fn aes_wrong_key_length_rejected(key in prop::collection::vec(any::<u8>(), 0..80)) {
        prop_assert_eq!(Aes128Cipher::new(&key).is_ok(), key.len() == 16);
        prop_assert_eq!(Aes256Cipher::new(&key).is_ok(), key.len() == 32);
    }

    // ==========================================================================
    // Curve Property Tests
    // ==========================================================================

    /// Range check agrees with lexicographic comparison of fixed-width bytes
    #[test]
    fn p256_scalar_range_matches_ordering(scalar in prop::array::uniform32(any::<u8>())) {
        let params = &CurveParameters::P256;
        let expected = scalar.as_slice() < params.order && scalar.iter().any(|&b| b != 0);
        prop_assert_eq!(params.is_scalar_in_range(&scalar), expected);
    }

    /// Same for P-384, biased toward the top of the range
    #[test]
    fn p384_scalar_range_matches_ordering(
        tail in prop::collection::vec(any::<u8>(), 24),
        near_order in any::<bool>()
    ) {
        let params = &CurveParameters::P384;
        let mut scalar = if near_order { params.order[..24].to_vec() } else { vec![0u8; 24] };
        scalar.extend_from_slice(&tail);
        let expected = scalar.as_slice() < params.order && scalar.iter().any(|&b| b != 0);
        prop_assert_eq!(params.is_scalar_in_range(&scalar), expected);
    }

    // ==========================================================================
    // DER Property Tests
    // ==========================================================================

    /// Encoding is canonical: any accepted input re-encodes to itself
    #[test]
    fn der_mutation_never_yields_alternate_encoding(
        index in 0usize..72,
        value in any::<u8>()
    ) {
        let (scheme, public_key, digest, der) = ecdsa_fixture();
        let index = index % der.len();
        prop_assume!(der[index] != value);

        let mut mutated = der.clone();
        mutated[index] = value;

        if let Ok(components) = parse_signature_components(&mutated) {
            prop_assert_eq!(encode_signature(&components.r, &components.s).unwrap(), mutated.clone());
        }
        prop_assert!(!scheme.verify(&public_key, &digest, &mutated));
    }

    /// Encoder output always parses back to the same magnitudes
    #[test]
    fn der_encode_parse_agree(
        r in prop::collection::vec(any::<u8>(), 1..40),
        s in prop::collection::vec(any::<u8>(), 1..40)
    ) {
        prop_assume!(r.iter().any(|&b| b != 0) && s.iter().any(|&b| b != 0));
        let der = encode_signature(&r, &s).unwrap();
        let components = parse_signature_components(&der).unwrap();
        let strip = |v: &[u8]| v.iter().skip_while(|&&b| b == 0).copied().collect::<Vec<u8>>();
        prop_assert_eq!(components.r, strip(&r));
        prop_assert_eq!(components.s, strip(&s));
    }

    // ==========================================================================
    // Signature Property Tests
    // ==========================================================================

    /// Ed25519 verifies the signed message and nothing else
    #[test]
    fn ed25519_binds_message(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..512),
        other in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let (public_key, private_key) = Ed25519.derive_from_seed(&seed).unwrap();
        let signature = Ed25519.sign(&private_key, &message);
        prop_assert!(Ed25519.verify(&public_key, &message, &signature));
        if other != message {
            prop_assert!(!Ed25519.verify(&public_key, &other, &signature));
        }
    }
}
