#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Caller-supplied random sources
//!
//! Nothing in this crate reads ambient randomness. Every generation call site
//! receives a `CryptoRngCore` and draws through [`fill_random`], which maps a
//! source failure to [`Error::RandomSourceFailure`] instead of panicking.

use crate::error::{Error, Result};
use rand_core::CryptoRngCore;

/// Fill `dest` from the injected random source.
///
/// # Errors
/// Returns `RandomSourceFailure` if the source reports an error.
pub fn fill_random<R: CryptoRngCore + ?Sized>(rng: &mut R, dest: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(dest).map_err(|e| {
        tracing::debug!(requested = dest.len(), "random source failed");
        Error::RandomSourceFailure(e.to_string())
    })
}

/// Draw a fixed-size array from the injected random source.
///
/// # Errors
/// Returns `RandomSourceFailure` if the source reports an error.
pub fn random_array<R: CryptoRngCore + ?Sized, const N: usize>(rng: &mut R) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    fill_random(rng, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::{CryptoRng, RngCore, SeedableRng};

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            Err(rand_core::Error::new("entropy unavailable"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_random_array_is_deterministic_for_seeded_source() {
        let a: [u8; 32] = random_array(&mut ChaCha20Rng::seed_from_u64(7)).expect("fill");
        let b: [u8; 32] = random_array(&mut ChaCha20Rng::seed_from_u64(7)).expect("fill");
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_random_propagates_source_error() {
        let mut buf = [0u8; 16];
        let result = fill_random(&mut BrokenRng, &mut buf);
        assert!(matches!(result, Err(Error::RandomSourceFailure(_))));
    }

    #[test]
    fn test_fill_random_through_trait_object() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let dyn_rng: &mut dyn CryptoRngCore = &mut rng;
        let mut buf = [0u8; 8];
        fill_random(dyn_rng, &mut buf).expect("fill");
        assert_ne!(buf, [0u8; 8]);
    }
}
