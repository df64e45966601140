#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Curve Domain Parameters
//!
//! Immutable descriptions of the NIST prime curves used by this crate, and the
//! boundary checks every scalar and encoded point must pass before it reaches
//! curve arithmetic.
//!
//! The parameters are plain constants. Components hold a `&'static
//! CurveParameters` and never mutate it, so there is no global state to
//! initialise or synchronise.

use crate::error::{Error, Result};
use crate::rand::fill_random;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};
use zeroize::Zeroizing;

/// SEC1 tag byte of an uncompressed point
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Upper bound on rejection-sampling draws for a private scalar.
///
/// For P-256 and P-384 a uniformly random candidate is rejected with
/// probability below 2^-32, so reaching this bound means the source is broken.
pub const MAX_SCALAR_DRAWS: usize = 64;

const P256_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, //
    0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

const P384_ORDER: [u8; 48] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, //
    0xc7, 0x63, 0x4d, 0x81, 0xf4, 0x37, 0x2d, 0xdf, //
    0x58, 0x1a, 0x0d, 0xb2, 0x48, 0xb0, 0xa7, 0x7a, //
    0xec, 0xec, 0x19, 0x6a, 0xcc, 0xc5, 0x29, 0x73,
];

/// Domain parameters of a prime-order short Weierstrass curve.
#[derive(Debug, PartialEq, Eq)]
pub struct CurveParameters {
    /// Curve name, e.g. `"P-256"`
    pub name: &'static str,
    /// Width in bytes of an encoded private scalar
    pub scalar_size: usize,
    /// Width in bytes of a field element (and of an ECDH shared secret)
    pub field_size: usize,
    /// Group order, big-endian, exactly `scalar_size` bytes
    pub order: &'static [u8],
}

impl CurveParameters {
    /// NIST P-256 (secp256r1)
    pub const P256: Self =
        Self { name: "P-256", scalar_size: 32, field_size: 32, order: &P256_ORDER };

    /// NIST P-384 (secp384r1)
    pub const P384: Self =
        Self { name: "P-384", scalar_size: 48, field_size: 48, order: &P384_ORDER };

    /// Length of an uncompressed SEC1 point: tag, X and Y.
    #[must_use]
    pub const fn uncompressed_point_size(&self) -> usize {
        1 + 2 * self.field_size
    }

    /// Whether `scalar` encodes a value in `[1, order - 1]`.
    ///
    /// The comparison runs in constant time with respect to the scalar value.
    /// Inputs of the wrong width are never in range.
    #[must_use]
    pub fn is_scalar_in_range(&self, scalar: &[u8]) -> bool {
        if scalar.len() != self.scalar_size || self.order.len() != self.scalar_size {
            return false;
        }

        let mut less = Choice::from(0);
        let mut equal_so_far = Choice::from(1);
        let mut accumulated = 0u8;
        for (byte, order_byte) in scalar.iter().zip(self.order.iter()) {
            less |= equal_so_far & byte.ct_lt(order_byte);
            equal_so_far &= byte.ct_eq(order_byte);
            accumulated |= byte;
        }
        let non_zero = !accumulated.ct_eq(&0);

        (less & non_zero).into()
    }

    /// Validate the encoding of a private scalar for `algorithm`.
    ///
    /// # Errors
    /// - `InvalidKeyLength` if the scalar is not exactly `scalar_size` bytes
    /// - `OutOfRange` if it is zero or not below the group order
    pub fn check_scalar(&self, algorithm: &'static str, scalar: &[u8]) -> Result<()> {
        if scalar.len() != self.scalar_size {
            tracing::debug!(algorithm, actual = scalar.len(), "rejected scalar length");
            return Err(Error::InvalidKeyLength {
                algorithm,
                expected: self.scalar_size,
                actual: scalar.len(),
            });
        }
        if !self.is_scalar_in_range(scalar) {
            tracing::debug!(algorithm, "rejected out-of-range scalar");
            return Err(Error::OutOfRange { algorithm });
        }
        Ok(())
    }

    /// Check the framing of an uncompressed point: exact length and tag byte.
    ///
    /// This does not check that the point is on the curve; the curve crate does
    /// that when the coordinates are decoded.
    ///
    /// # Errors
    /// Returns `InvalidPoint` if the framing is wrong.
    pub fn check_uncompressed_point(&self, algorithm: &'static str, point: &[u8]) -> Result<()> {
        let framed = point.len() == self.uncompressed_point_size()
            && point.first() == Some(&UNCOMPRESSED_POINT_TAG);
        if !framed {
            tracing::debug!(algorithm, len = point.len(), "rejected point encoding");
            return Err(Error::InvalidPoint { algorithm });
        }
        Ok(())
    }

    /// Sample a private scalar uniformly from `[1, order - 1]`.
    ///
    /// Candidates of `scalar_size` bytes are drawn from `rng` and rejected until
    /// one falls in range.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if the source fails, or if no candidate is
    /// accepted within [`MAX_SCALAR_DRAWS`] draws.
    pub fn random_scalar<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let mut candidate = Zeroizing::new(vec![0u8; self.scalar_size]);
        for _ in 0..MAX_SCALAR_DRAWS {
            fill_random(rng, &mut candidate)?;
            if self.is_scalar_in_range(&candidate) {
                return Ok(candidate);
            }
        }
        Err(Error::RandomSourceFailure(format!(
            "no {} scalar in range after {MAX_SCALAR_DRAWS} draws",
            self.name
        )))
    }
}
