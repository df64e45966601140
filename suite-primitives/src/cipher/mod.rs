#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Block Ciphers
//!
//! Fixed-block keyed permutations behind a single object-safe trait.
//!
//! ## Ciphers
//!
//! - **AES-128**: 16-byte key, 16-byte block (FIPS 197)
//! - **AES-256**: 32-byte key, 16-byte block (FIPS 197)
//!
//! ## Contract
//!
//! - Key length is validated at construction and the error names the algorithm
//! - `src` and `dst` must both be exactly [`BlockCipher::block_size`] bytes
//! - The expanded key schedule is immutable, so one instance can be shared
//!   across threads

pub mod aes;

use crate::error::{Error, Result};

/// AES block length in bytes
pub const AES_BLOCK_LEN: usize = 16;

/// AES-128 key length
pub const AES_128_KEY_LEN: usize = 16;

/// AES-256 key length
pub const AES_256_KEY_LEN: usize = 32;

/// Keyed single-block encryption and decryption.
pub trait BlockCipher: Send + Sync {
    /// Algorithm name, e.g. `"AES-128"`
    fn name(&self) -> &'static str;

    /// Key length in bytes accepted by this algorithm
    fn key_size(&self) -> usize;

    /// Block length in bytes
    fn block_size(&self) -> usize;

    /// Encrypt exactly one block from `src` into `dst`.
    ///
    /// # Errors
    /// Returns `BufferSizeMismatch` if either buffer is not one block long.
    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) -> Result<()>;

    /// Decrypt exactly one block from `src` into `dst`.
    ///
    /// # Errors
    /// Returns `BufferSizeMismatch` if either buffer is not one block long.
    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) -> Result<()>;
}

/// Check that both block buffers match the block size.
pub(crate) fn check_block_buffers(block_size: usize, dst: &[u8], src: &[u8]) -> Result<()> {
    for len in [src.len(), dst.len()] {
        if len != block_size {
            return Err(Error::BufferSizeMismatch { expected: block_size, actual: len });
        }
    }
    Ok(())
}

pub use self::aes::{Aes128Cipher, Aes256Cipher};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_block_buffers_reports_offending_length() {
        let dst = [0u8; AES_BLOCK_LEN];
        assert_eq!(
            check_block_buffers(AES_BLOCK_LEN, &dst, &[0u8; 15]),
            Err(Error::BufferSizeMismatch { expected: 16, actual: 15 })
        );
        assert_eq!(
            check_block_buffers(AES_BLOCK_LEN, &[0u8; 17], &dst),
            Err(Error::BufferSizeMismatch { expected: 16, actual: 17 })
        );
        assert!(check_block_buffers(AES_BLOCK_LEN, &dst, &dst).is_ok());
    }
}
