#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! AES (Advanced Encryption Standard) block cipher
//!
//! Single-block AES-128 and AES-256 (FIPS 197) over the RustCrypto `aes` crate,
//! which selects AES-NI / ARMv8 instructions at runtime when available.
//!
//! ## Security Notes
//!
//! - This is the raw permutation. It provides no confidentiality for more than
//!   one block on its own; modes and AEADs are built by the caller
//! - The key schedule is zeroized on drop

use super::{AES_128_KEY_LEN, AES_256_KEY_LEN, AES_BLOCK_LEN, BlockCipher, check_block_buffers};
use crate::error::{Error, Result};
use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use ::aes::{Aes128, Aes256, Block};
use tracing::instrument;

/// AES with a 128-bit key.
///
/// # Example
///
/// ```rust
/// use suite_primitives::cipher::{BlockCipher, aes::Aes128Cipher};
///
/// let cipher = Aes128Cipher::new(&[0u8; 16]).unwrap();
/// let plaintext = [0x42u8; 16];
/// let mut ciphertext = [0u8; 16];
/// cipher.encrypt_block(&mut ciphertext, &plaintext).unwrap();
/// let mut decrypted = [0u8; 16];
/// cipher.decrypt_block(&mut decrypted, &ciphertext).unwrap();
/// assert_eq!(plaintext, decrypted);
/// ```
#[derive(Clone)]
pub struct Aes128Cipher {
    inner: Aes128,
}

impl Aes128Cipher {
    /// Algorithm name
    pub const NAME: &'static str = "AES-128";

    /// Expand a 16-byte key.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` naming AES-128 if `key` is not 16 bytes.
    #[instrument(level = "debug", skip(key), fields(algorithm = "AES-128", key_len = key.len()))]
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength {
            algorithm: Self::NAME,
            expected: AES_128_KEY_LEN,
            actual: key.len(),
        };
        if key.len() != AES_128_KEY_LEN {
            tracing::debug!("rejected AES-128 key");
            return Err(invalid());
        }
        let inner = Aes128::new_from_slice(key).map_err(|_e| invalid())?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Aes128Cipher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn key_size(&self) -> usize {
        AES_128_KEY_LEN
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_LEN
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_block_buffers(AES_BLOCK_LEN, dst, src)?;
        self.inner.encrypt_block_b2b(Block::from_slice(src), Block::from_mut_slice(dst));
        Ok(())
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_block_buffers(AES_BLOCK_LEN, dst, src)?;
        self.inner.decrypt_block_b2b(Block::from_slice(src), Block::from_mut_slice(dst));
        Ok(())
    }
}

impl std::fmt::Debug for Aes128Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aes128Cipher").field("key_schedule", &"[REDACTED]").finish()
    }
}

/// AES with a 256-bit key.
#[derive(Clone)]
pub struct Aes256Cipher {
    inner: Aes256,
}

impl Aes256Cipher {
    /// Algorithm name
    pub const NAME: &'static str = "AES-256";

    /// Expand a 32-byte key.
    ///
    /// # Errors
    /// Returns `InvalidKeyLength` naming AES-256 if `key` is not 32 bytes.
    #[instrument(level = "debug", skip(key), fields(algorithm = "AES-256", key_len = key.len()))]
    pub fn new(key: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength {
            algorithm: Self::NAME,
            expected: AES_256_KEY_LEN,
            actual: key.len(),
        };
        if key.len() != AES_256_KEY_LEN {
            tracing::debug!("rejected AES-256 key");
            return Err(invalid());
        }
        let inner = Aes256::new_from_slice(key).map_err(|_e| invalid())?;
        Ok(Self { inner })
    }
}

impl BlockCipher for Aes256Cipher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn key_size(&self) -> usize {
        AES_256_KEY_LEN
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_LEN
    }

    fn encrypt_block(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_block_buffers(AES_BLOCK_LEN, dst, src)?;
        self.inner.encrypt_block_b2b(Block::from_slice(src), Block::from_mut_slice(dst));
        Ok(())
    }

    fn decrypt_block(&self, dst: &mut [u8], src: &[u8]) -> Result<()> {
        check_block_buffers(AES_BLOCK_LEN, dst, src)?;
        self.inner.decrypt_block_b2b(Block::from_slice(src), Block::from_mut_slice(dst));
        Ok(())
    }
}

impl std::fmt::Debug for Aes256Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aes256Cipher").field("key_schedule", &"[REDACTED]").finish()
    }
}
