//! Initialized cipher state holding both key schedules.

use core::fmt;

use tracing::debug;

use crate::block::{block_from_slice, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key, invert_schedule};
use crate::error::{Error, Result};
use crate::key::{AesKey, KeySize, RoundKeys};

/// Expanded encryption and decryption schedules for one key.
///
/// A `CipherState` never changes after construction, so one instance can be
/// shared by reference across threads for any number of block operations.
/// Both schedules are wiped when the state is dropped.
#[derive(Clone)]
pub struct CipherState {
    enc: RoundKeys,
    dec: RoundKeys,
    size: KeySize,
}

impl CipherState {
    /// Expands `key`, which must hold exactly `key_len` bytes (16, 24 or 32).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKeySize`] when `key_len` is unsupported, then
    /// [`Error::InvalidKeyLength`] when `key.len()` differs from `key_len`.
    pub fn new(key: &[u8], key_len: usize) -> Result<Self> {
        let key = AesKey::new(key, key_len)?;
        Ok(Self::with_key(&key))
    }

    /// Expands a key whose size is the slice length.
    pub fn from_key(key: &[u8]) -> Result<Self> {
        Self::new(key, key.len())
    }

    /// Expands an already validated key.
    pub fn with_key(key: &AesKey) -> Self {
        let size = key.size();
        let enc = expand_key(key);
        let dec = invert_schedule(&enc);
        debug!(key_size = %size, rounds = size.rounds(), "expanded AES key schedule");
        Self { enc, dec, size }
    }

    /// Key size the state was built for.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (10, 12 or 14).
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Encryption round keys.
    pub fn encryption_round_keys(&self) -> &RoundKeys {
        &self.enc
    }

    /// Decryption round keys for the equivalent inverse cipher.
    pub fn decryption_round_keys(&self) -> &RoundKeys {
        &self.dec
    }

    /// Encrypts one block given as a slice.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBlockSize`] unless `input` is exactly 16 bytes.
    pub fn encrypt_block(&self, input: &[u8]) -> Result<Block> {
        Ok(self.encrypt(&block_from_slice(input)?))
    }

    /// Decrypts one block given as a slice.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBlockSize`] unless `input` is exactly 16 bytes.
    pub fn decrypt_block(&self, input: &[u8]) -> Result<Block> {
        Ok(self.decrypt(&block_from_slice(input)?))
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt(&self, block: &Block) -> Block {
        encrypt_block(block, &self.enc)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt(&self, block: &Block) -> Block {
        decrypt_block(block, &self.dec)
    }

    /// Encrypts a block in place.
    pub fn encrypt_in_place(&self, block: &mut Block) {
        *block = self.encrypt(block);
    }

    /// Decrypts a block in place.
    pub fn decrypt_in_place(&self, block: &mut Block) {
        *block = self.decrypt(block);
    }

    /// Encrypts `input` into a separate `output` buffer; both must be one block long.
    pub fn encrypt_into(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        check_output(output)?;
        output.copy_from_slice(&self.encrypt_block(input)?);
        Ok(())
    }

    /// Decrypts `input` into a separate `output` buffer; both must be one block long.
    pub fn decrypt_into(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        check_output(output)?;
        output.copy_from_slice(&self.decrypt_block(input)?);
        Ok(())
    }
}

fn check_output(output: &[u8]) -> Result<()> {
    if output.len() != BLOCK_SIZE {
        return Err(Error::InvalidBlockSize { len: output.len() });
    }
    Ok(())
}

impl From<&AesKey> for CipherState {
    fn from(key: &AesKey) -> Self {
        Self::with_key(key)
    }
}

impl fmt::Debug for CipherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherState")
            .field("key_size", &self.size)
            .field("rounds", &self.rounds())
            .finish_non_exhaustive()
    }
}
