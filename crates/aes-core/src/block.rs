//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, stored column-major as in FIPS-197.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a [`Block`], rejecting anything that is not exactly one block.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockSize { len: bytes.len() })
}

/// Packs four big-endian words into a block, one word per column.
#[inline]
pub fn block_from_words(words: &[u32; 4]) -> Block {
    let mut block = [0u8; BLOCK_SIZE];
    for (column, word) in block.chunks_exact_mut(4).zip(words.iter()) {
        column.copy_from_slice(&word.to_be_bytes());
    }
    block
}
