//! AES block engine with runtime key-size selection.
//!
//! This crate follows the FIPS-197 specification and provides:
//! - Key schedules for AES-128, AES-192 and AES-256, chosen by key length.
//! - Equivalent-inverse-cipher decryption schedules.
//! - Single-block encryption and decryption through [`CipherState`].
//!
//! There are no modes of operation or padding here; callers own chaining.
//! The implementation is table-based and aims for clarity and testability
//! rather than constant-time guarantees.
//!
//! ```
//! use aes_core::CipherState;
//!
//! let key = [0u8; 32];
//! let state = CipherState::new(&key, key.len())?;
//! let ct = state.encrypt_block(b"sixteen byte msg")?;
//! assert_eq!(&state.decrypt_block(&ct)?, b"sixteen byte msg");
//! # Ok::<(), aes_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod sbox;
mod state;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, invert_schedule};
pub use crate::error::{Error, Result};
pub use crate::key::{
    AesKey, KeySize, RoundKeys, MAX_KEY_BYTES, MAX_KEY_WORDS, MAX_ROUNDS, SCHEDULE_WORDS,
};
pub use crate::state::CipherState;
