//! Key types for AES-128, AES-192 and AES-256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Largest supported key, in 32-bit words.
pub const MAX_KEY_WORDS: usize = 256 / 32;
/// Largest supported key, in bytes.
pub const MAX_KEY_BYTES: usize = 256 / 8;
/// Round count of the largest key size.
pub const MAX_ROUNDS: usize = 14;
/// Capacity of a key schedule: four words per round key, `MAX_ROUNDS + 1` round keys.
pub const SCHEDULE_WORDS: usize = 4 * (MAX_ROUNDS + 1);

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// All key sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Maps a key length in bytes to its key size.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => Err(Error::InvalidKeySize { len }),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.key_words() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn key_words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.key_words() + 6
    }

    /// Number of meaningful words in the expanded schedule.
    pub const fn schedule_words(self) -> usize {
        4 * (self.rounds() + 1)
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.key_len() * 8)
    }
}

/// Raw AES key of a runtime-selected size.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    bytes: [u8; MAX_KEY_BYTES],
    #[zeroize(skip)]
    size: KeySize,
}

impl AesKey {
    /// Builds a key from `key`, which must hold exactly `key_len` bytes.
    ///
    /// The size is checked first, so an unsupported `key_len` reports
    /// [`Error::InvalidKeySize`] even if the buffer length also disagrees.
    pub fn new(key: &[u8], key_len: usize) -> Result<Self> {
        let size = KeySize::from_len(key_len)?;
        if key.len() != key_len {
            return Err(Error::InvalidKeyLength {
                expected: key_len,
                actual: key.len(),
            });
        }
        let mut bytes = [0u8; MAX_KEY_BYTES];
        bytes[..key_len].copy_from_slice(key);
        Ok(Self { bytes, size })
    }

    /// Builds a key whose size is taken from the slice length.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Self::new(key, key.len())
    }

    /// Key size.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_len()]
    }

    /// Key as big-endian words, `Nk` of them.
    pub(crate) fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.as_bytes()
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey").field("size", &self.size).finish_non_exhaustive()
    }
}

macro_rules! impl_key_from_array {
    ($($len:literal => $size:ident),+ $(,)?) => {
        $(
            impl From<[u8; $len]> for AesKey {
                fn from(value: [u8; $len]) -> Self {
                    let mut bytes = [0u8; MAX_KEY_BYTES];
                    bytes[..$len].copy_from_slice(&value);
                    Self { bytes, size: KeySize::$size }
                }
            }
        )+
    };
}

impl_key_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded round keys, `rounds + 1` keys of four big-endian words each.
///
/// Storage is fixed at [`SCHEDULE_WORDS`]; words past `4 * (rounds + 1)` stay zero.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    words: [u32; SCHEDULE_WORDS],
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn new(words: [u32; SCHEDULE_WORDS], rounds: usize) -> Self {
        debug_assert!(rounds <= MAX_ROUNDS);
        Self { words, rounds }
    }

    /// Number of rounds this schedule drives.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns the round key at the requested index (`0..=rounds`).
    #[inline]
    pub fn get(&self, round: usize) -> [u32; 4] {
        let w = &self.words[round * 4..round * 4 + 4];
        [w[0], w[1], w[2], w[3]]
    }

    /// The meaningful prefix of the schedule.
    pub fn words(&self) -> &[u32] {
        &self.words[..4 * (self.rounds + 1)]
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}
