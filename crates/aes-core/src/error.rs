//! Error types returned by the block engine.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Caller-input validation failures.
///
/// Every variant is detected before any key expansion or round work begins,
/// so a failed call leaves nothing half-initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested key length is not 16, 24 or 32 bytes.
    #[error("unsupported AES key size: {len} bytes (expected 16, 24 or 32)")]
    InvalidKeySize {
        /// Requested key length in bytes.
        len: usize,
    },
    /// The key buffer does not hold the declared number of bytes.
    #[error("key buffer holds {actual} bytes but {expected} were declared")]
    InvalidKeyLength {
        /// Declared key length.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// A block buffer is not exactly 16 bytes.
    #[error("AES block must be 16 bytes, got {len}")]
    InvalidBlockSize {
        /// Offending buffer length.
        len: usize,
    },
}
