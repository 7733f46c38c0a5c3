//! Common error types shared across crates.

use thiserror::Error;

/// Terminal failure of a benchmark run.
///
/// Every variant is deterministic and input-dependent; none is retryable.
/// - [`EncryptionError::InvalidKeyLength`] and [`EncryptionError::InvalidIvLength`]
///   are raised before any encryption is attempted.
/// - [`EncryptionError::EncryptionFailed`] aborts the timed loop; the partial
///   total is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncryptionError {
    /// The key is not exactly the required AES-128 length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The nonce/IV is not exactly the length this benchmark accepts.
    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    /// The underlying AEAD primitive rejected a seal operation.
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}
