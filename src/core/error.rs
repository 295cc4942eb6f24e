//! Error types for sealbox operations.
//!
//! This module provides a unified error type for key handling, encryption,
//! hashing and the file wrappers. Error messages are intentionally vague for
//! key material and decryption so that a failure never tells an attacker
//! which check rejected their input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when generating keys, encrypting, decrypting or
/// verifying content.
#[derive(Debug, Error)]
pub enum SealboxError {
    /// The random source failed while generating a key pair.
    #[error("Key generation failed")]
    Generation,

    /// The bytes are not a well-formed key encoding of the expected kind.
    #[error("Malformed key encoding")]
    KeyFormat,

    /// The key decoded but is not an RSA-2048 key with exponent 65537.
    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    /// The plaintext exceeds what a single OAEP block can carry.
    #[error("Plaintext too large: {len} bytes exceeds the {max} byte limit")]
    PlaintextTooLarge {
        /// Length of the rejected plaintext.
        len: usize,
        /// Largest plaintext the key can encrypt.
        max: usize,
    },

    /// Decryption failed (wrong key, corrupted or tampered ciphertext).
    /// Intentionally opaque.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// The content source does not exist.
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// An expected digest string is not 64 hexadecimal characters.
    #[error("Invalid digest encoding")]
    InvalidDigest,

    /// Filesystem error other than a missing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic cryptographic error.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for sealbox operations.
pub type SealboxResult<T> = Result<T, SealboxError>;

impl SealboxError {
    /// Maps an I/O error on `path`, promoting a missing file to [`SealboxError::NotFound`].
    pub(crate) fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path.into())
        } else {
            Self::Io(err)
        }
    }
}
