//! Single-block RSA-OAEP encryption and decryption.
//!
//! Parameters are fixed: SHA-256 label hash, MGF1 over SHA-256, empty label.
//! Encryption is randomized, so encrypting the same plaintext twice yields
//! different ciphertexts.

use rand_core::OsRng;

use crate::core::error::{SealboxError, SealboxResult};
use crate::core::params::{oaep, MAX_PLAINTEXT_BYTES, MODULUS_BYTES};
use crate::core::types::{EncryptedPayload, PrivateKey, PublicKey};

/// Encrypts `plaintext` for `recipient`.
///
/// # Errors
///
/// - `SealboxError::PlaintextTooLarge` if `plaintext` is longer than 190 bytes.
///   Nothing is chunked automatically.
/// - `SealboxError::CryptoError` if the random source or the primitive fails.
pub fn encrypt(plaintext: &[u8], recipient: &PublicKey) -> SealboxResult<EncryptedPayload> {
    if plaintext.len() > MAX_PLAINTEXT_BYTES {
        return Err(SealboxError::PlaintextTooLarge {
            len: plaintext.len(),
            max: MAX_PLAINTEXT_BYTES,
        });
    }

    let ciphertext = recipient
        .as_rsa()
        .encrypt(&mut OsRng, oaep(), plaintext)
        .map_err(|_| SealboxError::CryptoError)?;

    tracing::debug!(plaintext_len = plaintext.len(), "oaep encrypt");
    Ok(EncryptedPayload::from_bytes_unchecked(ciphertext))
}

/// Decrypts a single OAEP block with `holder`.
///
/// Decryption is blinded. Every failure (wrong length, bad padding, wrong
/// key) collapses into the same `DecryptionFailed` value.
///
/// # Errors
///
/// Returns `SealboxError::DecryptionFailed` on any failure.
pub fn decrypt(ciphertext: &[u8], holder: &PrivateKey) -> SealboxResult<Vec<u8>> {
    if ciphertext.len() != MODULUS_BYTES {
        return Err(SealboxError::DecryptionFailed);
    }

    holder
        .as_rsa()
        .decrypt_blinded(&mut OsRng, oaep(), ciphertext)
        .map_err(|_| SealboxError::DecryptionFailed)
}
