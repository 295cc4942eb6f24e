//! `EncryptedPayload` - a single RSA-OAEP ciphertext block.

use core::fmt::{self, Debug};

use crate::core::error::SealboxError;
use crate::core::params::MODULUS_BYTES;

/// The output of [`PublicKey::encrypt`](crate::PublicKey::encrypt).
///
/// Always exactly 256 bytes, whatever the plaintext length. On disk it is
/// stored raw, one block per file.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedPayload(Vec<u8>);

impl EncryptedPayload {
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the ciphertext bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the payload and returns the ciphertext bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Ciphertext length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a well-formed payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for EncryptedPayload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Only checks the length; content is validated on decryption.
impl TryFrom<Vec<u8>> for EncryptedPayload {
    type Error = SealboxError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.len() != MODULUS_BYTES {
            return Err(SealboxError::DecryptionFailed);
        }
        Ok(Self(bytes))
    }
}

impl TryFrom<&[u8]> for EncryptedPayload {
    type Error = SealboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from(bytes.to_vec())
    }
}

impl Debug for EncryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedPayload")
            .field("len", &self.0.len())
            .finish()
    }
}
