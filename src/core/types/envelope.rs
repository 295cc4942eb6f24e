//! `Envelope` - hybrid ciphertext for payloads of any length.
//!
//! Format: `b"SBX1" || wrapped_seed (256) || tag (32) || ciphertext`
//!
//! - `wrapped_seed`: a random 32-byte seed encrypted with RSA-OAEP
//! - `tag`: HMAC-SHA256 over the header, the wrapped seed and the ciphertext
//! - `ciphertext`: AES-256-CTR, same length as the plaintext

use core::fmt::{self, Debug};

use crate::core::error::SealboxError;
use crate::core::params::MODULUS_BYTES;

/// Magic bytes at the start of every serialized envelope.
pub const ENVELOPE_MAGIC: [u8; 4] = *b"SBX1";

/// Size of the authentication tag (HMAC-SHA256 = 32 bytes).
pub const ENVELOPE_TAG_SIZE: usize = 32;

/// Size of everything before the ciphertext.
pub const ENVELOPE_OVERHEAD: usize = ENVELOPE_MAGIC.len() + MODULUS_BYTES + ENVELOPE_TAG_SIZE;

/// A sealed payload produced by [`PublicKey::seal`](crate::PublicKey::seal).
///
/// # Example
///
/// ```rust
/// use sealbox::{Envelope, KeyPair};
///
/// let pair = KeyPair::generate()?;
/// let message = vec![0x42u8; 4096];
///
/// let sealed = pair.public_key().seal(&message)?;
/// let bytes = sealed.to_bytes();
///
/// let parsed = Envelope::try_from(bytes.as_slice())?;
/// assert_eq!(pair.private_key().open(&parsed)?, message);
/// # Ok::<(), sealbox::SealboxError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    wrapped_seed: Vec<u8>,
    tag: [u8; ENVELOPE_TAG_SIZE],
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub(crate) fn new(wrapped_seed: Vec<u8>, tag: [u8; ENVELOPE_TAG_SIZE], ciphertext: Vec<u8>) -> Self {
        Self {
            wrapped_seed,
            tag,
            ciphertext,
        }
    }

    /// Returns the RSA-OAEP wrapped seed.
    #[must_use]
    pub fn wrapped_seed(&self) -> &[u8] {
        &self.wrapped_seed
    }

    /// Returns the authentication tag.
    #[must_use]
    pub fn tag(&self) -> &[u8; ENVELOPE_TAG_SIZE] {
        &self.tag
    }

    /// Returns the symmetric ciphertext.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Serializes the envelope to its on-disk form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ENVELOPE_OVERHEAD + self.ciphertext.len());
        out.extend_from_slice(&ENVELOPE_MAGIC);
        out.extend_from_slice(&self.wrapped_seed);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }
}

/// Parsing failures are reported as `DecryptionFailed` so that a malformed
/// envelope looks the same as a forged one.
impl TryFrom<&[u8]> for Envelope {
    type Error = SealboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < ENVELOPE_OVERHEAD {
            return Err(SealboxError::DecryptionFailed);
        }

        let (magic, rest) = bytes.split_at(ENVELOPE_MAGIC.len());
        if magic != ENVELOPE_MAGIC {
            return Err(SealboxError::DecryptionFailed);
        }

        let (wrapped_seed, rest) = rest.split_at(MODULUS_BYTES);
        let (tag, ciphertext) = rest.split_at(ENVELOPE_TAG_SIZE);

        let mut tag_bytes = [0u8; ENVELOPE_TAG_SIZE];
        tag_bytes.copy_from_slice(tag);

        Ok(Self::new(wrapped_seed.to_vec(), tag_bytes, ciphertext.to_vec()))
    }
}

impl Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("wrapped_seed_len", &self.wrapped_seed.len())
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}
