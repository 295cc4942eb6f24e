//! `Digest` - a SHA-256 content digest.
//!
//! Digests are 32-byte values rendered as 64 lowercase hexadecimal
//! characters. Parsing accepts either case.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use crate::core::error::SealboxError;
use crate::core::params::HASH_BYTES;

/// A SHA-256 digest of a file's full content.
///
/// # Example
///
/// ```rust
/// use sealbox::Digest;
///
/// let digest: Digest = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".parse()?;
/// assert_eq!(digest, sealbox::hash_bytes(b""));
/// # Ok::<(), sealbox::SealboxError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; HASH_BYTES]);

impl Digest {
    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; HASH_BYTES] {
        &self.0
    }

    /// Returns the lowercase hexadecimal representation.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; HASH_BYTES]> for Digest {
    fn from(bytes: [u8; HASH_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = SealboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; HASH_BYTES] = bytes.try_into().map_err(|_| SealboxError::InvalidDigest)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = SealboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; HASH_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes).map_err(|_| SealboxError::InvalidDigest)?;
        Ok(Self(bytes))
    }
}

impl TryFrom<&str> for Digest {
    type Error = SealboxError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
