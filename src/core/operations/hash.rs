//! Streaming SHA-256 content hashing.
//!
//! Content is consumed in 64 KiB blocks so peak memory stays bounded no
//! matter how large the input is. The digest depends only on the bytes,
//! never on how they were split.

use std::io::{ErrorKind, Read};

use sha2::{Digest as _, Sha256};

use crate::core::error::SealboxResult;
use crate::core::params::{HASH_BLOCK_SIZE, HASH_BYTES};
use crate::core::types::Digest;

/// Incremental SHA-256 hasher producing a [`Digest`].
#[derive(Clone, Default)]
pub struct Hasher {
    inner: Sha256,
}

impl Hasher {
    /// Creates an empty hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds more content into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consumes the hasher and returns the digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        let mut out = [0u8; HASH_BYTES];
        out.copy_from_slice(&self.inner.finalize());
        Digest::from(out)
    }
}

/// Hashes everything `reader` yields, reading 64 KiB at a time.
///
/// # Errors
///
/// Returns `SealboxError::Io` if reading fails.
pub fn hash<R: Read>(mut reader: R) -> SealboxResult<Digest> {
    let mut hasher = Hasher::new();
    let mut block = vec![0u8; HASH_BLOCK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&block[..n]);
        total += n as u64;
    }

    tracing::debug!(bytes = total, "hashed content");
    Ok(hasher.finalize())
}

/// Hashes an in-memory buffer.
#[must_use]
pub fn hash_bytes(data: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
