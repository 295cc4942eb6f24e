//! Integrity verification against a recorded digest.
//!
//! Digests are public values, so the comparison is an ordinary equality
//! check rather than a constant-time one.

use std::io::Read;

use crate::core::error::SealboxResult;
use crate::core::operations::hash::{hash, hash_bytes};
use crate::core::types::Digest;

/// Hashes `content` and compares the result with `expected`.
///
/// Returns `Ok(false)` on a mismatch; errors are reserved for failing to
/// read the content at all.
///
/// # Errors
///
/// Returns `SealboxError::Io` if reading fails.
pub fn verify<R: Read>(content: R, expected: &Digest) -> SealboxResult<bool> {
    let actual = hash(content)?;
    let matches = actual == *expected;
    if !matches {
        tracing::debug!(%expected, %actual, "digest mismatch");
    }
    Ok(matches)
}

/// Checks an in-memory buffer against `expected`.
#[must_use]
pub fn verify_bytes(content: &[u8], expected: &Digest) -> bool {
    hash_bytes(content) == *expected
}
