//! Fixed scheme parameters.
//!
//! sealbox supports exactly one key shape and one padding configuration:
//!
//! - RSA with a 2048-bit modulus and public exponent 65537
//! - OAEP with SHA-256 as both the label hash and the MGF1 hash, empty label
//! - SHA-256 content digests, computed over 64 KiB blocks
//!
//! None of these are runtime-tunable. Keys that decode but do not match are
//! rejected with [`SealboxError::UnsupportedKey`](crate::SealboxError::UnsupportedKey).

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, RsaPublicKey};

use crate::core::error::{SealboxError, SealboxResult};

/// RSA modulus size in bits.
pub const MODULUS_BITS: usize = 2048;

/// RSA modulus size in bytes. Every OAEP ciphertext has exactly this length.
pub const MODULUS_BYTES: usize = MODULUS_BITS / 8;

/// RSA public exponent.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Output size of SHA-256 in bytes.
pub const HASH_BYTES: usize = 32;

/// Largest plaintext a single OAEP block can carry: `k - 2*hLen - 2`.
pub const MAX_PLAINTEXT_BYTES: usize = MODULUS_BYTES - 2 * HASH_BYTES - 2;

/// Block size used when streaming content through the hasher.
pub const HASH_BLOCK_SIZE: usize = 64 * 1024;

/// OAEP padding with SHA-256 / MGF1-SHA-256 and an empty label.
pub(crate) fn oaep() -> Oaep {
    Oaep::new::<sha2::Sha256>()
}

/// Checks that an RSA public key has the supported modulus size and exponent.
pub(crate) fn check_public(key: &RsaPublicKey) -> SealboxResult<()> {
    let bits = key.n().bits();
    if bits != MODULUS_BITS {
        return Err(SealboxError::UnsupportedKey(format!(
            "modulus is {bits} bits, expected {MODULUS_BITS}"
        )));
    }

    if *key.e() != BigUint::from(PUBLIC_EXPONENT) {
        return Err(SealboxError::UnsupportedKey(format!(
            "public exponent must be {PUBLIC_EXPONENT}"
        )));
    }

    Ok(())
}
