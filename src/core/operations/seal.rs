//! Hybrid seal/open for payloads larger than one OAEP block.
//!
//! This module implements public key encryption using:
//! - RSA-2048-OAEP-SHA256 to wrap a random 32-byte seed
//! - HMAC-SHA256 over the seed for key derivation
//! - AES-256-CTR for symmetric encryption
//! - HMAC-SHA256 for authentication (encrypt-then-MAC)

use aes::cipher::{KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use rand_core::{OsRng, RngCore};
use sha2::Sha256;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{SealboxError, SealboxResult};
use crate::core::operations::oaep;
use crate::core::types::{Envelope, PrivateKey, PublicKey, ENVELOPE_MAGIC, ENVELOPE_TAG_SIZE};

type HmacSha256 = Hmac<Sha256>;
type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

/// Size of the random seed wrapped by RSA-OAEP.
pub const SEED_SIZE: usize = 32;

/// Domain separation byte for encryption key derivation.
const EK_DOMAIN_BYTE: u8 = 0x01;

/// Domain separation byte for authentication key derivation.
const AK_DOMAIN_BYTE: u8 = 0x02;

/// Domain separation byte for counter block derivation.
const IV_DOMAIN_BYTE: u8 = 0x03;

#[derive(Zeroize, ZeroizeOnDrop)]
struct DerivedKeys {
    encryption_key: [u8; 32],
    auth_key: [u8; 32],
    counter: [u8; 16],
}

impl DerivedKeys {
    fn derive(seed: &[u8; SEED_SIZE]) -> SealboxResult<Self> {
        let mut keys = Self {
            encryption_key: [0u8; 32],
            auth_key: [0u8; 32],
            counter: [0u8; 16],
        };

        keys.encryption_key
            .copy_from_slice(&derive_block(seed, EK_DOMAIN_BYTE)?);
        keys.auth_key
            .copy_from_slice(&derive_block(seed, AK_DOMAIN_BYTE)?);
        keys.counter
            .copy_from_slice(&derive_block(seed, IV_DOMAIN_BYTE)?[..16]);

        Ok(keys)
    }

    fn apply_keystream(&self, data: &mut [u8]) {
        let mut cipher = Aes256Ctr::new(&self.encryption_key.into(), &self.counter.into());
        cipher.apply_keystream(data);
    }

    fn tag(&self, wrapped_seed: &[u8], ciphertext: &[u8]) -> SealboxResult<[u8; ENVELOPE_TAG_SIZE]> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.auth_key)
            .map_err(|_| SealboxError::CryptoError)?;
        mac.update(&ENVELOPE_MAGIC);
        mac.update(wrapped_seed);
        mac.update(ciphertext);

        let mut tag = [0u8; ENVELOPE_TAG_SIZE];
        tag.copy_from_slice(&mac.finalize().into_bytes());
        Ok(tag)
    }
}

/// HMAC-SHA256(key = seed, msg = domain || magic).
fn derive_block(seed: &[u8; SEED_SIZE], domain: u8) -> SealboxResult<[u8; 32]> {
    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(seed).map_err(|_| SealboxError::CryptoError)?;
    mac.update(&[domain]);
    mac.update(&ENVELOPE_MAGIC);

    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

fn random_seed() -> SealboxResult<[u8; SEED_SIZE]> {
    let mut seed = [0u8; SEED_SIZE];
    OsRng
        .try_fill_bytes(&mut seed)
        .map_err(|_| SealboxError::CryptoError)?;
    Ok(seed)
}

/// Seals `plaintext` of any length for `recipient`.
///
/// # Errors
///
/// Returns `SealboxError::CryptoError` if the random source or a primitive fails.
pub fn seal(plaintext: &[u8], recipient: &PublicKey) -> SealboxResult<Envelope> {
    let mut seed = random_seed()?;
    let wrapped = oaep::encrypt(&seed, recipient);
    let keys = DerivedKeys::derive(&seed);
    seed.zeroize();

    let wrapped_seed = wrapped?.into_bytes();
    let keys = keys?;

    let mut ciphertext = plaintext.to_vec();
    keys.apply_keystream(&mut ciphertext);
    let tag = keys.tag(&wrapped_seed, &ciphertext)?;

    tracing::debug!(plaintext_len = plaintext.len(), "sealed envelope");
    Ok(Envelope::new(wrapped_seed, tag, ciphertext))
}

/// Opens an envelope sealed for `holder`.
///
/// A seed that fails to unwrap is replaced by a random one and the tag is
/// still computed, so an unwrap failure and a tag mismatch take the same
/// path and produce the same error.
///
/// # Errors
///
/// Returns `SealboxError::DecryptionFailed` on any failure.
pub fn open(envelope: &Envelope, holder: &PrivateKey) -> SealboxResult<Vec<u8>> {
    let mut seed = random_seed().map_err(|_| SealboxError::DecryptionFailed)?;

    let unwrapped = match oaep::decrypt(envelope.wrapped_seed(), holder) {
        Ok(mut bytes) if bytes.len() == SEED_SIZE => {
            seed.copy_from_slice(&bytes);
            bytes.zeroize();
            Choice::from(1)
        }
        Ok(mut bytes) => {
            bytes.zeroize();
            Choice::from(0)
        }
        Err(_) => Choice::from(0),
    };

    let keys = DerivedKeys::derive(&seed);
    seed.zeroize();
    let keys = keys.map_err(|_| SealboxError::DecryptionFailed)?;

    let expected = keys
        .tag(envelope.wrapped_seed(), envelope.ciphertext())
        .map_err(|_| SealboxError::DecryptionFailed)?;
    let tag_ok = expected[..].ct_eq(&envelope.tag()[..]);

    if !bool::from(unwrapped & tag_ok) {
        return Err(SealboxError::DecryptionFailed);
    }

    let mut plaintext = envelope.ciphertext().to_vec();
    keys.apply_keystream(&mut plaintext);
    Ok(plaintext)
}
