//! `PublicKey` - the shareable half of a key pair.
//!
//! A `PublicKey` can only encrypt. It serializes to a `PUBLIC KEY` PEM
//! (SubjectPublicKeyInfo) and decodes from either SPKI or PKCS#1
//! `RSA PUBLIC KEY` PEM.

use core::fmt::{self, Debug};

use pkcs8::spki;
use pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use crate::core::error::{SealboxError, SealboxResult};
use crate::core::operations::hash::hash_bytes;
use crate::core::operations::oaep;
use crate::core::params::{self, MAX_PLAINTEXT_BYTES};
use crate::core::pem::{self, PemKind};
use crate::core::types::{Digest, EncryptedPayload};

#[cfg(feature = "hybrid")]
use crate::core::types::Envelope;

/// An RSA-2048 public key with exponent 65537.
///
/// Public keys are freely copyable; clone one per encryptor as needed.
///
/// # Example
///
/// ```rust
/// use sealbox::KeyPair;
///
/// let pair = KeyPair::generate()?;
/// let pem = pair.public_key().to_pem()?;
/// assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
///
/// let payload = pair.public_key().encrypt(b"hello")?;
/// assert_eq!(payload.len(), 256);
/// # Ok::<(), sealbox::SealboxError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

impl PublicKey {
    /// Wraps an `rsa` public key after checking its size and exponent.
    pub(crate) fn from_rsa(inner: RsaPublicKey) -> SealboxResult<Self> {
        params::check_public(&inner)?;
        Ok(Self { inner })
    }

    pub(crate) fn as_rsa(&self) -> &RsaPublicKey {
        &self.inner
    }

    /// Decodes a public key from PEM text (`PUBLIC KEY` or `RSA PUBLIC KEY`).
    ///
    /// # Errors
    ///
    /// - `SealboxError::KeyFormat` if the text is not a well-formed public key.
    /// - `SealboxError::UnsupportedKey` if it is not RSA-2048 / 65537.
    pub fn from_pem(pem: &str) -> SealboxResult<Self> {
        let inner = match pem::expect_kind(pem, false)? {
            PemKind::Spki => RsaPublicKey::from_public_key_pem(pem).map_err(map_spki_error)?,
            PemKind::Pkcs1Public => {
                RsaPublicKey::from_pkcs1_pem(pem).map_err(|_| SealboxError::KeyFormat)?
            }
            _ => return Err(SealboxError::KeyFormat),
        };
        Self::from_rsa(inner)
    }

    /// Decodes a public key from the raw bytes of a PEM file.
    ///
    /// # Errors
    ///
    /// Same as [`PublicKey::from_pem`]; non-UTF-8 input is a `KeyFormat` error.
    pub fn from_pem_bytes(bytes: &[u8]) -> SealboxResult<Self> {
        Self::from_pem(pem::as_text(bytes)?)
    }

    /// Encodes the key as a SubjectPublicKeyInfo PEM with `\n` line endings.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if DER encoding fails.
    pub fn to_pem(&self) -> SealboxResult<String> {
        self.to_pem_with(LineEnding::LF)
    }

    /// Encodes the key as a SubjectPublicKeyInfo PEM with the given line ending.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if DER encoding fails.
    pub fn to_pem_with(&self, line_ending: LineEnding) -> SealboxResult<String> {
        self.inner
            .to_public_key_pem(line_ending)
            .map_err(|_| SealboxError::CryptoError)
    }

    /// Encodes the key as SubjectPublicKeyInfo DER.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if DER encoding fails.
    pub fn to_der(&self) -> SealboxResult<Vec<u8>> {
        self.inner
            .to_public_key_der()
            .map(|doc| doc.as_bytes().to_vec())
            .map_err(|_| SealboxError::CryptoError)
    }

    /// SHA-256 over the SubjectPublicKeyInfo DER.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if DER encoding fails.
    pub fn fingerprint(&self) -> SealboxResult<Digest> {
        Ok(hash_bytes(&self.to_der()?))
    }

    /// Modulus size in bits (always 2048 for a constructed key).
    #[must_use]
    pub fn modulus_bits(&self) -> usize {
        self.inner.n().bits()
    }

    /// Largest plaintext [`PublicKey::encrypt`] accepts.
    #[must_use]
    pub const fn max_plaintext_len(&self) -> usize {
        MAX_PLAINTEXT_BYTES
    }

    /// Encrypts a single block with RSA-OAEP (SHA-256, MGF1-SHA-256, empty label).
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::PlaintextTooLarge` for plaintexts over 190 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> SealboxResult<EncryptedPayload> {
        oaep::encrypt(plaintext, self)
    }

    /// Seals a plaintext of any length into a hybrid [`Envelope`].
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if the random source fails.
    #[cfg(feature = "hybrid")]
    pub fn seal(&self, plaintext: &[u8]) -> SealboxResult<Envelope> {
        crate::core::operations::seal::seal(plaintext, self)
    }
}

fn map_spki_error(err: spki::Error) -> SealboxError {
    match err {
        spki::Error::OidUnknown { .. } => {
            SealboxError::UnsupportedKey("public key algorithm is not RSA".to_string())
        }
        _ => SealboxError::KeyFormat,
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("modulus_bits", &self.modulus_bits())
            .field("exponent", &self.inner.e().to_string())
            .finish()
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = SealboxError;

    fn try_from(pem: &str) -> Result<Self, Self::Error> {
        Self::from_pem(pem)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = SealboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_pem_bytes(bytes)
    }
}
