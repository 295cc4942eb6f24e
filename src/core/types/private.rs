//! `PrivateKey` - the holder's half of a key pair.
//!
//! A `PrivateKey` can only decrypt. It serializes to a PKCS#8 `PRIVATE KEY`
//! PEM, optionally protected with a passphrase (`ENCRYPTED PRIVATE KEY`),
//! and decodes from PKCS#8, encrypted PKCS#8 or PKCS#1 `RSA PRIVATE KEY` PEM.
//!
//! # Security
//!
//! - Key material is zeroized on drop (by `rsa::RsaPrivateKey`)
//! - Debug output redacts the key
//! - Equality comparison is constant-time over the PKCS#8 encoding
//! - [`PrivateKey::to_pem`] writes the key **in the clear**; prefer
//!   [`PrivateKey::to_encrypted_pem`] whenever a passphrase is available

use core::fmt::{self, Debug};

use pkcs8::{DecodePrivateKey, EncodePrivateKey, LineEnding};
use rand_core::OsRng;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{BigUint, RsaPrivateKey};
use zeroize::Zeroizing;

use crate::core::error::{SealboxError, SealboxResult};
use crate::core::operations::oaep;
use crate::core::params::{MODULUS_BITS, PUBLIC_EXPONENT};
use crate::core::pem::{self, PemKind};
use crate::core::types::PublicKey;

#[cfg(feature = "hybrid")]
use crate::core::types::Envelope;

/// An RSA-2048 private key with exponent 65537.
#[derive(Clone)]
pub struct PrivateKey {
    inner: RsaPrivateKey,
    public: PublicKey,
}

impl PrivateKey {
    /// Generates a fresh key from the operating system's random source.
    pub(crate) fn generate() -> SealboxResult<Self> {
        let exponent = BigUint::from(PUBLIC_EXPONENT);
        let inner = RsaPrivateKey::new_with_exp(&mut OsRng, MODULUS_BITS, &exponent)
            .map_err(|_| SealboxError::Generation)?;
        Self::from_rsa(inner).map_err(|_| SealboxError::Generation)
    }

    fn from_rsa(inner: RsaPrivateKey) -> SealboxResult<Self> {
        let public = PublicKey::from_rsa(inner.to_public_key())?;
        Ok(Self { inner, public })
    }

    pub(crate) fn as_rsa(&self) -> &RsaPrivateKey {
        &self.inner
    }

    /// Decodes an unencrypted private key from PEM text.
    ///
    /// Accepts `PRIVATE KEY` (PKCS#8) and `RSA PRIVATE KEY` (PKCS#1).
    ///
    /// # Errors
    ///
    /// - `SealboxError::KeyFormat` if the text is not a well-formed private
    ///   key, or is an `ENCRYPTED PRIVATE KEY` (use [`PrivateKey::from_encrypted_pem`]).
    /// - `SealboxError::UnsupportedKey` if it is not RSA-2048 / 65537.
    pub fn from_pem(pem: &str) -> SealboxResult<Self> {
        let inner = match pem::expect_kind(pem, true)? {
            PemKind::Pkcs8Private => RsaPrivateKey::from_pkcs8_pem(pem).map_err(map_pkcs8_error)?,
            PemKind::Pkcs1Private => {
                RsaPrivateKey::from_pkcs1_pem(pem).map_err(|_| SealboxError::KeyFormat)?
            }
            _ => return Err(SealboxError::KeyFormat),
        };
        Self::from_rsa(inner)
    }

    /// Decodes a private key from the raw bytes of a PEM file.
    ///
    /// # Errors
    ///
    /// Same as [`PrivateKey::from_pem`]; non-UTF-8 input is a `KeyFormat` error.
    pub fn from_pem_bytes(bytes: &[u8]) -> SealboxResult<Self> {
        Self::from_pem(pem::as_text(bytes)?)
    }

    /// Decodes a private key, decrypting it with `passphrase` if the PEM is
    /// an `ENCRYPTED PRIVATE KEY`. Unencrypted encodings are accepted as-is.
    ///
    /// # Errors
    ///
    /// - `SealboxError::KeyFormat` on malformed input or a wrong passphrase.
    /// - `SealboxError::UnsupportedKey` if it is not RSA-2048 / 65537.
    pub fn from_encrypted_pem(pem: &str, passphrase: impl AsRef<[u8]>) -> SealboxResult<Self> {
        match pem::expect_kind(pem, true)? {
            PemKind::EncryptedPkcs8Private => {
                let inner = RsaPrivateKey::from_pkcs8_encrypted_pem(pem, passphrase)
                    .map_err(map_pkcs8_error)?;
                Self::from_rsa(inner)
            }
            _ => Self::from_pem(pem),
        }
    }

    /// Encodes the key as an **unencrypted** PKCS#8 PEM with `\n` line endings.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if DER encoding fails.
    pub fn to_pem(&self) -> SealboxResult<Zeroizing<String>> {
        self.to_pem_with(LineEnding::LF)
    }

    /// Encodes the key as an **unencrypted** PKCS#8 PEM.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if DER encoding fails.
    pub fn to_pem_with(&self, line_ending: LineEnding) -> SealboxResult<Zeroizing<String>> {
        self.inner
            .to_pkcs8_pem(line_ending)
            .map_err(|_| SealboxError::CryptoError)
    }

    /// Encodes the key as a passphrase-protected PKCS#8 PEM (PBES2, scrypt + AES-256-CBC).
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::CryptoError` if encryption or encoding fails.
    pub fn to_encrypted_pem(
        &self,
        passphrase: impl AsRef<[u8]>,
        line_ending: LineEnding,
    ) -> SealboxResult<Zeroizing<String>> {
        self.inner
            .to_pkcs8_encrypted_pem(OsRng, passphrase, line_ending)
            .map_err(|_| SealboxError::CryptoError)
    }

    /// Returns the matching public key.
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Decrypts a single RSA-OAEP block produced by [`PublicKey::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::DecryptionFailed` for a wrong-length ciphertext,
    /// bad padding, or a ciphertext made for another key. These cases are
    /// not distinguished.
    pub fn decrypt(&self, ciphertext: impl AsRef<[u8]>) -> SealboxResult<Vec<u8>> {
        oaep::decrypt(ciphertext.as_ref(), self)
    }

    /// Opens a hybrid [`Envelope`] produced by [`PublicKey::seal`].
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::DecryptionFailed` on any failure.
    #[cfg(feature = "hybrid")]
    pub fn open(&self, envelope: &Envelope) -> SealboxResult<Vec<u8>> {
        crate::core::operations::seal::open(envelope, self)
    }
}

fn map_pkcs8_error(err: pkcs8::Error) -> SealboxError {
    match err {
        pkcs8::Error::PublicKey(pkcs8::spki::Error::OidUnknown { .. }) => {
            SealboxError::UnsupportedKey("private key algorithm is not RSA".to_string())
        }
        _ => SealboxError::KeyFormat,
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("modulus_bits", &self.public.modulus_bits())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;

        let (Ok(a), Ok(b)) = (self.inner.to_pkcs8_der(), other.inner.to_pkcs8_der()) else {
            return false;
        };
        // Handle different lengths
        if a.as_bytes().len() != b.as_bytes().len() {
            return false;
        }
        a.as_bytes().ct_eq(b.as_bytes()).into()
    }
}

impl Eq for PrivateKey {}

impl TryFrom<&str> for PrivateKey {
    type Error = SealboxError;

    fn try_from(pem: &str) -> Result<Self, Self::Error> {
        Self::from_pem(pem)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = SealboxError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_pem_bytes(bytes)
    }
}
