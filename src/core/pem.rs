//! PEM label parsing for key files.
//!
//! Key files follow RFC 7468: `-----BEGIN {label}-----`, base64 body,
//! `-----END {label}-----`. The label decides which decoder runs, so it is
//! inspected before any DER parsing happens.

use pkcs8::der::pem::decode_label;

use crate::core::error::{SealboxError, SealboxResult};

/// The PEM encodings sealbox knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PemKind {
    /// `PRIVATE KEY` - unencrypted PKCS#8.
    Pkcs8Private,
    /// `ENCRYPTED PRIVATE KEY` - PKCS#8 protected with PBES2.
    EncryptedPkcs8Private,
    /// `RSA PRIVATE KEY` - PKCS#1.
    Pkcs1Private,
    /// `PUBLIC KEY` - SubjectPublicKeyInfo.
    Spki,
    /// `RSA PUBLIC KEY` - PKCS#1.
    Pkcs1Public,
}

impl PemKind {
    /// Returns the PEM label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pkcs8Private => "PRIVATE KEY",
            Self::EncryptedPkcs8Private => "ENCRYPTED PRIVATE KEY",
            Self::Pkcs1Private => "RSA PRIVATE KEY",
            Self::Spki => "PUBLIC KEY",
            Self::Pkcs1Public => "RSA PUBLIC KEY",
        }
    }

    /// Returns `true` for the private key encodings.
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(
            self,
            Self::Pkcs8Private | Self::EncryptedPkcs8Private | Self::Pkcs1Private
        )
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "PRIVATE KEY" => Some(Self::Pkcs8Private),
            "ENCRYPTED PRIVATE KEY" => Some(Self::EncryptedPkcs8Private),
            "RSA PRIVATE KEY" => Some(Self::Pkcs1Private),
            "PUBLIC KEY" => Some(Self::Spki),
            "RSA PUBLIC KEY" => Some(Self::Pkcs1Public),
            _ => None,
        }
    }
}

/// Classifies a PEM document by its label.
///
/// Text before the first boundary is skipped. The `END` line must carry the
/// same label as the `BEGIN` line.
///
/// # Errors
///
/// - `SealboxError::KeyFormat` if the boundaries are missing or mismatched,
///   or the label is not a key label at all (e.g. `CERTIFICATE`).
/// - `SealboxError::UnsupportedKey` for key labels of other algorithms
///   (e.g. `EC PRIVATE KEY`).
pub fn classify(pem: &str) -> SealboxResult<PemKind> {
    let label = decode_label(pem.as_bytes()).map_err(|_| SealboxError::KeyFormat)?;

    if let Some(kind) = PemKind::from_label(label) {
        return Ok(kind);
    }

    if label.ends_with("PRIVATE KEY") || label.ends_with("PUBLIC KEY") {
        return Err(SealboxError::UnsupportedKey(format!("{label} is not an RSA key")));
    }

    Err(SealboxError::KeyFormat)
}

/// Classifies a PEM document and checks it holds the expected half of a key pair.
///
/// # Errors
///
/// Returns `SealboxError::KeyFormat` when a public key is given where a
/// private key is expected or vice versa, plus everything [`classify`] returns.
pub fn expect_kind(pem: &str, private: bool) -> SealboxResult<PemKind> {
    let kind = classify(pem)?;
    if kind.is_private() != private {
        return Err(SealboxError::KeyFormat);
    }
    Ok(kind)
}

/// Interprets raw key file bytes as PEM text.
pub(crate) fn as_text(bytes: &[u8]) -> SealboxResult<&str> {
    core::str::from_utf8(bytes).map_err(|_| SealboxError::KeyFormat)
}
