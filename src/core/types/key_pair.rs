//! `KeyPair` - a private key and its public half.

use core::fmt::{self, Debug};

use crate::core::error::SealboxResult;
use crate::core::types::{PrivateKey, PublicKey};

/// A freshly generated or loaded RSA-2048 key pair.
///
/// The pair has no mutating operations. The private half is owned by the
/// pair; the public half can be cloned out and handed to any number of
/// encryptors.
///
/// # Example
///
/// ```rust
/// use sealbox::KeyPair;
///
/// let pair = KeyPair::generate()?;
/// let payload = pair.public_key().encrypt(b"Test data")?;
/// let plaintext = pair.private_key().decrypt(&payload)?;
/// assert_eq!(plaintext, b"Test data");
/// # Ok::<(), sealbox::SealboxError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: PrivateKey,
}

impl KeyPair {
    /// Generates a new key pair (2048-bit modulus, exponent 65537) from the
    /// operating system's random source.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::Generation` if key generation fails.
    pub fn generate() -> SealboxResult<Self> {
        let private = PrivateKey::generate()?;
        tracing::info!(modulus_bits = private.public_key().modulus_bits(), "generated key pair");
        Ok(Self { private })
    }

    /// Returns the private half.
    #[must_use]
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// Returns the public half.
    #[must_use]
    pub fn public_key(&self) -> &PublicKey {
        self.private.public_key()
    }

    /// Splits the pair into owned halves.
    #[must_use]
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        let public = self.private.public_key().clone();
        (self.private, public)
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private: PrivateKey) -> Self {
        Self { private }
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &self.private)
            .field("public", self.public_key())
            .finish()
    }
}
