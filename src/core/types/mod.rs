//! sealbox value types.
//!
//! - [`KeyPair`] - a private key and its public half
//! - [`PrivateKey`] - decrypts; PKCS#8 PEM
//! - [`PublicKey`] - encrypts; SubjectPublicKeyInfo PEM
//! - [`Digest`] - SHA-256 content digest
//! - [`EncryptedPayload`] - a single 256-byte RSA-OAEP block
//! - [`Envelope`] - hybrid ciphertext for payloads of any length

mod digest;
mod key_pair;
mod payload;
mod private;
mod public;

#[cfg(feature = "hybrid")]
mod envelope;

pub use digest::Digest;
pub use key_pair::KeyPair;
pub use payload::EncryptedPayload;
pub use private::PrivateKey;
pub use public::PublicKey;

#[cfg(feature = "hybrid")]
pub use envelope::{Envelope, ENVELOPE_MAGIC, ENVELOPE_OVERHEAD, ENVELOPE_TAG_SIZE};
