//! RSA-OAEP file encryption and SHA-256 integrity checking.
//!
//! `sealbox` encrypts small payloads to a recipient's RSA public key,
//! decrypts them with the matching private key, and records or verifies
//! SHA-256 digests of file content. Keys are exchanged as PEM text.
//!
//! # Quick Start
//!
//! ```rust
//! use sealbox::KeyPair;
//!
//! let pair = KeyPair::generate()?;
//!
//! // Anyone holding the public key can encrypt
//! let payload = pair.public_key().encrypt(b"Test data")?;
//! assert_eq!(payload.len(), 256);
//!
//! // Only the private key holder can decrypt
//! let plaintext = pair.private_key().decrypt(&payload)?;
//! assert_eq!(plaintext, b"Test data");
//!
//! // Integrity digests are plain SHA-256
//! let digest = sealbox::hash_bytes(b"Test data");
//! assert!(sealbox::verify(&b"Test data"[..], &digest)?);
//! # Ok::<(), sealbox::SealboxError>(())
//! ```
//!
//! # Scheme
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Modulus | 2048 bits |
//! | Public exponent | 65537 |
//! | Padding | OAEP, SHA-256, MGF1-SHA-256, empty label |
//! | Max plaintext | 190 bytes per block |
//! | Ciphertext | 256 bytes per block |
//! | Digest | SHA-256, 64 hex characters |
//! | Private key PEM | PKCS#8 (`PRIVATE KEY` or `ENCRYPTED PRIVATE KEY`) |
//! | Public key PEM | SubjectPublicKeyInfo (`PUBLIC KEY`) |
//!
//! PKCS#1 `RSA PRIVATE KEY` / `RSA PUBLIC KEY` files are accepted on load;
//! output is always PKCS#8 / SPKI. Keys of any other size, exponent or
//! algorithm are rejected with [`SealboxError::UnsupportedKey`].
//!
//! Payloads longer than one block go through a hybrid [`Envelope`]
//! (`hybrid` feature): a random seed is wrapped with RSA-OAEP and the
//! content is encrypted with AES-256-CTR and authenticated with
//! HMAC-SHA256.
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! sealbox = { version = "0.1" }  # prelude, hybrid and the CLI (default)
//! sealbox = { version = "0.1", default-features = false }  # OAEP and hashing only
//! sealbox = { version = "0.1", default-features = false, features = ["hybrid"] }
//! ```
//!
//! # Security
//!
//! - Private keys are written **unencrypted** unless a passphrase is given;
//!   protect the file with filesystem permissions
//! - All decryption failures are reported as one opaque error
//! - Debug output redacts private key material
//! - Constant-time comparison for private keys and envelope tags
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`file`] - Path-based wrappers around the core operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;
pub mod file;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{SealboxError, SealboxResult};
pub use crate::core::operations::hash::{hash, hash_bytes, Hasher};
pub use crate::core::operations::oaep::{decrypt, encrypt};
pub use crate::core::operations::verify::{verify, verify_bytes};
pub use crate::core::types::{Digest, EncryptedPayload, KeyPair, PrivateKey, PublicKey};

#[cfg(feature = "hybrid")]
pub use crate::core::operations::seal::{open, seal};
#[cfg(feature = "hybrid")]
pub use crate::core::types::Envelope;

pub use pkcs8::LineEnding;
