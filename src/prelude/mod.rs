//! Ergonomic layer for sealbox operations.
//!
//! The prelude re-exports the key, digest and payload types together with
//! the [`KeyExportBuilder`] for configuring PEM output.
//!
//! # Usage
//!
//! ```rust
//! use sealbox::prelude::*;
//!
//! let pair = KeyPair::generate()?;
//! let payload = encrypt(b"Test data", pair.public_key())?;
//! assert_eq!(decrypt(payload.as_bytes(), pair.private_key())?, b"Test data");
//! # Ok::<(), SealboxError>(())
//! ```

pub mod builders;

pub use builders::KeyExportBuilder;

// Re-export core types for convenience
pub use crate::core::error::{SealboxError, SealboxResult};
pub use crate::core::operations::hash::{hash, hash_bytes, Hasher};
pub use crate::core::operations::oaep::{decrypt, encrypt};
pub use crate::core::operations::verify::{verify, verify_bytes};
pub use crate::core::params::{MAX_PLAINTEXT_BYTES, MODULUS_BITS, MODULUS_BYTES};
pub use crate::core::types::{Digest, EncryptedPayload, KeyPair, PrivateKey, PublicKey};
pub use pkcs8::LineEnding;

#[cfg(feature = "hybrid")]
pub use crate::core::operations::seal::{open, seal};
#[cfg(feature = "hybrid")]
pub use crate::core::types::Envelope;
