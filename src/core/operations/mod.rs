//! Cryptographic operations for sealbox.
//!
//! - [`oaep`] - single-block RSA-OAEP encryption and decryption
//! - [`hash`] - streaming SHA-256 content hashing
//! - [`verify`] - integrity verification against a recorded digest
//! - [`seal`] - hybrid envelopes for payloads of any length (`hybrid` feature)

pub mod hash;
pub mod oaep;
pub mod verify;

#[cfg(feature = "hybrid")]
pub mod seal;
