//! Core sealbox types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`params`] - Fixed RSA / OAEP / hashing parameters
//! - [`error`] - Error types for sealbox operations
//! - [`pem`] - PEM label parsing and classification
//! - [`types`] - Keys, digests and ciphertext containers
//! - [`operations`] - Encryption, hashing and verification

pub mod error;
pub mod operations;
pub mod params;
pub mod pem;
pub mod types;

// Re-export commonly used items
pub use error::{SealboxError, SealboxResult};
