//! Test vector types for the sealbox integration tests.
//!
//! The OAEP ciphertexts and PEM fixtures were produced with the `openssl`
//! command line tool, so passing them proves interoperability rather than
//! self-consistency.

// Some fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use std::path::PathBuf;

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    #[serde(rename = "private-key", default)]
    pub private_key: Option<String>,
    pub tests: Vec<T>,
}

/// SHA-256 digest of `input` repeated `repeat` times.
#[derive(Debug, Deserialize)]
pub struct Sha256TestVector {
    pub name: String,
    /// Hex-encoded input unit
    pub input: String,
    #[serde(default = "one")]
    pub repeat: usize,
    /// Expected digest, hex
    pub digest: String,
}

fn one() -> usize {
    1
}

impl Sha256TestVector {
    pub fn content(&self) -> Vec<u8> {
        hex_decode(&self.input)
            .unwrap_or_else(|| panic!("{}: invalid input hex", self.name))
            .repeat(self.repeat)
    }
}

/// RSA-OAEP ciphertext with its expected plaintext.
#[derive(Debug, Deserialize)]
pub struct OaepTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Hex-encoded ciphertext
    pub ciphertext: String,
}

/// Expected result of loading a PEM fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyExpectation {
    Ok,
    KeyFormat,
    Unsupported,
}

/// Which half of a key pair the fixture is loaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Private,
    Public,
}

/// A PEM fixture and the outcome of loading it.
#[derive(Debug, Deserialize)]
pub struct KeyTestVector {
    pub name: String,
    /// File name under `tests/vectors/keys`
    pub file: String,
    pub kind: KeyKind,
    #[serde(default)]
    pub passphrase: Option<String>,
    pub expect: KeyExpectation,
}

/// Get the path to the test vectors directory.
pub fn vectors_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors")
}

/// Get the path to a PEM fixture.
pub fn key_path(file: &str) -> PathBuf {
    vectors_dir().join("keys").join(file)
}

/// Decode hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load test vectors from a JSON file under `tests/vectors`.
pub fn load_vectors<T: serde::de::DeserializeOwned>(file: &str) -> TestVectorSuite<T> {
    let path = vectors_dir().join(file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {}: {e}", path.display()))
}
