//! Path-based wrappers around the core operations.
//!
//! Each wrapper reads its whole input into memory, hands the bytes to the
//! matching core operation, and writes the whole result to the output
//! path. A missing input is reported as [`SealboxError::NotFound`] with the
//! offending path; any other filesystem failure is [`SealboxError::Io`].
//!
//! # Example
//!
//! ```rust,no_run
//! use sealbox::file;
//!
//! let pair = file::generate_key_pair()?;
//! file::save_key_pair(&pair, "private_key.pem", "public_key.pem", None)?;
//!
//! let public = file::load_public_key("public_key.pem")?;
//! file::encrypt_file("note.txt", &public, "note.txt.enc")?;
//!
//! let private = file::load_private_key("private_key.pem")?;
//! file::decrypt_file("note.txt.enc", &private, "note.txt.dec")?;
//!
//! let digest = file::hash_file("note.txt")?;
//! assert!(file::verify_integrity("note.txt.dec", &digest)?);
//! # Ok::<(), sealbox::SealboxError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use pkcs8::LineEnding;

use crate::core::error::{SealboxError, SealboxResult};
use crate::core::operations::{hash, oaep, verify};
use crate::core::pem::as_text;
use crate::core::types::{Digest, KeyPair, PrivateKey, PublicKey};

#[cfg(feature = "hybrid")]
use crate::core::operations::seal;
#[cfg(feature = "hybrid")]
use crate::core::types::Envelope;

fn read(path: &Path) -> SealboxResult<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| SealboxError::from_io(e, path))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");
    Ok(bytes)
}

fn write(path: &Path, bytes: &[u8], owner_only: bool) -> SealboxResult<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    if owner_only {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| SealboxError::from_io(e, path))?;

    // `mode` only applies on creation; an existing file keeps its old bits.
    #[cfg(unix)]
    if owner_only {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    #[cfg(not(unix))]
    let _ = owner_only;

    file.write_all(bytes)?;
    file.sync_all()?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

/// Generates a fresh RSA-2048 key pair.
///
/// # Errors
///
/// Returns `SealboxError::Generation` if key generation fails.
pub fn generate_key_pair() -> SealboxResult<KeyPair> {
    KeyPair::generate()
}

/// Writes both halves of `pair` as PEM files.
///
/// The private key is PKCS#8, encrypted under `passphrase` when one is
/// given. On Unix the private key file is left with mode `0600`, even when
/// it already existed with looser permissions.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if a parent directory is missing, or
/// `SealboxError::Io` for any other write failure.
pub fn save_key_pair(
    pair: &KeyPair,
    private_path: impl AsRef<Path>,
    public_path: impl AsRef<Path>,
    passphrase: Option<&[u8]>,
) -> SealboxResult<()> {
    let private_path = private_path.as_ref();
    let public_path = public_path.as_ref();

    let private_pem = match passphrase {
        Some(passphrase) => pair
            .private_key()
            .to_encrypted_pem(passphrase, LineEnding::LF)?,
        None => {
            tracing::warn!(
                path = %private_path.display(),
                "writing unencrypted private key"
            );
            pair.private_key().to_pem()?
        }
    };
    let public_pem = pair.public_key().to_pem()?;
    write_key_files(
        private_path,
        private_pem.as_bytes(),
        public_path,
        public_pem.as_bytes(),
    )
}

/// Writes encoded key halves, the private one readable by the owner only.
///
/// The public half goes first so a failed write never leaves a private key
/// without its public counterpart.
pub(crate) fn write_key_files(
    private_path: &Path,
    private_pem: &[u8],
    public_path: &Path,
    public_pem: &[u8],
) -> SealboxResult<()> {
    write(public_path, public_pem, false)?;
    write(private_path, private_pem, true)?;

    tracing::info!(
        private = %private_path.display(),
        public = %public_path.display(),
        "saved key pair"
    );
    Ok(())
}

/// Loads a public key from a PEM file (`PUBLIC KEY` or `RSA PUBLIC KEY`).
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if the file is missing,
/// `SealboxError::KeyFormat` if it is not a public key PEM, or
/// `SealboxError::UnsupportedKey` for a non RSA-2048/65537 key.
pub fn load_public_key(path: impl AsRef<Path>) -> SealboxResult<PublicKey> {
    let bytes = read(path.as_ref())?;
    PublicKey::from_pem(as_text(&bytes)?)
}

/// Loads an unencrypted private key from a PEM file.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if the file is missing,
/// `SealboxError::KeyFormat` if it is not an unencrypted private key PEM, or
/// `SealboxError::UnsupportedKey` for a non RSA-2048/65537 key.
pub fn load_private_key(path: impl AsRef<Path>) -> SealboxResult<PrivateKey> {
    let bytes = zeroize::Zeroizing::new(read(path.as_ref())?);
    PrivateKey::from_pem(as_text(&bytes)?)
}

/// Loads a private key that may be passphrase protected.
///
/// Unencrypted files load as with [`load_private_key`]; the passphrase is
/// then ignored.
///
/// # Errors
///
/// As [`load_private_key`]; a wrong passphrase is `SealboxError::KeyFormat`.
pub fn load_private_key_with_passphrase(
    path: impl AsRef<Path>,
    passphrase: impl AsRef<[u8]>,
) -> SealboxResult<PrivateKey> {
    let bytes = zeroize::Zeroizing::new(read(path.as_ref())?);
    PrivateKey::from_encrypted_pem(as_text(&bytes)?, passphrase)
}

/// Encrypts the content of `path` as a single RSA-OAEP block into `out`.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if `path` is missing, or
/// `SealboxError::PlaintextTooLarge` if it holds more than 190 bytes.
pub fn encrypt_file(
    path: impl AsRef<Path>,
    recipient: &PublicKey,
    out: impl AsRef<Path>,
) -> SealboxResult<()> {
    let plaintext = read(path.as_ref())?;
    let payload = oaep::encrypt(&plaintext, recipient)?;
    write(out.as_ref(), payload.as_bytes(), false)
}

/// Decrypts a single RSA-OAEP block from `path` into `out`.
///
/// Nothing is written when decryption fails.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if `path` is missing, or
/// `SealboxError::DecryptionFailed` for any wrong-key or corrupted input.
pub fn decrypt_file(
    path: impl AsRef<Path>,
    holder: &PrivateKey,
    out: impl AsRef<Path>,
) -> SealboxResult<()> {
    let ciphertext = read(path.as_ref())?;
    let plaintext = zeroize::Zeroizing::new(oaep::decrypt(&ciphertext, holder)?);
    write(out.as_ref(), &plaintext, false)
}

/// Computes the SHA-256 digest of a file, streaming it in 64 KiB blocks.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if the file is missing.
pub fn hash_file(path: impl AsRef<Path>) -> SealboxResult<Digest> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SealboxError::from_io(e, path))?;
    hash::hash(file)
}

/// Checks a file against a previously recorded digest.
///
/// Returns `Ok(false)` on a mismatch. A missing file is an error, never a
/// mismatch.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if the file is missing.
pub fn verify_integrity(path: impl AsRef<Path>, expected: &Digest) -> SealboxResult<bool> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SealboxError::from_io(e, path))?;
    let matches = verify::verify(file, expected)?;
    tracing::info!(path = %path.display(), matches, "verified integrity");
    Ok(matches)
}

/// Checks a file against the current digest of `original`.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if either file is missing.
pub fn verify_against(
    path: impl AsRef<Path>,
    original: impl AsRef<Path>,
) -> SealboxResult<bool> {
    let expected = hash_file(original)?;
    verify_integrity(path, &expected)
}

/// Seals the content of `path` of any length into an envelope at `out`.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if `path` is missing.
#[cfg(feature = "hybrid")]
pub fn seal_file(
    path: impl AsRef<Path>,
    recipient: &PublicKey,
    out: impl AsRef<Path>,
) -> SealboxResult<()> {
    let plaintext = zeroize::Zeroizing::new(read(path.as_ref())?);
    let envelope = seal::seal(&plaintext, recipient)?;
    write(out.as_ref(), &envelope.to_bytes(), false)
}

/// Opens an envelope file produced by [`seal_file`] into `out`.
///
/// Nothing is written when opening fails.
///
/// # Errors
///
/// Returns `SealboxError::NotFound` if `path` is missing, or
/// `SealboxError::DecryptionFailed` for a malformed, tampered or
/// wrong-key envelope.
#[cfg(feature = "hybrid")]
pub fn open_file(
    path: impl AsRef<Path>,
    holder: &PrivateKey,
    out: impl AsRef<Path>,
) -> SealboxResult<()> {
    let bytes = read(path.as_ref())?;
    let envelope = Envelope::try_from(bytes.as_slice())?;
    let plaintext = zeroize::Zeroizing::new(seal::open(&envelope, holder)?);
    write(out.as_ref(), &plaintext, false)
}
