use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use sealbox::{file, Digest, SealboxError};

#[derive(Parser)]
#[command(name = "sealbox")]
#[command(about = "RSA-OAEP file encryption and SHA-256 integrity checks")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an RSA-2048 key pair
    Keygen(KeygenArgs),
    /// Encrypt a small file (up to 190 bytes) for a recipient
    Encrypt(TransformArgs),
    /// Decrypt a file produced by `encrypt`
    Decrypt(TransformArgs),
    /// Seal a file of any size for a recipient
    Seal(TransformArgs),
    /// Open a file produced by `seal`
    Open(TransformArgs),
    /// Print the SHA-256 digest of files
    Hash(HashArgs),
    /// Check a file against a recorded digest or an original file
    Verify(VerifyArgs),
}

#[derive(Args)]
struct KeygenArgs {
    /// Where to write the private key
    #[arg(long, default_value = "private_key.pem")]
    private_key: PathBuf,

    /// Where to write the public key
    #[arg(long, default_value = "public_key.pem")]
    public_key: PathBuf,

    /// Protect the private key with this passphrase
    #[arg(long, env = "SEALBOX_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,
}

#[derive(Args)]
struct TransformArgs {
    /// Input file
    file: PathBuf,

    /// Recipient public key (encrypt/seal) or own private key (decrypt/open)
    #[arg(short, long)]
    key: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Passphrase for an encrypted private key
    #[arg(long, env = "SEALBOX_PASSPHRASE", hide_env_values = true)]
    passphrase: Option<String>,
}

#[derive(Args)]
struct HashArgs {
    /// Files to hash
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Args)]
struct VerifyArgs {
    /// File to check
    file: PathBuf,

    /// Expected SHA-256 digest (64 hex characters)
    #[arg(long, conflicts_with = "against", required_unless_present = "against")]
    digest: Option<String>,

    /// Original file to compare against
    #[arg(long)]
    against: Option<PathBuf>,
}

enum Outcome {
    Done,
    Mismatch,
}

#[derive(Clone, Copy)]
enum Transform {
    Encrypt,
    Decrypt,
    Seal,
    Open,
}

impl Transform {
    const fn verb(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
            Self::Seal => "seal",
            Self::Open => "open",
        }
    }
}

#[derive(Serialize)]
struct KeygenOutput {
    private_key: String,
    public_key: String,
    encrypted: bool,
    fingerprint: String,
}

#[derive(Serialize)]
struct TransformOutput {
    operation: &'static str,
    input: String,
    output: String,
}

#[derive(Serialize)]
struct HashOutput {
    path: String,
    digest: String,
}

#[derive(Serialize)]
struct VerifyOutput {
    path: String,
    expected: String,
    matches: bool,
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}

fn print_success(message: impl Display) {
    println!("ok: {message}");
}

fn load_private(args: &TransformArgs) -> Result<sealbox::PrivateKey> {
    let key = match &args.passphrase {
        Some(passphrase) => file::load_private_key_with_passphrase(&args.key, passphrase),
        None => file::load_private_key(&args.key),
    };
    key.with_context(|| format!("Failed to load private key {}", args.key.display()))
}

fn load_public(args: &TransformArgs) -> Result<sealbox::PublicKey> {
    file::load_public_key(&args.key)
        .with_context(|| format!("Failed to load public key {}", args.key.display()))
}

fn keygen(args: KeygenArgs, json: bool) -> Result<Outcome> {
    let pair = file::generate_key_pair()?;
    let passphrase = args.passphrase.as_deref().map(str::as_bytes);
    file::save_key_pair(&pair, &args.private_key, &args.public_key, passphrase)
        .context("Failed to save key pair")?;
    let fingerprint = pair.public_key().fingerprint()?;

    if json {
        print_json(&KeygenOutput {
            private_key: args.private_key.display().to_string(),
            public_key: args.public_key.display().to_string(),
            encrypted: passphrase.is_some(),
            fingerprint: fingerprint.to_hex(),
        })?;
    } else {
        print_success("RSA key pair generated");
        println!("  private key: {}", args.private_key.display());
        println!("  public key:  {}", args.public_key.display());
        println!("  fingerprint: {fingerprint}");
        if passphrase.is_none() {
            eprintln!("warning: the private key is stored unencrypted");
        }
    }
    Ok(Outcome::Done)
}

fn transform(operation: Transform, args: TransformArgs, json: bool) -> Result<Outcome> {
    match operation {
        Transform::Encrypt => file::encrypt_file(&args.file, &load_public(&args)?, &args.output),
        Transform::Decrypt => file::decrypt_file(&args.file, &load_private(&args)?, &args.output),
        Transform::Seal => file::seal_file(&args.file, &load_public(&args)?, &args.output),
        Transform::Open => file::open_file(&args.file, &load_private(&args)?, &args.output),
    }
    .with_context(|| format!("Failed to {} {}", operation.verb(), args.file.display()))?;

    if json {
        print_json(&TransformOutput {
            operation: operation.verb(),
            input: args.file.display().to_string(),
            output: args.output.display().to_string(),
        })?;
    } else {
        print_success(format!(
            "{} -> {}",
            args.file.display(),
            args.output.display()
        ));
    }
    Ok(Outcome::Done)
}

fn hash(args: HashArgs, json: bool) -> Result<Outcome> {
    let mut results = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let digest = file::hash_file(path)
            .with_context(|| format!("Failed to hash {}", path.display()))?;
        results.push(HashOutput {
            path: path.display().to_string(),
            digest: digest.to_hex(),
        });
    }

    if json {
        print_json(&results)?;
    } else {
        for result in &results {
            println!("{}  {}", result.digest, result.path);
        }
    }
    Ok(Outcome::Done)
}

fn verify(args: VerifyArgs, json: bool) -> Result<Outcome> {
    let expected: Digest = match (&args.digest, &args.against) {
        (Some(hex), _) => hex.parse::<Digest>()?,
        (None, Some(original)) => file::hash_file(original)
            .with_context(|| format!("Failed to hash {}", original.display()))?,
        (None, None) => anyhow::bail!("either --digest or --against is required"),
    };

    let matches = file::verify_integrity(&args.file, &expected)
        .with_context(|| format!("Failed to verify {}", args.file.display()))?;

    if json {
        print_json(&VerifyOutput {
            path: args.file.display().to_string(),
            expected: expected.to_hex(),
            matches,
        })?;
    } else if matches {
        println!("{}: OK", args.file.display());
    } else {
        println!("{}: FAILED", args.file.display());
    }

    Ok(if matches { Outcome::Done } else { Outcome::Mismatch })
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SealboxError>() {
        Some(SealboxError::InvalidDigest) => 2,
        Some(SealboxError::NotFound(_)) => 3,
        Some(SealboxError::KeyFormat | SealboxError::UnsupportedKey(_)) => 4,
        Some(SealboxError::DecryptionFailed) => 5,
        Some(SealboxError::PlaintextTooLarge { .. }) => 6,
        _ => 7,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sealbox=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sealbox=warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Keygen(args) => keygen(args, cli.json),
        Commands::Encrypt(args) => transform(Transform::Encrypt, args, cli.json),
        Commands::Decrypt(args) => transform(Transform::Decrypt, args, cli.json),
        Commands::Seal(args) => transform(Transform::Seal, args, cli.json),
        Commands::Open(args) => transform(Transform::Open, args, cli.json),
        Commands::Hash(args) => hash(args, cli.json),
        Commands::Verify(args) => verify(args, cli.json),
    };

    match result {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Mismatch) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
