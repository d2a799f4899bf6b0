//! Generates key pairs and derives public keys for TLS key agreement curves.
use base64::prelude::*;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tls_crypto_curves::{Curve, CurveId, CurveRegistry, KeyEncoding, KeyPair};
use tracing::debug;
use tracing_subscriber::filter;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help(true))]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known curve
    List,

    /// Generate a new key pair and print it as JSON
    Generate {
        /// Curve name or alias (curve25519, x25519, nistp256, secp384r1, ...)
        #[arg(short, long)]
        curve: String,
    },

    /// Derive the public key for a private key stored in a file
    Derive {
        /// Curve name or alias
        #[arg(short, long)]
        curve: String,

        /// PEM private key for NIST curves, base64 private key for raw curves
        #[arg(short, long)]
        private_key: PathBuf,
    },
}

/// Raw keys are base64 encoded, PEM keys are printed as-is
fn encode_key(encoding: KeyEncoding, key: &[u8]) -> Result<String> {
    Ok(match encoding {
        KeyEncoding::Raw => BASE64_STANDARD.encode(key),
        KeyEncoding::Pem => String::from_utf8(key.to_vec())?,
    })
}

fn key_pair_json(curve: &dyn Curve, pair: &KeyPair) -> Result<Value> {
    Ok(json!({
        "curve": curve.name(),
        "key_size": curve.key_size(),
        "named_group": format!("0x{:04x}", curve.id().named_group()),
        "private_key": encode_key(curve.encoding(), pair.private_key())?,
        "public_key": encode_key(curve.encoding(), pair.public_key())?,
        "public_jwk": serde_json::to_value(pair.public_jwk()?)?,
    }))
}

fn list() {
    let available = CurveRegistry::default().supported();

    println!(
        "{:<12} {:>5} {:<12} {:<8} {:<9}",
        "NAME", "BITS", "OPENSSL", "GROUP", "AVAILABLE"
    );
    for id in CurveId::ALL {
        println!(
            "{:<12} {:>5} {:<12} 0x{:04x}   {:<9}",
            id.name(),
            id.key_size(),
            id.openssl_name(),
            id.named_group(),
            if available.contains(&id) {
                "yes"
            } else {
                "no"
            }
        );
    }
}

fn generate(registry: &CurveRegistry, name: &str) -> Result<()> {
    let curve = registry.get(name)?;
    let pair = curve.generate_key_pair()?;

    println!(
        "{}",
        serde_json::to_string_pretty(&key_pair_json(curve, &pair)?)?
    );
    Ok(())
}

fn derive(registry: &CurveRegistry, name: &str, path: &Path) -> Result<()> {
    let curve = registry.get(name)?;
    let contents = fs::read(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read private key");

    let private_key = match curve.encoding() {
        KeyEncoding::Raw => BASE64_STANDARD.decode(String::from_utf8(contents)?.trim())?,
        KeyEncoding::Pem => contents,
    };

    let public_key = curve.derive_public_key(&private_key)?;
    println!("{}", encode_key(curve.encoding(), &public_key)?);
    Ok(())
}

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let registry = CurveRegistry::default();

    match args.command {
        Command::List => list(),
        Command::Generate { curve } => generate(&registry, &curve)?,
        Command::Derive { curve, private_key } => derive(&registry, &curve, &private_key)?,
    }

    Ok(())
}
