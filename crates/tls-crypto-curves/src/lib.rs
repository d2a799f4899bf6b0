//! Key pair generation and public key derivation for TLS key agreement curves
//!
//! This crate provides:
//! - A uniform [`Curve`] contract for Curve25519, Curve448 and NIST P-256/P-384/P-521
//! - Curve identification by name, alias or TLS NamedGroup code point
//! - A configurable [`CurveRegistry`] for choosing a key agreement curve
//! - Public key export as JWK
//!
//! All curve arithmetic is delegated to the provider crates (`x25519-dalek`,
//! `p256`, `p384`, `p521`). Curve448 has no provider and always reports that
//! it is unsupported.

mod config;
mod curve;
mod curve_id;
mod ec_private_key;
mod error;
mod registry;

pub mod curve25519;
pub mod curve448;
pub mod jwk;
pub mod p256;
pub mod p384;
pub mod p521;

pub use config::{CurvesConfig, CurvesConfigBuilder};
pub use curve::{Curve, KeyEncoding, KeyPair};
pub use curve_id::CurveId;
pub use curve25519::Curve25519;
pub use curve448::Curve448;
pub use error::{CurveError, Result};
pub use jwk::{ECParams, JWK, OctectParams, Params};
pub use p256::NistP256;
pub use p384::NistP384;
pub use p521::NistP521;
pub use registry::CurveRegistry;
