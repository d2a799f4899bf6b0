//! The common curve contract and generated key pairs

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CurveError, CurveId, JWK, error::Result};

/// How a curve encodes its keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// Raw little-endian scalars and u-coordinates (X25519, X448)
    Raw,
    /// PEM text: PKCS#8 private keys and SPKI public keys (NIST curves)
    Pem,
}

/// A key agreement curve backed by a cryptography provider
pub trait Curve: fmt::Debug + Send + Sync {
    /// Identifier of this curve
    fn id(&self) -> CurveId;

    /// Canonical lowercase curve name
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Key size in bits
    fn key_size(&self) -> u32 {
        self.id().key_size()
    }

    /// Encoding used for both halves of a key pair
    fn encoding(&self) -> KeyEncoding;

    /// Generates a new random key pair
    fn generate_key_pair(&self) -> Result<KeyPair>;

    /// Derives the public key belonging to `private_key`
    ///
    /// The result uses the same encoding as the public half of
    /// [`Curve::generate_key_pair`], so the two can be compared directly.
    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>>;
}

/// Generated key pair, tagged with its curve
///
/// The private key is wiped from memory when the key pair is dropped.
/// Equality only looks at the curve and the public key, so comparing two
/// key pairs never branches on private key bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    curve: CurveId,
    private_key: Vec<u8>,
    public_key: Vec<u8>,
}

impl KeyPair {
    pub(crate) fn new(curve: CurveId, private_key: Vec<u8>, public_key: Vec<u8>) -> Self {
        KeyPair {
            curve,
            private_key,
            public_key,
        }
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Private key as text, for PEM encoded curves
    pub fn private_key_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.private_key).ok()
    }

    /// Public key as text, for PEM encoded curves
    pub fn public_key_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.public_key).ok()
    }

    /// Public half of this key pair as a JWK
    pub fn public_jwk(&self) -> Result<JWK> {
        crate::jwk::public_jwk(self.curve, &self.public_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve)
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.public_key == other.public_key
    }
}

impl Eq for KeyPair {}

/// Decodes PEM text handed in as bytes
pub(crate) fn pem_str(private_key: &[u8]) -> Result<&str> {
    std::str::from_utf8(private_key)
        .map_err(|e| CurveError::KeyLoad(format!("private key isn't valid UTF-8 PEM: {e}")))
}
