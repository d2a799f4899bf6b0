//! Curve448 (X448)
//!
//! None of the providers in use implement X448, so every key operation fails
//! with [`CurveError::Unsupported`]. Name and key size are still reported so
//! the curve can be listed and negotiated against.

use tracing::warn;

use crate::{Curve, CurveError, CurveId, KeyEncoding, KeyPair, error::Result};

/// Length in bytes of an X448 private or public key
pub const KEY_LENGTH: usize = 56;

#[derive(Debug, Default, Clone, Copy)]
pub struct Curve448;

impl Curve for Curve448 {
    fn id(&self) -> CurveId {
        CurveId::Curve448
    }

    fn encoding(&self) -> KeyEncoding {
        KeyEncoding::Raw
    }

    fn generate_key_pair(&self) -> Result<KeyPair> {
        warn!(curve = "curve448", "key pair generation requested for unsupported curve");
        Err(CurveError::Unsupported("Curve448"))
    }

    fn derive_public_key(&self, _private_key: &[u8]) -> Result<Vec<u8>> {
        warn!(curve = "curve448", "public key derivation requested for unsupported curve");
        Err(CurveError::Unsupported("Curve448"))
    }
}
