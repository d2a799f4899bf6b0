//! Curve25519 (X25519) key operations

use rand::rngs::OsRng;
use tracing::debug;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::{Curve, CurveError, CurveId, KeyEncoding, KeyPair, error::Result};

/// Length in bytes of an X25519 private or public key
pub const KEY_LENGTH: usize = 32;

/// Curve25519 for X25519 key agreement, backed by `x25519-dalek`
#[derive(Debug, Default, Clone, Copy)]
pub struct Curve25519;

impl Curve for Curve25519 {
    fn id(&self) -> CurveId {
        CurveId::Curve25519
    }

    fn encoding(&self) -> KeyEncoding {
        KeyEncoding::Raw
    }

    fn generate_key_pair(&self) -> Result<KeyPair> {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        debug!(curve = "curve25519", "generated key pair");

        Ok(KeyPair::new(
            CurveId::Curve25519,
            secret.to_bytes().to_vec(),
            public.to_bytes().to_vec(),
        ))
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let bytes: [u8; KEY_LENGTH] =
            private_key
                .try_into()
                .map_err(|_| CurveError::InvalidKeyLength {
                    curve: "Curve25519",
                    expected: KEY_LENGTH,
                    actual: private_key.len(),
                })?;

        let secret = StaticSecret::from(bytes);
        let public = PublicKey::from(&secret);
        debug!(curve = "curve25519", "derived public key");

        Ok(public.to_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 7748 section 6.1
    const ALICE_SK: [u8; 32] = [
        0x77, 0x07, 0x6d, 0x0a, 0x73, 0x18, 0xa5, 0x7d, 0x3c, 0x16, 0xc1, 0x72, 0x51, 0xb2, 0x66,
        0x45, 0xdf, 0x4c, 0x2f, 0x87, 0xeb, 0xc0, 0x99, 0x2a, 0xb1, 0x77, 0xfb, 0xa5, 0x1d, 0xb9,
        0x2c, 0x2a,
    ];
    const ALICE_PK: [u8; 32] = [
        0x85, 0x20, 0xf0, 0x09, 0x89, 0x30, 0xa7, 0x54, 0x74, 0x8b, 0x7d, 0xdc, 0xb4, 0x3e, 0xf7,
        0x5a, 0x0d, 0xbf, 0x3a, 0x0d, 0x26, 0x38, 0x1a, 0xf4, 0xeb, 0xa4, 0xa9, 0x8e, 0xaa, 0x9b,
        0x4e, 0x6a,
    ];

    #[test]
    fn name_and_size() {
        assert_eq!(Curve25519.name(), "curve25519");
        assert_eq!(Curve25519.key_size(), 256);
        assert_eq!(Curve25519.encoding(), KeyEncoding::Raw);
    }

    #[test]
    fn derive_known_vector() {
        assert_eq!(Curve25519.derive_public_key(&ALICE_SK).unwrap(), ALICE_PK);
    }

    #[test]
    fn generate_has_raw_lengths() {
        let pair = Curve25519.generate_key_pair().unwrap();
        assert_eq!(pair.curve(), CurveId::Curve25519);
        assert_eq!(pair.private_key().len(), KEY_LENGTH);
        assert_eq!(pair.public_key().len(), KEY_LENGTH);
    }

    #[test]
    fn generate_is_random() {
        let a = Curve25519.generate_key_pair().unwrap();
        let b = Curve25519.generate_key_pair().unwrap();
        assert_ne!(a.private_key(), b.private_key());
        assert_ne!(a.public_key(), b.public_key());
    }

    #[test]
    fn derive_matches_generated() {
        let pair = Curve25519.generate_key_pair().unwrap();
        let derived = Curve25519.derive_public_key(pair.private_key()).unwrap();
        assert_eq!(derived, pair.public_key());
        assert_eq!(
            derived,
            Curve25519.derive_public_key(pair.private_key()).unwrap()
        );
    }

    #[test]
    fn derive_rejects_bad_lengths() {
        for input in [
            b"invalid-key-data".to_vec(),
            Vec::new(),
            vec![b'a'; 31],
            vec![b'a'; 33],
        ] {
            let err = Curve25519.derive_public_key(&input).unwrap_err();
            assert!(matches!(
                err,
                CurveError::InvalidKeyLength { expected: 32, actual, .. } if actual == input.len()
            ));
            assert!(err.to_string().contains("Invalid Curve25519 private key length"));
        }
    }
}
