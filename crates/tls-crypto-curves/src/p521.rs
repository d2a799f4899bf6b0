//! NIST P-521 (secp521r1) key operations

use p521::{
    PublicKey, SecretKey,
    pkcs8::{AssociatedOid, DecodePrivateKey, EncodePrivateKey, EncodePublicKey, LineEnding},
};
use rand::rngs::OsRng;
use tracing::debug;

use crate::{
    Curve, CurveError, CurveId, KeyEncoding, KeyPair,
    curve::pem_str,
    ec_private_key::{SEC1_PEM_BEGIN, check_sec1_pem},
    error::Result,
};

/// Length in bytes of a P-521 private scalar
pub const SCALAR_LENGTH: usize = 66;

/// NIST P-521, backed by the RustCrypto `p521` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct NistP521;

impl Curve for NistP521 {
    fn id(&self) -> CurveId {
        CurveId::NistP521
    }

    fn encoding(&self) -> KeyEncoding {
        KeyEncoding::Pem
    }

    fn generate_key_pair(&self) -> Result<KeyPair> {
        let secret_key = SecretKey::random(&mut OsRng);

        let private_pem = secret_key
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| {
                CurveError::KeyGeneration("P-521", format!("private key export: {e}"))
            })?;
        let public_pem = public_pem(&secret_key.public_key())
            .map_err(|e| CurveError::KeyGeneration("P-521", e))?;
        debug!(curve = "nistp521", "generated key pair");

        Ok(KeyPair::new(
            CurveId::NistP521,
            private_pem.as_bytes().to_vec(),
            public_pem.into_bytes(),
        ))
    }

    fn derive_public_key(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let secret_key = load_secret_key(pem_str(private_key)?)?;
        let public_pem = public_pem(&secret_key.public_key())
            .map_err(|e| CurveError::KeyDerivation("P-521", e))?;
        debug!(curve = "nistp521", "derived public key");

        Ok(public_pem.into_bytes())
    }
}

/// Parses a PKCS#8 or SEC1 PEM private key
pub fn load_secret_key(pem: &str) -> Result<SecretKey> {
    let loaded = if pem.contains(SEC1_PEM_BEGIN) {
        check_sec1_pem(pem, "P-521", p521::NistP521::OID, SCALAR_LENGTH)?;
        SecretKey::from_sec1_pem(pem).map_err(|e| e.to_string())
    } else {
        SecretKey::from_pkcs8_pem(pem).map_err(|e| e.to_string())
    };

    loaded.map_err(|e| CurveError::KeyLoad(format!("not a valid P-521 key: {e}")))
}

fn public_pem(public_key: &PublicKey) -> std::result::Result<String, String> {
    public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| format!("public key export: {e}"))
}
