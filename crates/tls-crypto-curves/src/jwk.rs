//! JWK (JSON Web Key) export of public keys per RFC 7517

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CurveError, CurveId, error::Result};

/// RFC 7517 JWK Struct
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, ZeroizeOnDrop)]
pub struct JWK {
    #[serde(rename = "kid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(flatten)]
    pub params: Params,
}

impl JWK {
    /// Returns the curve a JWK belongs to, if it is one of ours
    pub fn curve(&self) -> Option<CurveId> {
        let crv = match &self.params {
            Params::EC(params) => params.curve.as_str(),
            Params::OKP(params) => params.curve.as_str(),
        };
        CurveId::ALL
            .into_iter()
            .find(|curve| curve.jwk_curve() == crv)
    }
}

/// JWK Key Types and associated Parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(tag = "kty")]
pub enum Params {
    EC(ECParams),
    OKP(OctectParams),
}

/// Elliptic Curve parameters (P-256, P-384, P-521)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct ECParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    pub y: String,
}

/// Octet Key Pair parameters (X25519)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct OctectParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
}

/// Builds a public JWK from a curve's public key encoding
///
/// X25519 keys are raw bytes, NIST curve keys are SPKI PEM text.
pub fn public_jwk(curve: CurveId, public_key: &[u8]) -> Result<JWK> {
    let params = match curve {
        CurveId::Curve25519 => {
            if public_key.len() != crate::curve25519::KEY_LENGTH {
                return Err(CurveError::InvalidPublicKey(format!(
                    "X25519 public key must be {} bytes, got {}",
                    crate::curve25519::KEY_LENGTH,
                    public_key.len()
                )));
            }
            Params::OKP(OctectParams {
                curve: curve.jwk_curve().to_string(),
                x: BASE64_URL_SAFE_NO_PAD.encode(public_key),
            })
        }
        CurveId::Curve448 => return Err(CurveError::Unsupported("Curve448")),
        CurveId::NistP256 => {
            let (x, y) = nist::p256_coordinates(pem(public_key)?)?;
            ec_params(curve, &x, &y)
        }
        CurveId::NistP384 => {
            let (x, y) = nist::p384_coordinates(pem(public_key)?)?;
            ec_params(curve, &x, &y)
        }
        CurveId::NistP521 => {
            let (x, y) = nist::p521_coordinates(pem(public_key)?)?;
            ec_params(curve, &x, &y)
        }
    };

    Ok(JWK {
        key_id: None,
        params,
    })
}

fn ec_params(curve: CurveId, x: &[u8], y: &[u8]) -> Params {
    Params::EC(ECParams {
        curve: curve.jwk_curve().to_string(),
        x: BASE64_URL_SAFE_NO_PAD.encode(x),
        y: BASE64_URL_SAFE_NO_PAD.encode(y),
    })
}

fn pem(public_key: &[u8]) -> Result<&str> {
    std::str::from_utf8(public_key).map_err(|e| {
        CurveError::InvalidPublicKey(format!("public key isn't valid UTF-8 PEM: {e}"))
    })
}

mod nist {
    //! Affine coordinates of SPKI encoded NIST public keys

    use crate::{CurveError, error::Result};

    macro_rules! coordinates {
        ($fn_name:ident, $krate:ident, $label:literal) => {
            pub(super) fn $fn_name(pem: &str) -> Result<(Vec<u8>, Vec<u8>)> {
                use $krate::{
                    PublicKey, elliptic_curve::sec1::ToEncodedPoint, pkcs8::DecodePublicKey,
                };

                let public_key = PublicKey::from_public_key_pem(pem).map_err(|e| {
                    CurveError::InvalidPublicKey(format!(
                        concat!($label, " public key isn't valid: {}"),
                        e
                    ))
                })?;

                // Uncompressed so both coordinates are present
                let ep = public_key.to_encoded_point(false);
                let x = ep.x().ok_or_else(|| {
                    CurveError::InvalidPublicKey("Couldn't get X coordinate".into())
                })?;
                let y = ep.y().ok_or_else(|| {
                    CurveError::InvalidPublicKey("Couldn't get Y coordinate".into())
                })?;

                Ok((x.to_vec(), y.to_vec()))
            }
        };
    }

    coordinates!(p256_coordinates, p256, "P-256");
    coordinates!(p384_coordinates, p384, "P-384");
    coordinates!(p521_coordinates, p521, "P-521");
}
