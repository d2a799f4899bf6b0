//! Curve identifiers, names and TLS code points

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::{Curve, Curve25519, Curve448, CurveError, NistP256, NistP384, NistP521};

/// Known key agreement curves
#[derive(
    Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord, Zeroize,
)]
#[serde(rename_all = "lowercase")]
pub enum CurveId {
    Curve25519,
    Curve448,
    NistP256,
    NistP384,
    NistP521,
}

impl CurveId {
    /// Every curve, in default preference order
    pub const ALL: [CurveId; 5] = [
        CurveId::Curve25519,
        CurveId::NistP256,
        CurveId::NistP384,
        CurveId::NistP521,
        CurveId::Curve448,
    ];

    /// Canonical lowercase curve name
    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Curve25519 => "curve25519",
            CurveId::Curve448 => "curve448",
            CurveId::NistP256 => "nistp256",
            CurveId::NistP384 => "nistp384",
            CurveId::NistP521 => "nistp521",
        }
    }

    /// Human readable label, as used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            CurveId::Curve25519 => "Curve25519",
            CurveId::Curve448 => "Curve448",
            CurveId::NistP256 => "P-256",
            CurveId::NistP384 => "P-384",
            CurveId::NistP521 => "P-521",
        }
    }

    /// Key size in bits
    pub fn key_size(&self) -> u32 {
        match self {
            CurveId::Curve25519 => 256,
            CurveId::Curve448 => 448,
            CurveId::NistP256 => 256,
            CurveId::NistP384 => 384,
            CurveId::NistP521 => 521,
        }
    }

    /// Curve name as known to OpenSSL
    pub fn openssl_name(&self) -> &'static str {
        match self {
            CurveId::Curve25519 => "X25519",
            CurveId::Curve448 => "X448",
            CurveId::NistP256 => "prime256v1",
            CurveId::NistP384 => "secp384r1",
            CurveId::NistP521 => "secp521r1",
        }
    }

    /// `crv` value used in a JWK
    pub fn jwk_curve(&self) -> &'static str {
        match self {
            CurveId::Curve25519 => "X25519",
            CurveId::Curve448 => "X448",
            CurveId::NistP256 => "P-256",
            CurveId::NistP384 => "P-384",
            CurveId::NistP521 => "P-521",
        }
    }

    /// TLS NamedGroup code point (RFC 8446 section 4.2.7)
    pub fn named_group(&self) -> u16 {
        match self {
            CurveId::NistP256 => 0x0017,
            CurveId::NistP384 => 0x0018,
            CurveId::NistP521 => 0x0019,
            CurveId::Curve25519 => 0x001d,
            CurveId::Curve448 => 0x001e,
        }
    }

    /// Maps a TLS NamedGroup code point back to a curve
    pub fn from_named_group(code: u16) -> Option<CurveId> {
        CurveId::ALL
            .into_iter()
            .find(|curve| curve.named_group() == code)
    }

    /// Returns the implementation for this curve
    pub fn curve(&self) -> Box<dyn Curve> {
        match self {
            CurveId::Curve25519 => Box::new(Curve25519),
            CurveId::Curve448 => Box::new(Curve448),
            CurveId::NistP256 => Box::new(NistP256),
            CurveId::NistP384 => Box::new(NistP384),
            CurveId::NistP521 => Box::new(NistP521),
        }
    }

    /// True when a provider backs this curve
    pub fn is_supported(&self) -> bool {
        !matches!(self, CurveId::Curve448)
    }
}

impl TryFrom<&str> for CurveId {
    type Error = CurveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "curve25519" | "x25519" => Ok(CurveId::Curve25519),
            "curve448" | "x448" => Ok(CurveId::Curve448),
            "nistp256" | "p-256" | "p256" | "secp256r1" | "prime256v1" => Ok(CurveId::NistP256),
            "nistp384" | "p-384" | "p384" | "secp384r1" => Ok(CurveId::NistP384),
            "nistp521" | "p-521" | "p521" | "secp521r1" => Ok(CurveId::NistP521),
            _ => Err(CurveError::UnknownCurve(value.to_string())),
        }
    }
}

impl FromStr for CurveId {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveId::try_from(s)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
