//! Error types for curve operations

use thiserror::Error;

use crate::CurveId;

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Invalid {curve} private key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        curve: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{0} key pair generation failed: {1}")]
    KeyGeneration(&'static str, String),

    #[error("{0} public key derivation failed: {1}")]
    KeyDerivation(&'static str, String),

    #[error("Failed to load EC private key: {0}")]
    KeyLoad(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("{0} is not supported by any available provider")]
    Unsupported(&'static str),

    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    #[error("Curve {0} is disabled by configuration")]
    Disabled(CurveId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_names_curve() {
        let err = CurveError::InvalidKeyLength {
            curve: "Curve25519",
            expected: 32,
            actual: 31,
        };
        assert_eq!(
            err.to_string(),
            "Invalid Curve25519 private key length: expected 32 bytes, got 31"
        );
    }

    #[test]
    fn provider_failures_name_curve() {
        let err = CurveError::KeyGeneration("P-384", "private key export: boom".into());
        assert_eq!(
            err.to_string(),
            "P-384 key pair generation failed: private key export: boom"
        );

        let err = CurveError::KeyDerivation("P-521", "public key export: boom".into());
        assert_eq!(
            err.to_string(),
            "P-521 public key derivation failed: public key export: boom"
        );
    }

    #[test]
    fn public_key_errors_are_not_private_key_errors() {
        let err = CurveError::InvalidPublicKey("X25519 public key must be 32 bytes".into());
        assert!(!err.to_string().contains("private key"));
    }

    #[test]
    fn unsupported_names_curve() {
        let err = CurveError::Unsupported("Curve448");
        assert!(err.to_string().contains("Curve448"));
    }

    #[test]
    fn json_errors_convert() {
        let err: CurveError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, CurveError::Json(_)));
    }
}
