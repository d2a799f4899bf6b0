/*!
 * Curve selection configuration
 */

use serde::{Deserialize, Serialize};

use crate::{CurveError, CurveId, error::Result};

/// Which curves are offered, and in what order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvesConfig {
    /// Curves in local preference order, most preferred first
    pub preference: Vec<CurveId>,

    /// Curves that must never be used, even when listed in `preference`
    pub disabled: Vec<CurveId>,

    /// Keep curves without a provider (Curve448) in the supported list
    pub include_unsupported: bool,
}

impl Default for CurvesConfig {
    fn default() -> Self {
        CurvesConfig {
            preference: CurveId::ALL.to_vec(),
            disabled: Vec::new(),
            include_unsupported: false,
        }
    }
}

impl CurvesConfig {
    /// Returns a builder for `CurvesConfig`
    /// Example:
    /// ```
    /// use tls_crypto_curves::CurvesConfig;
    ///
    /// let config = CurvesConfig::builder().build().unwrap();
    /// ```
    pub fn builder() -> CurvesConfigBuilder {
        CurvesConfigBuilder::default()
    }

    /// Loads a configuration from JSON, missing fields take their defaults
    /// Example:
    /// ```
    /// use tls_crypto_curves::{CurveId, CurvesConfig};
    ///
    /// let config = CurvesConfig::from_json(r#"{"preference": ["nistp256", "curve25519"]}"#).unwrap();
    /// assert_eq!(config.preference[0], CurveId::NistP256);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CurvesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the preference list is non-empty and has no duplicates
    pub fn validate(&self) -> Result<()> {
        if self.preference.is_empty() {
            return Err(CurveError::Config("curve preference list is empty".into()));
        }

        for (i, curve) in self.preference.iter().enumerate() {
            if self.preference[..i].contains(curve) {
                return Err(CurveError::Config(format!(
                    "curve {curve} is listed more than once"
                )));
            }
        }

        Ok(())
    }

    /// True when `curve` is listed and not disabled
    pub fn is_enabled(&self, curve: CurveId) -> bool {
        self.preference.contains(&curve) && !self.disabled.contains(&curve)
    }
}

/// Builder for `CurvesConfig`.
/// Example:
/// ```
/// use tls_crypto_curves::{CurveId, CurvesConfig};
///
/// let config = CurvesConfig::builder()
///     .with_preference(vec![CurveId::NistP384, CurveId::Curve25519])
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct CurvesConfigBuilder {
    /// Preference order
    /// Default: x25519, P-256, P-384, P-521, x448
    preference: Option<Vec<CurveId>>,

    /// Curves removed from the preference list
    disabled: Vec<CurveId>,

    /// Default: false
    include_unsupported: bool,
}

impl CurvesConfigBuilder {
    /// Default starting constructor for `CurvesConfigBuilder`
    pub fn new() -> CurvesConfigBuilder {
        CurvesConfigBuilder::default()
    }

    /// Build the `CurvesConfig` from the builder
    pub fn build(self) -> Result<CurvesConfig> {
        let config = CurvesConfig {
            preference: self.preference.unwrap_or_else(|| CurveId::ALL.to_vec()),
            disabled: self.disabled,
            include_unsupported: self.include_unsupported,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the default preference order
    pub fn with_preference(mut self, preference: Vec<CurveId>) -> Self {
        self.preference = Some(preference);
        self
    }

    /// Never use `curve`
    pub fn disable(mut self, curve: CurveId) -> Self {
        if !self.disabled.contains(&curve) {
            self.disabled.push(curve);
        }
        self
    }

    /// Keep curves without a provider in the supported list
    pub fn with_unsupported(mut self, include: bool) -> Self {
        self.include_unsupported = include;
        self
    }
}
