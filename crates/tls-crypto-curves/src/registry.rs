//! Configured set of curves and key agreement curve selection

use tracing::{debug, warn};

use crate::{Curve, CurveError, CurveId, CurvesConfig, error::Result};

/// The curves a configuration allows, in preference order
#[derive(Debug)]
pub struct CurveRegistry {
    config: CurvesConfig,
    curves: Vec<Box<dyn Curve>>,
}

impl CurveRegistry {
    pub fn new(config: CurvesConfig) -> Result<Self> {
        config.validate()?;

        let mut curves = Vec::with_capacity(config.preference.len());
        for curve in &config.preference {
            if config.disabled.contains(curve) {
                debug!(curve = curve.name(), "curve disabled by configuration");
                continue;
            }
            if !curve.is_supported() && !config.include_unsupported {
                warn!(curve = curve.name(), "skipping curve without a provider");
                continue;
            }
            curves.push(curve.curve());
        }

        Ok(CurveRegistry { config, curves })
    }

    pub fn config(&self) -> &CurvesConfig {
        &self.config
    }

    /// Looks up an enabled curve by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Curve> {
        let id = CurveId::try_from(name)?;

        if let Some(curve) = self.find(id) {
            return Ok(curve);
        }

        if self.config.is_enabled(id) {
            Err(CurveError::Unsupported(id.label()))
        } else {
            Err(CurveError::Disabled(id))
        }
    }

    /// Looks up an enabled curve by TLS NamedGroup code point
    pub fn by_named_group(&self, code: u16) -> Option<&dyn Curve> {
        CurveId::from_named_group(code).and_then(|id| self.find(id))
    }

    /// Enabled curves, most preferred first
    pub fn supported(&self) -> Vec<CurveId> {
        self.curves.iter().map(|curve| curve.id()).collect()
    }

    /// Code points for a TLS `supported_groups` extension
    pub fn named_groups(&self) -> Vec<u16> {
        self.curves
            .iter()
            .map(|curve| curve.id().named_group())
            .collect()
    }

    /// Picks the most preferred local curve that the peer also offers
    ///
    /// Unknown peer code points are ignored.
    pub fn select(&self, peer_groups: &[u16]) -> Option<&dyn Curve> {
        let selected = self
            .curves
            .iter()
            .find(|curve| peer_groups.contains(&curve.id().named_group()))
            .map(|curve| &**curve);

        match selected {
            Some(curve) => debug!(curve = curve.name(), "selected key agreement curve"),
            None => debug!(?peer_groups, "no common key agreement curve"),
        }

        selected
    }

    fn find(&self, id: CurveId) -> Option<&dyn Curve> {
        self.curves
            .iter()
            .find(|curve| curve.id() == id)
            .map(|curve| &**curve)
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        let config = CurvesConfig::default();
        let curves = CurveId::ALL
            .into_iter()
            .filter(|curve| curve.is_supported())
            .map(|curve| curve.curve())
            .collect();

        CurveRegistry { config, curves }
    }
}
