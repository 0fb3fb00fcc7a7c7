//! Synthetic sea-depth field around each site.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::field::grid::{neighborhood, FieldConfig};
use crate::field::noise::NoiseSource;
use crate::field::HeatPoint;
use crate::site::Site;

/// Shape parameters for the depth field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthFieldParams {
    /// Full width of the uniform depth jitter, centred on zero.
    pub variation_m: f64,
    /// Extra depth added at the rim of the footprint.
    pub distance_gain_m: f64,
    /// Depths are floored here.
    pub min_depth_m: f64,
    /// Depth that maps to intensity 1.0.
    pub max_depth_m: f64,
    /// Fraction of intensity lost at the rim.
    pub falloff: f64,
}

impl Default for DepthFieldParams {
    fn default() -> Self {
        Self {
            variation_m: 25.0,
            distance_gain_m: 15.0,
            min_depth_m: 20.0,
            max_depth_m: 150.0,
            falloff: 0.3,
        }
    }
}

impl DepthFieldParams {
    pub fn with_variation(mut self, meters: f64) -> Self {
        self.variation_m = meters;
        self
    }

    pub fn with_falloff(mut self, falloff: f64) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_depth_m.is_finite() || self.max_depth_m <= 0.0 {
            return Err(Error::InvalidConfig("max_depth_m must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.falloff) {
            return Err(Error::InvalidConfig("falloff must be in [0, 1]".into()));
        }
        if !self.variation_m.is_finite()
            || !self.distance_gain_m.is_finite()
            || !self.min_depth_m.is_finite()
        {
            return Err(Error::InvalidConfig(
                "depth field parameters must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Depth normalised against `max_depth_m`, capped at 1.0.
    pub fn depth_to_intensity(&self, depth_m: f64) -> f64 {
        (depth_m / self.max_depth_m).clamp(0.0, 1.0)
    }
}

/// One depth sample with its heat-layer intensity.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthSample {
    pub lat: f64,
    pub lng: f64,
    pub depth_m: f64,
    pub intensity: f64,
}

impl From<DepthSample> for HeatPoint {
    fn from(s: DepthSample) -> Self {
        HeatPoint::new(s.lat, s.lng, s.intensity)
    }
}

/// Generates depth samples around each site's recorded water depth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepthFieldGenerator {
    pub config: FieldConfig,
    pub params: DepthFieldParams,
}

impl DepthFieldGenerator {
    pub fn try_new(config: FieldConfig, params: DepthFieldParams) -> Result<Self> {
        config.validate()?;
        params.validate()?;
        Ok(Self { config, params })
    }

    pub fn new(config: FieldConfig, params: DepthFieldParams) -> Self {
        debug_assert!(config.validate().is_ok(), "field config must be valid");
        debug_assert!(params.validate().is_ok(), "depth params must be valid");
        Self { config, params }
    }

    /// Depth samples for every site, in site order then sweep order.
    ///
    /// Sites with invalid coordinates are skipped.
    pub fn generate(&self, sites: &[Site], noise: &mut dyn NoiseSource) -> Vec<DepthSample> {
        let p = &self.params;
        let mut out = Vec::new();
        for site in sites {
            if !site.coordinates.is_valid() {
                warn!(
                    "Site '{}' has invalid coordinates {:?}; skipping depth field.",
                    site.id, site.coordinates
                );
                continue;
            }
            let before = out.len();
            for cell in neighborhood(site.coordinates.as_dvec2(), &self.config) {
                let jitter = (noise.sample(cell.position) - 0.5) * p.variation_m;
                let depth_m = (site.water_depth_m
                    + jitter
                    + cell.normalized_distance * p.distance_gain_m)
                    .max(p.min_depth_m);
                let falloff = 1.0 - cell.normalized_distance * p.falloff;
                out.push(DepthSample {
                    lat: cell.lat(),
                    lng: cell.lng(),
                    depth_m,
                    intensity: p.depth_to_intensity(depth_m) * falloff,
                });
            }
            debug!("Depth field for '{}': {} samples.", site.id, out.len() - before);
        }
        out
    }

    /// Same as [`DepthFieldGenerator::generate`], reduced to heat-layer triples.
    pub fn generate_heat(&self, sites: &[Site], noise: &mut dyn NoiseSource) -> Vec<HeatPoint> {
        self.generate(sites, noise)
            .into_iter()
            .map(HeatPoint::from)
            .collect()
    }
}
