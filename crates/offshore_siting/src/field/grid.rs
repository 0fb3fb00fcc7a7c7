//! Circular grid neighbourhood shared by the field generators.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_RADIUS_DEG: f64 = 2.5;
pub const DEFAULT_STEP_DEG: f64 = 0.25;

/// Upper bound on grid samples per axis, to keep a misconfigured sweep finite.
pub const MAX_STEPS_PER_AXIS: usize = 4096;

/// Size and resolution of the sweep around each site, in degrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    /// Cells farther than this from the site centre are dropped.
    pub radius: f64,
    /// Spacing between grid samples on both axes.
    pub step: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS_DEG,
            step: DEFAULT_STEP_DEG,
        }
    }
}

impl FieldConfig {
    pub fn new(radius: f64, step: f64) -> Self {
        Self { radius, step }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig("radius must be finite and > 0".into()));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidConfig("step must be finite and > 0".into()));
        }
        if self.steps_per_axis() > MAX_STEPS_PER_AXIS {
            return Err(Error::InvalidConfig(format!(
                "radius/step yields {} samples per axis (max {MAX_STEPS_PER_AXIS})",
                self.steps_per_axis()
            )));
        }
        Ok(())
    }

    /// Number of samples along one axis of the square sweep, both edges included.
    pub fn steps_per_axis(&self) -> usize {
        if !(self.radius > 0.0 && self.step > 0.0) {
            return 0;
        }
        let span = 2.0 * self.radius / self.step;
        if !span.is_finite() {
            return usize::MAX;
        }
        // Tolerance keeps the far edge when 2R is a multiple of step.
        (span + 1e-9).floor() as usize + 1
    }
}

/// A grid cell inside a site's circular footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldCell {
    /// Cell position as `(lat, lng)` in degrees.
    pub position: DVec2,
    /// Planar degree distance to the site centre.
    pub distance: f64,
    /// `distance / radius`, in [0, 1].
    pub normalized_distance: f64,
}

impl FieldCell {
    pub fn lat(&self) -> f64 {
        self.position.x
    }

    pub fn lng(&self) -> f64 {
        self.position.y
    }
}

/// Cells of the square sweep around `center` whose distance is within the radius.
///
/// Latitude is the outer loop, longitude the inner one. Positions are derived
/// from integer indices so the sweep does not accumulate rounding error.
pub fn neighborhood(center: DVec2, config: &FieldConfig) -> impl Iterator<Item = FieldCell> + '_ {
    let n = config.steps_per_axis().min(MAX_STEPS_PER_AXIS);
    let radius = config.radius;
    let step = config.step;
    (0..n).flat_map(move |i| {
        (0..n).filter_map(move |j| {
            let offset = DVec2::new(-radius + i as f64 * step, -radius + j as f64 * step);
            let distance = offset.length();
            (distance <= radius).then(|| FieldCell {
                position: center + offset,
                distance,
                normalized_distance: distance / radius,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_has_21_samples_per_axis() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.steps_per_axis(), 21);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn footprint_is_circular_and_includes_axis_extremes() {
        let cfg = FieldConfig::default();
        let center = DVec2::new(54.0, 3.0);
        let cells: Vec<_> = neighborhood(center, &cfg).collect();

        // 441 cells in the square sweep, 317 inside the disc.
        assert_eq!(cells.len(), 317);
        for c in &cells {
            assert!(c.distance <= cfg.radius);
            assert!((0.0..=1.0).contains(&c.normalized_distance));
        }
        assert!(cells.iter().any(|c| c.distance == 0.0));
        assert!(cells
            .iter()
            .any(|c| (c.lat() - 51.5).abs() < 1e-9 && (c.lng() - 3.0).abs() < 1e-9));
        assert!(!cells
            .iter()
            .any(|c| (c.lat() - 51.5).abs() < 1e-9 && (c.lng() - 0.5).abs() < 1e-9));
    }

    #[test]
    fn latitude_is_the_outer_loop() {
        let cfg = FieldConfig::new(1.0, 0.5);
        let cells: Vec<_> = neighborhood(DVec2::ZERO, &cfg).collect();
        let first_lat = cells[0].lat();
        assert_eq!(first_lat, -1.0);
        assert_eq!(cells[0].lng(), 0.0);
        assert!(cells.windows(2).all(|w| w[0].lat() <= w[1].lat()));
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        assert!(FieldConfig::new(0.0, 0.25).validate().is_err());
        assert!(FieldConfig::new(2.5, 0.0).validate().is_err());
        assert!(FieldConfig::new(f64::NAN, 0.25).validate().is_err());
        assert!(FieldConfig::new(1000.0, 1e-6).validate().is_err());
        assert_eq!(FieldConfig::new(2.5, -1.0).steps_per_axis(), 0);
    }

    #[test]
    fn step_larger_than_diameter_leaves_no_cells() {
        let cfg = FieldConfig::new(1.0, 5.0);
        assert_eq!(cfg.steps_per_axis(), 1);
        // Single corner sample at (-1, -1) lies outside the disc.
        assert_eq!(neighborhood(DVec2::ZERO, &cfg).count(), 0);
    }
}
