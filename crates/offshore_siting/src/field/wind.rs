//! Synthetic wind-intensity field with decorative direction and speed.
//!
//! Intensity scales with the site's overall score, fades linearly to the rim
//! of the footprint, and is modulated by seeded noise and a scenario
//! multiplier. Direction comes from coarse regional bands ([`WindRegime`]);
//! it is presentation data, not a physical wind model.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::field::grid::{neighborhood, FieldConfig};
use crate::field::noise::NoiseSource;
use crate::field::HeatPoint;
use crate::scoring::FeasibilityScorer;
use crate::site::Site;

/// Coarse regional band that sets the base compass direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindRegime {
    NorthSea,
    NorthernNorthSea,
    Atlantic,
    Baltic,
    Mediterranean,
    PrevailingWesterly,
}

impl WindRegime {
    /// First matching band wins.
    pub fn classify(lat: f64, lng: f64) -> Self {
        if (53.0..=58.0).contains(&lat) && (-2.0..=8.0).contains(&lng) {
            WindRegime::NorthSea
        } else if lat >= 58.0 && (0.0..=8.0).contains(&lng) {
            WindRegime::NorthernNorthSea
        } else if (-10.0..=-2.0).contains(&lng) {
            WindRegime::Atlantic
        } else if (10.0..=20.0).contains(&lng) {
            WindRegime::Baltic
        } else if (42.0..=45.0).contains(&lat) {
            WindRegime::Mediterranean
        } else {
            WindRegime::PrevailingWesterly
        }
    }

    /// `(base, span)` in degrees; direction is `base + jitter * span`.
    pub const fn direction_range(self) -> (f64, f64) {
        match self {
            WindRegime::NorthSea => (45.0, 30.0),
            WindRegime::NorthernNorthSea => (30.0, 40.0),
            WindRegime::Atlantic => (80.0, 40.0),
            WindRegime::Baltic => (180.0, 90.0),
            WindRegime::Mediterranean => (0.0, 360.0),
            WindRegime::PrevailingWesterly => (90.0, 0.0),
        }
    }

    /// Compass direction in [0, 360) for a jitter value in [0, 1).
    pub fn direction(self, jitter: f64) -> f64 {
        let (base, span) = self.direction_range();
        (base + jitter * span).rem_euclid(360.0)
    }
}

/// A wind sample carrying heat intensity plus direction and speed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindVector {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
    /// Compass degrees, [0, 360).
    pub direction_deg: f64,
    pub speed: f64,
}

/// Heat points and wind vectors for one generation pass, index-aligned.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindField {
    pub points: Vec<HeatPoint>,
    pub vectors: Vec<WindVector>,
}

impl WindField {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean intensity of all points, or `None` when empty.
    pub fn mean_intensity(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().map(|p| p.intensity).sum::<f64>() / self.points.len() as f64)
    }
}

/// Shape parameters for the wind field.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindFieldParams {
    /// Noise-free share of the site strength.
    pub base_strength: f64,
    /// Scale applied to the [0, 1) noise before adding it to `base_strength`.
    pub variation: f64,
    pub min_intensity: f64,
    pub max_intensity: f64,
    /// `speed = intensity * speed_gain + speed_floor`
    pub speed_gain: f64,
    pub speed_floor: f64,
}

impl Default for WindFieldParams {
    fn default() -> Self {
        Self {
            base_strength: 0.6,
            variation: 0.2,
            min_intensity: 0.1,
            max_intensity: 1.0,
            speed_gain: 15.0,
            speed_floor: 3.0,
        }
    }
}

impl WindFieldParams {
    pub fn with_intensity_range(mut self, min: f64, max: f64) -> Self {
        self.min_intensity = min;
        self.max_intensity = max;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            self.base_strength,
            self.variation,
            self.min_intensity,
            self.max_intensity,
            self.speed_gain,
            self.speed_floor,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfig(
                "wind field parameters must be finite".into(),
            ));
        }
        if !(0.0 <= self.min_intensity
            && self.min_intensity <= self.max_intensity
            && self.max_intensity <= 1.0)
        {
            return Err(Error::InvalidConfig(
                "intensity range must satisfy 0 <= min <= max <= 1".into(),
            ));
        }
        Ok(())
    }

    fn clamp_intensity(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min_intensity;
        }
        value.max(self.min_intensity).min(self.max_intensity)
    }
}

/// Generates wind samples around each site.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindFieldGenerator {
    pub config: FieldConfig,
    pub params: WindFieldParams,
    /// Supplies the overall score for sites that have none stored.
    pub scorer: FeasibilityScorer,
}

impl WindFieldGenerator {
    pub fn try_new(config: FieldConfig, params: WindFieldParams) -> Result<Self> {
        config.validate()?;
        params.validate()?;
        Ok(Self {
            config,
            params,
            scorer: FeasibilityScorer::default(),
        })
    }

    pub fn new(config: FieldConfig, params: WindFieldParams) -> Self {
        debug_assert!(config.validate().is_ok(), "field config must be valid");
        debug_assert!(params.validate().is_ok(), "wind params must be valid");
        Self {
            config,
            params,
            scorer: FeasibilityScorer::default(),
        }
    }

    pub fn with_scorer(mut self, scorer: FeasibilityScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Clamped intensity at `cell` for a site of the given strength (score / 100).
    pub fn intensity_at(
        &self,
        strength: f64,
        normalized_distance: f64,
        noise: f64,
        multiplier: f64,
    ) -> f64 {
        let p = &self.params;
        let raw = strength
            * (1.0 - normalized_distance)
            * (p.base_strength + noise * p.variation)
            * multiplier;
        p.clamp_intensity(raw)
    }

    /// Wind field for all sites.
    ///
    /// `intensity_noise` feeds the per-cell intensity variation and
    /// `direction_noise` the per-cell direction jitter. Sites with invalid
    /// coordinates are skipped.
    pub fn generate(
        &self,
        sites: &[Site],
        multiplier: f64,
        intensity_noise: &mut dyn NoiseSource,
        direction_noise: &mut dyn NoiseSource,
    ) -> WindField {
        let mut field = WindField::default();
        for site in sites {
            if !site.coordinates.is_valid() {
                warn!(
                    "Site '{}' has invalid coordinates {:?}; skipping wind field.",
                    site.id, site.coordinates
                );
                continue;
            }
            let strength = f64::from(site.effective_score(&self.scorer)) / 100.0;
            let before = field.len();
            for cell in neighborhood(site.coordinates.as_dvec2(), &self.config) {
                let intensity = self.intensity_at(
                    strength,
                    cell.normalized_distance,
                    intensity_noise.sample(cell.position),
                    multiplier,
                );
                field.points.push(HeatPoint::new(cell.lat(), cell.lng(), intensity));
                field
                    .vectors
                    .push(self.vector_at(cell.position, intensity, direction_noise));
            }
            debug!("Wind field for '{}': {} samples.", site.id, field.len() - before);
        }
        field
    }

    fn vector_at(
        &self,
        position: DVec2,
        intensity: f64,
        direction_noise: &mut dyn NoiseSource,
    ) -> WindVector {
        let regime = WindRegime::classify(position.x, position.y);
        WindVector {
            lat: position.x,
            lng: position.y,
            intensity,
            direction_deg: regime.direction(direction_noise.sample(position)),
            speed: intensity * self.params.speed_gain + self.params.speed_floor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::noise::HashNoise;
    use crate::site::Coordinates;

    struct ConstNoise(f64);

    impl NoiseSource for ConstNoise {
        fn sample(&mut self, _cell: DVec2) -> f64 {
            self.0
        }
    }

    fn site(lat: f64, lng: f64, score: u8) -> Site {
        Site::new("w", "Windy", Coordinates::new(lat, lng)).with_overall_score(score)
    }

    #[test]
    fn regimes_follow_band_order() {
        assert_eq!(WindRegime::classify(55.0, 3.0), WindRegime::NorthSea);
        assert_eq!(WindRegime::classify(58.0, 3.0), WindRegime::NorthSea);
        assert_eq!(WindRegime::classify(60.0, 5.0), WindRegime::NorthernNorthSea);
        assert_eq!(WindRegime::classify(50.0, -5.0), WindRegime::Atlantic);
        assert_eq!(WindRegime::classify(55.0, 15.0), WindRegime::Baltic);
        assert_eq!(WindRegime::classify(43.0, 5.0), WindRegime::Mediterranean);
        assert_eq!(WindRegime::classify(43.0, 15.0), WindRegime::Baltic);
        assert_eq!(WindRegime::classify(30.0, 30.0), WindRegime::PrevailingWesterly);
    }

    #[test]
    fn directions_stay_on_the_compass() {
        assert_eq!(WindRegime::NorthSea.direction(0.0), 45.0);
        assert_eq!(WindRegime::NorthSea.direction(0.5), 60.0);
        assert_eq!(WindRegime::PrevailingWesterly.direction(0.9), 90.0);
        for j in [0.0, 0.25, 0.5, 0.999_999] {
            for r in [
                WindRegime::Baltic,
                WindRegime::Mediterranean,
                WindRegime::Atlantic,
            ] {
                let d = r.direction(j);
                assert!((0.0..360.0).contains(&d), "{r:?} {j} -> {d}");
            }
        }
    }

    #[test]
    fn empty_sites_yield_empty_field() {
        let generator = WindFieldGenerator::default();
        let field = generator.generate(&[], 1.0, &mut HashNoise::new(1.0), &mut ConstNoise(0.0));
        assert!(field.is_empty());
        assert_eq!(field.mean_intensity(), None);
    }

    #[test]
    fn intensity_formula_and_clamp() {
        let generator = WindFieldGenerator::default();
        // 0.8 * 1.0 * (0.6 + 0.5 * 0.2) * 1.0
        assert!((generator.intensity_at(0.8, 0.0, 0.5, 1.0) - 0.56).abs() < 1e-12);
        assert_eq!(generator.intensity_at(1.0, 0.0, 0.99, 5.0), 1.0);
        assert_eq!(generator.intensity_at(1.0, 1.0, 0.5, 1.0), 0.1);
        assert_eq!(generator.intensity_at(0.0, 0.0, 0.5, 1.0), 0.1);
        assert_eq!(generator.intensity_at(1.0, 0.0, 0.5, f64::NAN), 0.1);
    }

    #[test]
    fn points_and_vectors_are_aligned() {
        let generator = WindFieldGenerator::default();
        let field = generator.generate(
            &[site(55.0, 3.0, 90), site(43.0, 5.0, 60)],
            0.8,
            &mut HashNoise::new(2.0),
            &mut ConstNoise(0.5),
        );
        assert_eq!(field.points.len(), 2 * 317);
        assert_eq!(field.points.len(), field.vectors.len());
        for (p, v) in field.points.iter().zip(&field.vectors) {
            assert_eq!((p.lat, p.lng, p.intensity), (v.lat, v.lng, v.intensity));
            assert!((0.1..=1.0).contains(&p.intensity));
            assert!((v.speed - (v.intensity * 15.0 + 3.0)).abs() < 1e-12);
            assert!((0.0..360.0).contains(&v.direction_deg));
        }
    }

    #[test]
    fn seeded_noise_is_bit_identical_across_runs() {
        let generator = WindFieldGenerator::default();
        let sites = vec![site(54.5, 2.0, 85), site(57.0, 7.5, 70)];
        let a = generator.generate(&sites, 1.15, &mut HashNoise::new(3.0), &mut ConstNoise(0.1));
        let b = generator.generate(&sites, 1.15, &mut HashNoise::new(3.0), &mut ConstNoise(0.1));
        assert_eq!(a.points.len(), b.points.len());
        for (x, y) in a.points.iter().zip(&b.points) {
            assert_eq!(x.intensity.to_bits(), y.intensity.to_bits());
        }
    }

    #[test]
    fn points_never_leave_the_radius() {
        let generator = WindFieldGenerator::default();
        let s = site(52.0, -4.0, 75);
        let centre = s.coordinates;
        let field = generator.generate(&[s], 1.0, &mut HashNoise::new(1.0), &mut ConstNoise(0.0));
        for p in &field.points {
            let d = centre.degree_distance(Coordinates::new(p.lat, p.lng));
            assert!(d <= generator.config.radius + 1e-9);
        }
    }

    #[test]
    fn missing_overall_score_falls_back_to_scorer() {
        let generator = WindFieldGenerator::default();
        let unscored = Site::new("u", "Unscored", Coordinates::new(55.0, 3.0))
            .with_water_depth(150.0)
            .with_port_distance(200.0)
            .with_grid_distance(200.0)
            .with_capex(5.0)
            .with_environmental_impact("critical");
        let field = generator.generate(
            &[unscored],
            1.15,
            &mut HashNoise::new(1.0),
            &mut ConstNoise(0.0),
        );
        // Total 0 pins every point to the floor.
        assert!(field.points.iter().all(|p| p.intensity == 0.1));
    }

    #[test]
    fn params_validation() {
        assert!(WindFieldParams::default().validate().is_ok());
        assert!(WindFieldParams::default()
            .with_intensity_range(0.5, 0.2)
            .validate()
            .is_err());
        assert!(WindFieldGenerator::try_new(
            FieldConfig::default(),
            WindFieldParams::default().with_intensity_range(0.0, 1.5)
        )
        .is_err());
    }
}
