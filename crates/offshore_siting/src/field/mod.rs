//! Synthetic spatial fields for heat-map layers.
//!
//! Every generator walks the same circular neighbourhood around each site (see
//! [`grid`]) and emits one sample per surviving cell. Samples from different
//! sites are never merged; overlapping contributions are left to the renderer.
//!
//! Randomness is injected through [`NoiseSource`] so callers choose between the
//! seeded hash noise used for wind and any [`rand::RngCore`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod depth;
pub mod grid;
pub mod noise;
pub mod scenario;
pub mod wind;

pub use depth::{DepthFieldGenerator, DepthFieldParams, DepthSample};
pub use grid::{neighborhood, FieldCell, FieldConfig};
pub use noise::{HashNoise, NoiseSource, RngNoise};
pub use scenario::{generate_wind_scenarios, MonthPeriod, MonthScenario, WindSnapshot};
pub use wind::{WindField, WindFieldGenerator, WindFieldParams, WindRegime, WindVector};

/// A single heat-layer sample: position in degrees and intensity in [0, 1].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

impl HeatPoint {
    pub fn new(lat: f64, lng: f64, intensity: f64) -> Self {
        Self {
            lat,
            lng,
            intensity,
        }
    }

    /// `[lat, lng, intensity]` triple as consumed by heat-layer renderers.
    pub fn to_array(&self) -> [f64; 3] {
        [self.lat, self.lng, self.intensity]
    }
}
