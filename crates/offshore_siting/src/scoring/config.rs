//! Fallback values used when a site leaves optional attributes empty.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PORT_DISTANCE_KM: f64 = 100.0;
pub const DEFAULT_GRID_DISTANCE_KM: f64 = 100.0;
pub const DEFAULT_CAPEX_EUR_M_PER_MW: f64 = 4.0;

/// Substitutes for missing optional site attributes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringDefaults {
    /// Used when `distance_to_port_km` is absent.
    pub port_distance_km: f64,
    /// Used when `distance_to_grid_km` is absent.
    pub grid_distance_km: f64,
    /// Used when `capex_eur_m_per_mw` is absent.
    pub capex_eur_m_per_mw: f64,
}

impl Default for ScoringDefaults {
    fn default() -> Self {
        Self {
            port_distance_km: DEFAULT_PORT_DISTANCE_KM,
            grid_distance_km: DEFAULT_GRID_DISTANCE_KM,
            capex_eur_m_per_mw: DEFAULT_CAPEX_EUR_M_PER_MW,
        }
    }
}

impl ScoringDefaults {
    pub fn with_port_distance(mut self, km: f64) -> Self {
        self.port_distance_km = km;
        self
    }

    pub fn with_grid_distance(mut self, km: f64) -> Self {
        self.grid_distance_km = km;
        self
    }

    pub fn with_capex(mut self, eur_m_per_mw: f64) -> Self {
        self.capex_eur_m_per_mw = eur_m_per_mw;
        self
    }

    /// Validates the defaults, returning an error if any is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("port_distance_km", self.port_distance_km),
            ("grid_distance_km", self.grid_distance_km),
            ("capex_eur_m_per_mw", self.capex_eur_m_per_mw),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}
