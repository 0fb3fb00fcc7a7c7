//! Feasibility scoring for candidate sites.
//!
//! [`FeasibilityScorer::score`] turns a [`Site`] into a [`FeasibilityBreakdown`]:
//! five 0-100 sub-scores combined with the fixed weights in [`Factor::weight`].
//! Scoring is total. Missing optional attributes use [`ScoringDefaults`] and
//! unknown environmental levels score neutrally.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::site::{ImpactLevel, Site};

pub mod config;
pub mod ramp;

pub use config::ScoringDefaults;
pub use ramp::LinearRamp;

use ramp::round_score;

pub const DEPTH_RAMP: LinearRamp = LinearRamp::new(30.0, 150.0);
pub const PORT_DISTANCE_RAMP: LinearRamp = LinearRamp::new(20.0, 200.0);
pub const GRID_DISTANCE_RAMP: LinearRamp = LinearRamp::new(20.0, 200.0);
pub const CAPEX_RAMP: LinearRamp = LinearRamp::new(3.0, 5.0);

/// Score given to environmental levels outside low/medium/high/critical.
pub const NEUTRAL_ENVIRONMENTAL_SCORE: u8 = 50;

/// One of the five weighted inputs to the feasibility total.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Factor {
    Depth,
    PortDistance,
    GridDistance,
    Capex,
    Environmental,
}

impl Factor {
    pub const ALL: [Factor; 5] = [
        Factor::Depth,
        Factor::PortDistance,
        Factor::GridDistance,
        Factor::Capex,
        Factor::Environmental,
    ];

    pub const fn weight(self) -> f64 {
        match self {
            Factor::Depth => 0.25,
            Factor::PortDistance => 0.20,
            Factor::GridDistance => 0.20,
            Factor::Capex => 0.15,
            Factor::Environmental => 0.20,
        }
    }

    /// Weight as a whole percentage, as displayed next to the score.
    pub const fn weight_percent(self) -> u8 {
        match self {
            Factor::Depth => 25,
            Factor::PortDistance => 20,
            Factor::GridDistance => 20,
            Factor::Capex => 15,
            Factor::Environmental => 20,
        }
    }

    /// Label used on breakdown bars.
    pub const fn label(self) -> &'static str {
        match self {
            Factor::Depth => "Depth",
            Factor::PortDistance => "Port Dist",
            Factor::GridDistance => "Grid Dist",
            Factor::Capex => "CAPEX",
            Factor::Environmental => "Environ.",
        }
    }

    /// Short name used in the weights legend.
    pub const fn legend_name(self) -> &'static str {
        match self {
            Factor::Depth => "Depth",
            Factor::PortDistance => "Port",
            Factor::GridDistance => "Grid",
            Factor::Capex => "CAPEX",
            Factor::Environmental => "Env",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `"Weights: Depth 25%, Port 20%, Grid 20%, CAPEX 15%, Env 20%"`
pub fn weights_legend() -> String {
    let parts: Vec<String> = Factor::ALL
        .iter()
        .map(|f| format!("{} {}%", f.legend_name(), f.weight_percent()))
        .collect();
    format!("Weights: {}", parts.join(", "))
}

/// Environmental sub-score for an impact level.
pub fn environmental_score(level: &ImpactLevel) -> u8 {
    match level {
        ImpactLevel::Low => 100,
        ImpactLevel::Medium => 66,
        ImpactLevel::High => 33,
        ImpactLevel::Critical => 0,
        ImpactLevel::Unknown(_) => NEUTRAL_ENVIRONMENTAL_SCORE,
    }
}

/// Per-factor sub-scores and their weighted total, all in [0, 100].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeasibilityBreakdown {
    pub depth_score: u8,
    pub port_distance_score: u8,
    pub grid_distance_score: u8,
    pub capex_score: u8,
    pub environmental_score: u8,
    pub total: u8,
}

impl FeasibilityBreakdown {
    /// Combine already rounded sub-scores into a breakdown with its weighted total.
    pub fn from_sub_scores(depth: u8, port: u8, grid: u8, capex: u8, environmental: u8) -> Self {
        let depth = depth.min(100);
        let port = port.min(100);
        let grid = grid.min(100);
        let capex = capex.min(100);
        let environmental = environmental.min(100);
        let weighted = f64::from(depth) * Factor::Depth.weight()
            + f64::from(port) * Factor::PortDistance.weight()
            + f64::from(grid) * Factor::GridDistance.weight()
            + f64::from(capex) * Factor::Capex.weight()
            + f64::from(environmental) * Factor::Environmental.weight();
        Self {
            depth_score: depth,
            port_distance_score: port,
            grid_distance_score: grid,
            capex_score: capex,
            environmental_score: environmental,
            total: round_score(weighted),
        }
    }

    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::Depth => self.depth_score,
            Factor::PortDistance => self.port_distance_score,
            Factor::GridDistance => self.grid_distance_score,
            Factor::Capex => self.capex_score,
            Factor::Environmental => self.environmental_score,
        }
    }

    /// Sub-scores in display order.
    pub fn factors(&self) -> impl Iterator<Item = (Factor, u8)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Stateless scorer carrying the fallbacks for missing attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeasibilityScorer {
    pub defaults: ScoringDefaults,
}

impl FeasibilityScorer {
    pub fn new(defaults: ScoringDefaults) -> Self {
        debug_assert!(defaults.validate().is_ok(), "scoring defaults must be valid");
        Self { defaults }
    }

    pub fn try_new(defaults: ScoringDefaults) -> Result<Self> {
        defaults.validate()?;
        Ok(Self { defaults })
    }

    pub fn score(&self, site: &Site) -> FeasibilityBreakdown {
        let port_km = site
            .distance_to_port_km
            .unwrap_or(self.defaults.port_distance_km);
        let grid_km = site
            .distance_to_grid_km
            .unwrap_or(self.defaults.grid_distance_km);
        let capex = site
            .capex_eur_m_per_mw
            .unwrap_or(self.defaults.capex_eur_m_per_mw);

        FeasibilityBreakdown::from_sub_scores(
            DEPTH_RAMP.score(site.water_depth_m),
            PORT_DISTANCE_RAMP.score(port_km),
            GRID_DISTANCE_RAMP.score(grid_km),
            CAPEX_RAMP.score(capex),
            environmental_score(&site.environmental_impact),
        )
    }

    /// Score every site, preserving input order.
    pub fn score_all(&self, sites: &[Site]) -> Vec<FeasibilityBreakdown> {
        sites.iter().map(|s| self.score(s)).collect()
    }
}
