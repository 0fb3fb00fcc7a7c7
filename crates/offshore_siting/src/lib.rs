#![forbid(unsafe_code)]
//! offshore_siting: Feasibility scoring and synthetic heat-map fields for offshore wind siting.
//!
//! Modules:
//! - site: candidate site records and categorical attributes
//! - scoring: weighted 0-100 feasibility breakdown per site
//! - field: circular grid sweeps producing wind and depth heat-map samples
//! - legend: colour ramps and bands shared by map layers and score bars
//! - catalog: in-memory ranking, lookup and filtered search over sites
//! - litter: marine-litter hotspots for the cleanup variant
pub mod catalog;
pub mod error;
pub mod field;
pub mod legend;
pub mod litter;
pub mod scoring;
pub mod site;

/// Convenient re-exports for common types. Import with `use offshore_siting::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::{SiteCatalog, SiteQuery, SortKey, PRIORITY_PANEL_SIZE};
    pub use crate::error::{Error, Result};
    pub use crate::field::scenario::{
        generate_scenarios_with, MONTH_1_AVERAGE_SCORE, MONTH_2_AVERAGE_SCORE,
        MONTH_3_AVERAGE_SCORE, MONTH_SCENARIOS,
    };
    pub use crate::field::{
        generate_wind_scenarios, neighborhood, DepthFieldGenerator, DepthFieldParams, DepthSample,
        FieldConfig, HashNoise, HeatPoint, MonthPeriod, MonthScenario, NoiseSource, RngNoise,
        WindField, WindFieldGenerator, WindFieldParams, WindRegime, WindSnapshot, WindVector,
    };
    pub use crate::legend::{
        density_color, depth_gradient, depth_ramp, environmental_color, feasibility_color,
        wind_ramp, wind_score, ColorRamp, Gradient, Rgb, ScoreBand,
    };
    pub use crate::litter::{priority_hotspots, Accessibility, Hotspot, PRIORITY_HOTSPOT_COUNT};
    pub use crate::scoring::{
        environmental_score, weights_legend, Factor, FeasibilityBreakdown, FeasibilityScorer,
        LinearRamp, ScoringDefaults,
    };
    pub use crate::site::{Coordinates, FeasibilityClass, ImpactLevel, Site};
}
