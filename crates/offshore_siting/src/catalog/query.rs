//! Search criteria for [`crate::catalog::SiteCatalog::search`].
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::site::{FeasibilityClass, ImpactLevel};

pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Ordering applied to search results.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Highest overall score first.
    #[default]
    OverallScore,
    /// Highest capacity factor first.
    CapacityFactor,
    /// Shallowest first.
    WaterDepth,
    /// Least environmental impact first.
    EnvironmentalImpact,
}

/// Filters, text match, ordering and limit for a catalog search.
///
/// Empty filter lists mean "no restriction".
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct SiteQuery {
    /// Case-insensitive substring matched against name or country.
    pub text: Option<String>,
    pub min_capacity_factor: Option<f64>,
    pub max_water_depth: Option<f64>,
    pub environmental_impact: Vec<ImpactLevel>,
    pub feasibility: Vec<FeasibilityClass>,
    /// Case-insensitive substrings; a site matches if its country contains any.
    pub countries: Vec<String>,
    pub sort_by: SortKey,
    pub limit: usize,
}

impl Default for SiteQuery {
    fn default() -> Self {
        Self {
            text: None,
            min_capacity_factor: None,
            max_water_depth: None,
            environmental_impact: Vec::new(),
            feasibility: Vec::new(),
            countries: Vec::new(),
            sort_by: SortKey::default(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SiteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_min_capacity_factor(mut self, percent: f64) -> Self {
        self.min_capacity_factor = Some(percent);
        self
    }

    pub fn with_max_water_depth(mut self, meters: f64) -> Self {
        self.max_water_depth = Some(meters);
        self
    }

    pub fn with_environmental_impact(mut self, levels: Vec<ImpactLevel>) -> Self {
        self.environmental_impact = levels;
        self
    }

    pub fn with_feasibility(mut self, classes: Vec<FeasibilityClass>) -> Self {
        self.feasibility = classes;
        self
    }

    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
