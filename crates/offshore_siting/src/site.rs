//! Candidate site records and their categorical attributes.
//!
//! A [`Site`] is the single input shape shared by the scorer, the field
//! generators and the catalog. Optional numeric attributes stay optional here;
//! the scorer substitutes [`crate::scoring::ScoringDefaults`] when they are absent.
use std::fmt;

use glam::DVec2;
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scoring::FeasibilityScorer;

/// Latitude/longitude pair in decimal degrees.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "(f64, f64)", into = "(f64, f64)")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside the usual latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Degree-space vector `(lat, lng)` used by the field generators.
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.lat, self.lng)
    }

    /// Planar distance in degrees. Not geodesic.
    pub fn degree_distance(&self, other: Coordinates) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for (f64, f64) {
    fn from(value: Coordinates) -> Self {
        (value.lat, value.lng)
    }
}

impl From<Vector2<f64>> for Coordinates {
    fn from(value: Vector2<f64>) -> Self {
        Self {
            lat: value.x,
            lng: value.y,
        }
    }
}

impl From<Coordinates> for Vector2<f64> {
    fn from(value: Coordinates) -> Self {
        Vector2 {
            x: value.lat,
            y: value.lng,
        }
    }
}

/// Ordered severity used for environmental impact, migration risks and
/// litter density.
///
/// Any string outside the four known levels is kept verbatim in
/// [`ImpactLevel::Unknown`] instead of being rejected.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
    Unknown(String),
}

impl ImpactLevel {
    /// Exact match on the lowercase names; never fails. Any other spelling,
    /// including other casings or padding, is kept as [`ImpactLevel::Unknown`].
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => ImpactLevel::Low,
            "medium" => ImpactLevel::Medium,
            "high" => ImpactLevel::High,
            "critical" => ImpactLevel::Critical,
            _ => ImpactLevel::Unknown(value.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
            ImpactLevel::Critical => "critical",
            ImpactLevel::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ImpactLevel::Unknown(_))
    }
}

impl Default for ImpactLevel {
    fn default() -> Self {
        ImpactLevel::Unknown(String::new())
    }
}

impl From<&str> for ImpactLevel {
    fn from(value: &str) -> Self {
        ImpactLevel::parse(value)
    }
}

impl From<String> for ImpactLevel {
    fn from(value: String) -> Self {
        ImpactLevel::parse(&value)
    }
}

impl From<ImpactLevel> for String {
    fn from(value: ImpactLevel) -> Self {
        match value {
            ImpactLevel::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse suitability bucket shown as a badge next to each site.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeasibilityClass {
    Excellent,
    Good,
    Moderate,
    Challenging,
}

impl FeasibilityClass {
    pub const EXCELLENT_MIN: u8 = 80;
    pub const GOOD_MIN: u8 = 65;
    pub const MODERATE_MIN: u8 = 50;

    /// Bucket a 0-100 feasibility total.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::EXCELLENT_MIN {
            FeasibilityClass::Excellent
        } else if score >= Self::GOOD_MIN {
            FeasibilityClass::Good
        } else if score >= Self::MODERATE_MIN {
            FeasibilityClass::Moderate
        } else {
            FeasibilityClass::Challenging
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeasibilityClass::Excellent => "excellent",
            FeasibilityClass::Good => "good",
            FeasibilityClass::Moderate => "moderate",
            FeasibilityClass::Challenging => "challenging",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "excellent" => Some(FeasibilityClass::Excellent),
            "good" => Some(FeasibilityClass::Good),
            "moderate" => Some(FeasibilityClass::Moderate),
            "challenging" => Some(FeasibilityClass::Challenging),
            _ => None,
        }
    }
}

impl fmt::Display for FeasibilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate offshore wind location.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub country: String,
    pub coordinates: Coordinates,
    /// Water depth in meters.
    #[cfg_attr(feature = "serde", serde(rename = "water_depth"))]
    pub water_depth_m: f64,
    /// Expected share of nameplate output, in percent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity_factor: f64,
    /// Capital expenditure in million EUR per installed MW.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capex_eur_m_per_mw: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_to_port_km: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub distance_to_grid_km: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub environmental_impact: ImpactLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bird_migration_risk: ImpactLevel,
    #[cfg_attr(feature = "serde", serde(default))]
    pub whale_migration_risk: ImpactLevel,
    #[cfg_attr(feature = "serde", serde(default, rename = "sea_floor_impact"))]
    pub seafloor_impact: ImpactLevel,
    /// Stored overall score; the field generators fall back to the scorer when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overall_score: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub feasibility: Option<FeasibilityClass>,
    /// Free text such as "1200 MW".
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_capacity: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_assessment: Option<String>,
}

impl Site {
    /// Create a site with the required identity and location. Every other
    /// attribute starts empty or unknown.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: String::new(),
            coordinates,
            water_depth_m: 0.0,
            capacity_factor: 0.0,
            capex_eur_m_per_mw: None,
            distance_to_port_km: None,
            distance_to_grid_km: None,
            environmental_impact: ImpactLevel::default(),
            bird_migration_risk: ImpactLevel::default(),
            whale_migration_risk: ImpactLevel::default(),
            seafloor_impact: ImpactLevel::default(),
            overall_score: None,
            feasibility: None,
            estimated_capacity: None,
            last_assessment: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_water_depth(mut self, meters: f64) -> Self {
        self.water_depth_m = meters;
        self
    }

    pub fn with_capacity_factor(mut self, percent: f64) -> Self {
        self.capacity_factor = percent;
        self
    }

    pub fn with_capex(mut self, eur_m_per_mw: f64) -> Self {
        self.capex_eur_m_per_mw = Some(eur_m_per_mw);
        self
    }

    pub fn with_port_distance(mut self, km: f64) -> Self {
        self.distance_to_port_km = Some(km);
        self
    }

    pub fn with_grid_distance(mut self, km: f64) -> Self {
        self.distance_to_grid_km = Some(km);
        self
    }

    pub fn with_environmental_impact(mut self, level: impl Into<ImpactLevel>) -> Self {
        self.environmental_impact = level.into();
        self
    }

    /// Set bird, whale and seafloor risks in one go.
    pub fn with_ecology_risks(
        mut self,
        bird: impl Into<ImpactLevel>,
        whale: impl Into<ImpactLevel>,
        seafloor: impl Into<ImpactLevel>,
    ) -> Self {
        self.bird_migration_risk = bird.into();
        self.whale_migration_risk = whale.into();
        self.seafloor_impact = seafloor.into();
        self
    }

    pub fn with_overall_score(mut self, score: u8) -> Self {
        self.overall_score = Some(score.min(100));
        self
    }

    pub fn with_feasibility(mut self, class: FeasibilityClass) -> Self {
        self.feasibility = Some(class);
        self
    }

    pub fn with_estimated_capacity(mut self, capacity: impl Into<String>) -> Self {
        self.estimated_capacity = Some(capacity.into());
        self
    }

    pub fn with_last_assessment(mut self, date: impl Into<String>) -> Self {
        self.last_assessment = Some(date.into());
        self
    }

    /// Stored overall score, or the scorer's total when none was stored.
    pub fn effective_score(&self, scorer: &FeasibilityScorer) -> u8 {
        self.overall_score
            .unwrap_or_else(|| scorer.score(self).total)
    }

    /// Stored feasibility class, or the bucket of [`Site::effective_score`].
    pub fn feasibility_class(&self, scorer: &FeasibilityScorer) -> FeasibilityClass {
        self.feasibility
            .unwrap_or_else(|| FeasibilityClass::from_score(self.effective_score(scorer)))
    }
}
