//! Marine-litter hotspots, the cleanup-planning variant of the dashboard.
//!
//! Hotspots reuse [`ImpactLevel`] for debris density and [`Coordinates`] for
//! location, so the depth field and colour legends apply to them unchanged.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::site::{Coordinates, ImpactLevel};

/// Number of hotspots shown in the cleanup priority panel.
pub const PRIORITY_HOTSPOT_COUNT: usize = 3;

/// How hard a hotspot is to reach for a cleanup crew.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accessibility {
    Easy,
    Moderate,
    Difficult,
}

impl Accessibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessibility::Easy => "easy",
            Accessibility::Moderate => "moderate",
            Accessibility::Difficult => "difficult",
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub density: ImpactLevel,
    pub debris_types: Vec<String>,
    pub accessibility: Accessibility,
    /// 0-100, higher means more urgent.
    pub impact_score: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_survey: Option<String>,
    /// Free text such as "850 kg".
    #[cfg_attr(feature = "serde", serde(default))]
    pub estimated_volume: Option<String>,
}

impl Hotspot {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coordinates,
        density: impl Into<ImpactLevel>,
        impact_score: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            density: density.into(),
            debris_types: Vec::new(),
            accessibility: Accessibility::Moderate,
            impact_score: impact_score.min(100),
            last_survey: None,
            estimated_volume: None,
        }
    }

    pub fn with_debris<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.debris_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_last_survey(mut self, date: impl Into<String>) -> Self {
        self.last_survey = Some(date.into());
        self
    }

    pub fn with_estimated_volume(mut self, volume: impl Into<String>) -> Self {
        self.estimated_volume = Some(volume.into());
        self
    }
}

/// Top `n` hotspots by impact score, highest first. Ties keep input order.
///
/// The input slice is left untouched.
pub fn priority_hotspots(hotspots: &[Hotspot], n: usize) -> Vec<&Hotspot> {
    let mut ranked: Vec<&Hotspot> = hotspots.iter().collect();
    ranked.sort_by(|a, b| b.impact_score.cmp(&a.impact_score));
    ranked.truncate(n);
    ranked
}
