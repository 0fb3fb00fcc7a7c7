//! Colour legends shared by map markers, heat layers and score bars.
//!
//! Renderers bucket intensities through a [`ColorRamp`] so the map legend and
//! the drawn layer always agree on breakpoints.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::site::{FeasibilityClass, ImpactLevel};

/// An sRGB colour.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// From a `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Rgb([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(Error::Parse(format!("expected #rrggbb colour, got '{hex}'")));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|e| Error::Parse(format!("invalid colour '{hex}': {e}")))
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Linear blend towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(&self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb([
            mix(self.0[0], other.0[0]),
            mix(self.0[1], other.0[1]),
            mix(self.0[2], other.0[2]),
        ])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Stepped colour scale: the first band whose threshold is at or below the
/// value wins, otherwise the floor colour applies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp {
    /// Sorted by descending threshold.
    bands: Vec<(f64, Rgb)>,
    floor: Rgb,
}

impl ColorRamp {
    pub fn new(floor: Rgb) -> Self {
        Self {
            bands: Vec::new(),
            floor,
        }
    }

    pub fn with_band(mut self, threshold: f64, color: Rgb) -> Self {
        self.bands.push((threshold, color));
        self.bands.sort_by(|a, b| b.0.total_cmp(&a.0));
        self
    }

    pub fn bands(&self) -> &[(f64, Rgb)] {
        &self.bands
    }

    pub fn floor(&self) -> Rgb {
        self.floor
    }

    /// Index of the matching band; `bands().len()` means the floor.
    pub fn bucket(&self, value: f64) -> usize {
        self.bands
            .iter()
            .position(|(threshold, _)| value >= *threshold)
            .unwrap_or(self.bands.len())
    }

    pub fn color_for(&self, value: f64) -> Rgb {
        self.bands
            .get(self.bucket(value))
            .map_or(self.floor, |(_, c)| *c)
    }
}

/// Continuous gradient with linear interpolation between stops.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    /// Sorted by ascending position.
    stops: Vec<(f64, Rgb)>,
}

impl Gradient {
    pub fn new(mut stops: Vec<(f64, Rgb)>) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::InvalidConfig("gradient needs at least one stop".into()));
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[(f64, Rgb)] {
        &self.stops
    }

    pub fn sample(&self, t: f64) -> Rgb {
        let Some(&(first_pos, first)) = self.stops.first() else {
            return Rgb([0, 0, 0]);
        };
        if t.is_nan() || t <= first_pos {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                let local = if span > 0.0 { (t - p0) / span } else { 1.0 };
                return c0.lerp(c1, local);
            }
        }
        self.stops.last().map_or(first, |&(_, c)| c)
    }
}

/// Heat-layer colours for wind intensity.
pub fn wind_ramp() -> ColorRamp {
    ColorRamp::new(Rgb::from_u32(0x6b7280))
        .with_band(0.8, Rgb::from_u32(0xdc2626))
        .with_band(0.65, Rgb::from_u32(0xf59e0b))
        .with_band(0.5, Rgb::from_u32(0xeab308))
        .with_band(0.35, Rgb::from_u32(0x3b82f6))
}

/// Heat-layer colours for depth intensity.
pub fn depth_ramp() -> ColorRamp {
    ColorRamp::new(Rgb::from_u32(0x93c5fd))
        .with_band(0.8, Rgb::from_u32(0x1e3a5f))
        .with_band(0.6, Rgb::from_u32(0x1e4d8c))
        .with_band(0.4, Rgb::from_u32(0x2563eb))
        .with_band(0.2, Rgb::from_u32(0x60a5fa))
}

/// Continuous gradient handed to the depth heat layer.
pub fn depth_gradient() -> Gradient {
    Gradient {
        stops: vec![
            (0.0, Rgb::from_u32(0xdbeafe)),
            (0.2, Rgb::from_u32(0x93c5fd)),
            (0.4, Rgb::from_u32(0x60a5fa)),
            (0.6, Rgb::from_u32(0x2563eb)),
            (0.8, Rgb::from_u32(0x1e40af)),
            (1.0, Rgb::from_u32(0x1e3a5f)),
        ],
    }
}

/// Wind intensity as a 0-100 score.
pub fn wind_score(intensity: f64) -> u8 {
    if intensity.is_nan() {
        return 0;
    }
    (intensity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Colour band for a breakdown bar.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            75.. => ScoreBand::Strong,
            50..=74 => ScoreBand::Fair,
            25..=49 => ScoreBand::Weak,
            _ => ScoreBand::Poor,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            ScoreBand::Strong => Rgb::from_u32(0x22c55e),
            ScoreBand::Fair => Rgb::from_u32(0xeab308),
            ScoreBand::Weak => Rgb::from_u32(0xf97316),
            ScoreBand::Poor => Rgb::from_u32(0xef4444),
        }
    }
}

/// Marker colour for a feasibility class.
pub fn feasibility_color(class: FeasibilityClass) -> Rgb {
    match class {
        FeasibilityClass::Excellent => Rgb::from_u32(0x10b981),
        FeasibilityClass::Good => Rgb::from_u32(0x3b82f6),
        FeasibilityClass::Moderate => Rgb::from_u32(0xf59e0b),
        FeasibilityClass::Challenging => Rgb::from_u32(0xef4444),
    }
}

/// Badge colour for an environmental impact level.
pub fn environmental_color(level: &ImpactLevel) -> Rgb {
    match level {
        ImpactLevel::Low => Rgb::from_u32(0x10b981),
        ImpactLevel::Medium => Rgb::from_u32(0xf59e0b),
        ImpactLevel::High => Rgb::from_u32(0xef4444),
        ImpactLevel::Critical => Rgb::from_u32(0xdc2626),
        ImpactLevel::Unknown(_) => Rgb::from_u32(0x6b7280),
    }
}

/// Marker colour for marine-litter density.
pub fn density_color(level: &ImpactLevel) -> Rgb {
    match level {
        ImpactLevel::Critical => Rgb::from_u32(0xdc2626),
        ImpactLevel::High => Rgb::from_u32(0xea580c),
        ImpactLevel::Medium => Rgb::from_u32(0xeab308),
        ImpactLevel::Low => Rgb::from_u32(0x22c55e),
        ImpactLevel::Unknown(_) => Rgb::from_u32(0x6b7280),
    }
}
