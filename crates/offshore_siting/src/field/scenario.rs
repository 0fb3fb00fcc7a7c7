//! Three-month wind scenario batch.
//!
//! Each scenario runs the wind generator with its own multiplier and hash
//! seed. The average scores attached to the snapshots are fixed display values
//! and are not computed from the generated points.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::field::noise::{HashNoise, NoiseSource};
use crate::field::wind::{WindField, WindFieldGenerator};
use crate::site::Site;

pub const MONTH_1_AVERAGE_SCORE: u8 = 68;
pub const MONTH_2_AVERAGE_SCORE: u8 = 72;
pub const MONTH_3_AVERAGE_SCORE: u8 = 75;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    year: i32,
    /// 1-based.
    month: u8,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidConfig(format!(
                "month must be in 1..=12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Shift by a signed number of months. The year saturates at the `i32` range.
    pub fn offset(&self, months: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year = index
            .div_euclid(12)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        Self {
            year: year as i32,
            month: (index.rem_euclid(12) + 1) as u8,
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(usize::from(self.month.wrapping_sub(1)))
            .copied()
            .unwrap_or("Unknown")
    }

    /// `"October 2026"`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// One synthetic month of the batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthScenario {
    pub label: &'static str,
    pub multiplier: f64,
    pub seed: f64,
    pub average_score: u8,
    /// How many months before the reference month this scenario is dated.
    pub months_back: u8,
}

pub const MONTH_SCENARIOS: [MonthScenario; 3] = [
    MonthScenario {
        label: "Month 1",
        multiplier: 0.55,
        seed: 1.0,
        average_score: MONTH_1_AVERAGE_SCORE,
        months_back: 2,
    },
    MonthScenario {
        label: "Month 2",
        multiplier: 0.80,
        seed: 2.0,
        average_score: MONTH_2_AVERAGE_SCORE,
        months_back: 1,
    },
    MonthScenario {
        label: "Month 3",
        multiplier: 1.15,
        seed: 3.0,
        average_score: MONTH_3_AVERAGE_SCORE,
        months_back: 0,
    },
];

/// Generated field for one scenario, ready for a time slider.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WindSnapshot {
    pub label: String,
    pub period: MonthPeriod,
    pub field: WindField,
    pub average_score: u8,
}

impl WindSnapshot {
    pub fn date_label(&self) -> String {
        self.period.label()
    }
}

/// The standard three-month batch dated relative to `reference`.
///
/// Returns an empty batch when `sites` is empty.
pub fn generate_wind_scenarios(
    generator: &WindFieldGenerator,
    sites: &[Site],
    reference: MonthPeriod,
    direction_noise: &mut dyn NoiseSource,
) -> Vec<WindSnapshot> {
    generate_scenarios_with(generator, sites, reference, &MONTH_SCENARIOS, direction_noise)
}

/// Like [`generate_wind_scenarios`] with a caller-supplied scenario list.
pub fn generate_scenarios_with(
    generator: &WindFieldGenerator,
    sites: &[Site],
    reference: MonthPeriod,
    scenarios: &[MonthScenario],
    direction_noise: &mut dyn NoiseSource,
) -> Vec<WindSnapshot> {
    if sites.is_empty() {
        return Vec::new();
    }

    let snapshots: Vec<WindSnapshot> = scenarios
        .iter()
        .map(|s| {
            let mut noise = HashNoise::new(s.seed);
            WindSnapshot {
                label: s.label.to_owned(),
                period: reference.offset(-i32::from(s.months_back)),
                field: generator.generate(sites, s.multiplier, &mut noise, direction_noise),
                average_score: s.average_score,
            }
        })
        .collect();

    info!(
        "Generated {} wind scenarios for {} sites ({} samples each).",
        snapshots.len(),
        sites.len(),
        snapshots.first().map_or(0, |s| s.field.len())
    );
    snapshots
}
