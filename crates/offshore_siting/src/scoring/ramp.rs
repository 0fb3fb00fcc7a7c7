//! Piecewise-linear score ramps.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps a "lower is better" quantity onto 0-100.
///
/// Values at or below `full_at` score 100, values at or above `zero_at` score 0,
/// and everything in between falls off linearly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRamp {
    pub full_at: f64,
    pub zero_at: f64,
}

impl LinearRamp {
    pub const fn new(full_at: f64, zero_at: f64) -> Self {
        Self { full_at, zero_at }
    }

    /// Unrounded score, clamped to [0, 100]. NaN input scores 0.
    pub fn raw(&self, value: f64) -> f64 {
        let span = self.zero_at - self.full_at;
        let score = 100.0 - (value - self.full_at) * 100.0 / span;
        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, 100.0)
    }

    /// Clamped and rounded half-up to an integer score.
    pub fn score(&self, value: f64) -> u8 {
        round_score(self.raw(value))
    }
}

/// Round half-up and clamp into a 0-100 integer score.
#[inline]
pub(crate) fn round_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value + 0.5).floor().clamp(0.0, 100.0) as u8
}
