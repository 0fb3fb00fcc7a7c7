//! Injectable noise sources for field generation.
use glam::DVec2;
use rand::RngCore;

/// Produces values in [0, 1) for grid cells.
///
/// Implementations may ignore the cell (stream sources) or derive the value
/// from it (positional hashes).
pub trait NoiseSource {
    fn sample(&mut self, cell: DVec2) -> f64;
}

/// Positional hash noise: `fract(sin(lat * 12.9898 + lng * 78.233 + seed) * 43758.5453)`.
///
/// Stateless, so the same `(cell, seed)` always yields the same value
/// regardless of call order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HashNoise {
    pub seed: f64,
}

impl HashNoise {
    pub const fn new(seed: f64) -> Self {
        Self { seed }
    }

    pub fn value(&self, cell: DVec2) -> f64 {
        let n = (cell.x * 12.9898 + cell.y * 78.233 + self.seed).sin() * 43758.5453;
        let v = n - n.floor();
        if v < 1.0 {
            v
        } else {
            0.0
        }
    }
}

impl NoiseSource for HashNoise {
    fn sample(&mut self, cell: DVec2) -> f64 {
        self.value(cell)
    }
}

/// Adapts any [`RngCore`] into a stream noise source.
///
/// Wrap a seeded `StdRng` for reproducible fields, or an entropy-seeded
/// generator for run-to-run variation.
#[derive(Debug)]
pub struct RngNoise<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> NoiseSource for RngNoise<R> {
    fn sample(&mut self, _cell: DVec2) -> f64 {
        rand01(&mut self.rng)
    }
}

/// Uniform value in [0, 1) from the top 53 bits of a `u64`.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
