//! Injectable uniform random source.
//!
//! Particle placement, size, alpha and leg timing all draw from a
//! [`RandomSource`]. Production code wraps a seeded or entropy-seeded
//! `rand` generator in [`RngSource`]; tests feed [`SequenceSource`] a fixed
//! list of unit samples and assert exact placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform real generator.
pub trait RandomSource {
    /// Next sample in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f32;

    /// Uniform real in `[min, max]`. Reversed bounds are swapped.
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.next_unit().mul_add(hi - lo, lo).clamp(lo, hi)
    }

    /// Uniform integer in `[min, max]` (inclusive), returned as `f32`.
    fn uniform_int(&mut self, min: i32, max: i32) -> f32 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let span = (hi - lo + 1) as f32;
        let pick = (self.next_unit() * span).floor() as i32;
        (lo + pick.clamp(0, hi - lo)) as f32
    }
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub const fn new(rng: R) -> Self { Self { rng } }
}

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self { Self::new(StdRng::seed_from_u64(seed)) }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self { Self::new(StdRng::from_entropy()) }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f32 { self.rng.r#gen::<f32>() }
}

/// Replays a fixed list of unit samples, cycling when exhausted.
///
/// An empty list always yields `0.0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(samples: impl Into<Vec<f32>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Number of samples handed out so far.
    pub const fn drawn(&self) -> usize { self.cursor }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        // Keep the [0, 1) contract even if a test passes 1.0
        sample.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
