//! Deterministic, substream-capable RNG shared by the sampler and the three
//! derivation modules.
//!
//! Grounded in the same `ChaCha8Rng::seed_from_u64` pattern the noise-injection
//! side of this codebase already uses for reproducible canvas noise: a named,
//! portable algorithm is enough to satisfy determinism, and reusing it avoids
//! pulling in an unrelated PRNG crate just for the sampler.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded uniform generator with helpers for categorical and Gaussian draws.
///
/// Two `SeededRng`s constructed from the same seed and advanced through the
/// same sequence of calls produce identical output, which is the whole point:
/// `generate(seed, options)` must be byte-identical across runs.
#[derive(Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Derive an independent substream RNG for a module that runs concurrently
    /// with others sharing the same parent seed. Mixing in a fixed per-module
    /// salt means the module's draws never depend on draw order relative to
    /// its siblings.
    pub fn substream(parent_seed: u64, salt: u64) -> Self {
        Self::new(parent_seed.wrapping_mul(0x9E3779B97F4A7C15).wrapping_add(salt))
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform integer in `[low, high]`, inclusive on both ends.
    pub fn next_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        low + (self.next_uniform() * (high - low + 1) as f64) as i64
    }

    pub fn next_bool(&mut self, probability_true: f64) -> bool {
        self.next_uniform() < probability_true
    }

    /// Categorical sampling: walk the cumulative sum of `probabilities` and
    /// return the index of the first bucket whose cumulative bound covers the
    /// draw. Floating-point rounding means the walk can finish without a hit;
    /// the last index is returned in that case rather than panicking.
    pub fn sample_categorical(&mut self, probabilities: &[f64]) -> usize {
        let u = self.next_uniform();
        let mut cumulative = 0.0;
        for (i, p) in probabilities.iter().enumerate() {
            cumulative += p;
            if u < cumulative {
                return i;
            }
        }
        probabilities.len().saturating_sub(1)
    }

    /// Standard normal draw via Box–Muller, using two uniform draws.
    pub fn next_gaussian(&mut self, mean: f64, variance: f64) -> f64 {
        let u1 = self.next_uniform().max(f64::MIN_POSITIVE);
        let u2 = self.next_uniform();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + z0 * variance.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_uniform(), b.next_uniform());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let seq_a: Vec<f64> = (0..5).map(|_| a.next_uniform()).collect();
        let seq_b: Vec<f64> = (0..5).map(|_| b.next_uniform()).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn substreams_are_independent_of_interleaving() {
        let mut headers_rng = SeededRng::substream(7, 1);
        let mut tls_rng = SeededRng::substream(7, 2);
        let a1 = headers_rng.next_uniform();
        let b1 = tls_rng.next_uniform();
        // Re-deriving in the opposite order must not perturb either stream.
        let mut tls_rng2 = SeededRng::substream(7, 2);
        let mut headers_rng2 = SeededRng::substream(7, 1);
        let b2 = tls_rng2.next_uniform();
        let a2 = headers_rng2.next_uniform();
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn categorical_sampling_respects_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            let idx = rng.sample_categorical(&[0.2, 0.3, 0.5]);
            assert!(idx < 3);
        }
    }

    #[test]
    fn gaussian_is_finite() {
        let mut rng = SeededRng::new(1);
        for _ in 0..100 {
            assert!(rng.next_gaussian(4.0, 1.0).is_finite());
        }
    }
}
