//! Deterministic random stream utilities.
//!
//! A [`SampleStreams`] instance owns two independent pseudo-random sequences
//! derived from the run seed: one for continuous distribution draws and one
//! for discrete/categorical choices. Keeping the streams separate means a new
//! categorical branch never shifts the continuous draw sequence, which keeps
//! generated datasets stable under model extensions. Given the same seed and
//! the same sequence of primitive calls, the streams reproduce the same
//! values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Beta, Distribution, Gamma, Normal, Weibull};

use crate::GenerateError;

/// Paired continuous/categorical random streams for one generation run.
#[derive(Clone, Debug)]
pub struct SampleStreams {
    continuous: ChaCha8Rng,
    categorical: ChaCha8Rng,
}

impl SampleStreams {
    /// Derive both stream seeds from a single configured seed value.
    pub fn from_seed(seed: u64) -> Self {
        let continuous = ChaCha8Rng::seed_from_u64(mix64(seed ^ 0xA0761D6478BD642F));
        let categorical = ChaCha8Rng::seed_from_u64(mix64(seed ^ 0xE7037ED1A0B428DB));
        Self {
            continuous,
            categorical,
        }
    }

    /// Draw from `Uniform(lo, hi)` on the continuous stream.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.continuous.gen_range(lo..hi)
    }

    /// Draw from `Normal(mean, sd)` on the continuous stream.
    pub fn normal(&mut self, mean: f64, sd: f64) -> Result<f64, GenerateError> {
        // Normal::new only rejects non-finite deviations; a non-positive one
        // is a caller bug and must not draw.
        if sd <= 0.0 {
            return Err(distribution_error(
                "normal",
                "standard deviation must be positive",
            ));
        }
        let dist = Normal::new(mean, sd).map_err(|err| distribution_error("normal", err))?;
        Ok(dist.sample(&mut self.continuous))
    }

    /// Draw from `Gamma(shape, scale)` on the continuous stream.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> Result<f64, GenerateError> {
        let dist = Gamma::new(shape, scale).map_err(|err| distribution_error("gamma", err))?;
        Ok(dist.sample(&mut self.continuous))
    }

    /// Draw from `Weibull(shape, scale)` on the continuous stream.
    pub fn weibull(&mut self, shape: f64, scale: f64) -> Result<f64, GenerateError> {
        let dist = Weibull::new(scale, shape).map_err(|err| distribution_error("weibull", err))?;
        Ok(dist.sample(&mut self.continuous))
    }

    /// Draw from `Beta(a, b)` scaled to `[0, scale]` on the continuous stream.
    pub fn beta(&mut self, a: f64, b: f64, scale: f64) -> Result<f64, GenerateError> {
        let dist = Beta::new(a, b).map_err(|err| distribution_error("beta", err))?;
        Ok(dist.sample(&mut self.continuous) * scale)
    }

    /// Bernoulli trial with success probability `p` on the categorical stream.
    pub fn chance(&mut self, p: f64) -> bool {
        self.categorical.gen_bool(p)
    }

    /// Uniformly pick one element of `options` on the categorical stream.
    pub fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        let index = self.categorical.gen_range(0..options.len());
        options[index]
    }
}

fn distribution_error(distribution: &'static str, err: impl std::fmt::Display) -> GenerateError {
    GenerateError::Distribution {
        distribution,
        reason: err.to_string(),
    }
}

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
