use super::Sampler;
use crate::math::Point2;

use rand::{distributions::Standard, Rng};
use rand_pcg::Pcg32;

/// Uniform pseudo-random sampler over a Pcg32 stream.
///
/// Draw order is stable for a given seed, so renders reproduce exactly.
pub struct UniformSampler {
    rng: Pcg32,
    // Stored to clone the sampler with a different stream
    rng_seed: u64,
}

impl UniformSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, 0),
            rng_seed: seed,
        }
    }
}

impl Sampler for UniformSampler {
    fn clone_seeded(&self, seed: u64) -> Box<dyn Sampler> {
        // Pcg has uncorrelated streams so let's leverage that
        Box::new(Self {
            rng: Pcg32::new(self.rng_seed, seed),
            rng_seed: self.rng_seed,
        })
    }

    fn next_1d(&mut self) -> f32 {
        self.rng.sample(Standard)
    }

    fn next_2d(&mut self) -> Point2<f32> {
        Point2::new(self.rng.sample(Standard), self.rng.sample(Standard))
    }
}
