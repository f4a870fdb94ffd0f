mod uniform;

pub use uniform::UniformSampler;

use serde::{Deserialize, Serialize};

use crate::math::Point2;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Sampling_and_Reconstruction/Sampling_Interface.html

#[derive(Copy, Clone, Deserialize, Serialize)]
pub enum SamplerSettings {
    Uniform { seed: u64 },
}

impl Default for SamplerSettings {
    fn default() -> Self {
        SamplerSettings::Uniform { seed: 1 }
    }
}

pub fn create_sampler(settings: SamplerSettings) -> Box<dyn Sampler> {
    match settings {
        SamplerSettings::Uniform { seed } => Box::new(UniformSampler::new(seed)),
    }
}

pub trait Sampler: Send + Sync {
    /// Clones this `Sampler` onto an independent stream for the given `seed`.
    fn clone_seeded(&self, seed: u64) -> Box<dyn Sampler>;
    /// Returns the next dimension of the sample stream, in [0, 1).
    fn next_1d(&mut self) -> f32;
    /// Returns the next two dimensions of the sample stream, in [0, 1)^2.
    fn next_2d(&mut self) -> Point2<f32>;
}
