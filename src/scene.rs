use std::sync::Arc;

use crate::{
    accel::Accel,
    lights::Light,
    math::{Spectrum, Vec3},
    shading::LinearGradient,
};

/// Contract for the external environment map, sampled on ray miss.
pub trait EnvironmentMap: Send + Sync {
    /// Returns the radiance arriving from the environment along `d`.
    fn li(&self, d: Vec3<f32>) -> Spectrum<f32>;
}

/// Environment of a single color in every direction.
pub struct ConstantBackground {
    color: Spectrum<f32>,
}

impl ConstantBackground {
    pub fn new(color: Spectrum<f32>) -> Self {
        Self { color }
    }
}

impl EnvironmentMap for ConstantBackground {
    fn li(&self, _d: Vec3<f32>) -> Spectrum<f32> {
        self.color
    }
}

/// Scene contents, constructed at load time and read-only during rendering.
pub struct Scene {
    pub lights: Vec<Light>,
    pub bvh: Arc<dyn Accel>,
    pub background: Arc<dyn EnvironmentMap>,
    /// Gradient consulted by the linear-gradient shading model
    pub gradient: LinearGradient,
}

impl Scene {
    pub fn new(lights: Vec<Light>, bvh: Arc<dyn Accel>) -> Self {
        Self {
            lights,
            bvh,
            background: Arc::new(ConstantBackground::new(Spectrum::zeros())),
            gradient: LinearGradient::default(),
        }
    }

    pub fn with_background(mut self, background: Arc<dyn EnvironmentMap>) -> Self {
        self.background = background;
        self
    }

    pub fn with_gradient(mut self, gradient: LinearGradient) -> Self {
        self.gradient = gradient;
        self
    }
}
