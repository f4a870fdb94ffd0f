mod whitted;

pub use whitted::{generate_passthrough_ray, generate_reflection_ray, Whitted};

pub type WhittedParams = whitted::Params;

use crate::{
    math::{Point2, Ray, Spectrum, Vec3},
    state::RenderState,
};

pub struct RadianceResult {
    pub li: Spectrum<f32>,
    pub ray_scene_intersections: usize,
    /// Every ray generated for this evaluation, when collection is enabled
    pub rays: Vec<IntegratorRay>,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Spectrum::zeros(),
            ray_scene_intersections: 0,
            rays: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct IntegratorRay {
    pub ray: Ray<f32>,
    pub ray_type: RayType,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RayType {
    Direct,
    Shadow,
    Reflection,
    Passthrough,
}

/// Contract for the external glossy-reflection sampler: perturbs a mirror
/// direction by the material's shininess using a 2d sample.
pub trait GlossyReflector: Send + Sync {
    fn perturb(&self, mirror: Vec3<f32>, shininess: f32, u: Point2<f32>) -> Vec3<f32>;
}

// Public interface for scene integrators.
pub trait Integrator {
    /// Evaluates the incoming radiance along `ray`. Also returns the number
    /// of rays intersected with the scene.
    fn li(&self, state: &mut RenderState, ray: Ray<f32>, depth: u32) -> RadianceResult;
}

/// Averages the radiance over a batch of rays starting at `depth`.
pub fn render_rays(
    integrator: &dyn Integrator,
    state: &mut RenderState,
    rays: &[Ray<f32>],
    depth: u32,
) -> Spectrum<f32> {
    if rays.is_empty() {
        return Spectrum::zeros();
    }

    let mut sum = Spectrum::zeros();
    for ray in rays {
        sum += integrator.li(state, *ray, depth).li;
    }
    sum / rays.len() as f32
}
