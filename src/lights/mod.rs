mod parallelogram;
mod point;
mod segment;

pub use parallelogram::ParallelogramLight;
pub use point::PointLight;
pub use segment::SegmentLight;

use crate::{
    hit::HitInfo,
    integrator::IntegratorRay,
    math::{Point3, Ray, Spectrum},
    shading::compute_shading,
    state::RenderState,
    visibility::visibility_of_light_sample,
};

/// Position and emitted color drawn from a light
pub struct LightSample {
    pub p: Point3<f32>,
    pub color: Spectrum<f32>,
}

/// Scene light primitive; sampling and contribution dispatch by shape.
pub enum Light {
    Point(PointLight),
    Segment(SegmentLight),
    Parallelogram(ParallelogramLight),
}

/// Estimates the direct lighting at `hit`, summed over scene lights in
/// scene order.
///
/// Scene order also fixes the sampler-consumption order, which keeps
/// renders reproducible under a fixed seed.
pub fn compute_light_contribution(
    state: &mut RenderState,
    ray: &Ray<f32>,
    hit: &HitInfo,
    mut rays: Option<&mut Vec<IntegratorRay>>,
) -> Spectrum<f32> {
    let scene = state.scene;
    let samples = state.features.shadow_samples;

    let mut lo = Spectrum::zeros();
    for light in &scene.lights {
        lo += match light {
            Light::Point(light) => light.contribution(state, ray, hit, rays.as_deref_mut()),
            Light::Segment(light) => {
                light.contribution(state, ray, hit, samples, rays.as_deref_mut())
            }
            Light::Parallelogram(light) => {
                light.contribution(state, ray, hit, samples, rays.as_deref_mut())
            }
        };
    }
    lo
}

/// Contribution of a single sampled light position: visibility resolves the
/// reaching light color, shading turns it into reflected radiance.
fn contribution_from_sample(
    state: &RenderState,
    light_position: Point3<f32>,
    light_color: Spectrum<f32>,
    ray: &Ray<f32>,
    hit: &HitInfo,
    rays: Option<&mut Vec<IntegratorRay>>,
) -> Spectrum<f32> {
    let li = visibility_of_light_sample(state, light_position, light_color, ray, rays);
    if li.is_black() {
        return Spectrum::zeros();
    }

    let camera_dir = (-ray.d).normalized();
    let light_dir = (light_position - ray.point(ray.t)).normalized();
    compute_shading(state, camera_dir, light_dir, li, hit)
}
