use super::contribution_from_sample;
use crate::{
    hit::HitInfo,
    integrator::IntegratorRay,
    math::{Point3, Ray, Spectrum},
    state::RenderState,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Light_Sources/Point_Lights.html

pub struct PointLight {
    pub position: Point3<f32>,
    pub color: Spectrum<f32>,
}

impl PointLight {
    /// Contribution toward the incident ray; a point emitter needs no
    /// sampling, its position and color are exact.
    pub(super) fn contribution(
        &self,
        state: &RenderState,
        ray: &Ray<f32>,
        hit: &HitInfo,
        rays: Option<&mut Vec<IntegratorRay>>,
    ) -> Spectrum<f32> {
        contribution_from_sample(state, self.position, self.color, ray, hit, rays)
    }
}
