use super::{contribution_from_sample, LightSample};
use crate::{
    hit::HitInfo,
    integrator::IntegratorRay,
    math::{Point3, Ray, Spectrum},
    state::RenderState,
};

/// A 1d emitter between two endpoints; color varies linearly along it.
pub struct SegmentLight {
    pub endpoint0: Point3<f32>,
    pub endpoint1: Point3<f32>,
    pub color0: Spectrum<f32>,
    pub color1: Spectrum<f32>,
}

impl SegmentLight {
    /// Position and color at `u` in [0, 1) along the segment.
    pub fn sample(&self, u: f32) -> LightSample {
        LightSample {
            p: self.endpoint0.lerp(self.endpoint1, u),
            color: self.color0.lerp(self.color1, u),
        }
    }

    /// Monte-Carlo average of `samples` visibility-and-shading evaluations
    /// over the segment.
    pub(super) fn contribution(
        &self,
        state: &mut RenderState,
        ray: &Ray<f32>,
        hit: &HitInfo,
        samples: u32,
        mut rays: Option<&mut Vec<IntegratorRay>>,
    ) -> Spectrum<f32> {
        let mut sum = Spectrum::zeros();
        for _ in 0..samples {
            let LightSample { p, color } = self.sample(state.sampler.next_1d());
            sum += contribution_from_sample(state, p, color, ray, hit, rays.as_deref_mut());
        }

        if samples > 0 {
            sum / samples as f32
        } else {
            sum
        }
    }
}
