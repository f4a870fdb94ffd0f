use super::{contribution_from_sample, LightSample};
use crate::{
    hit::HitInfo,
    integrator::IntegratorRay,
    math::{Point2, Point3, Ray, Spectrum, Vec3},
    state::RenderState,
};

/// A 2d emitter spanned by two edges from a corner; color is interpolated
/// bilinearly between the four corners.
pub struct ParallelogramLight {
    pub v0: Point3<f32>,
    pub edge01: Vec3<f32>,
    pub edge02: Vec3<f32>,
    /// Corner color at (0, 0)
    pub color0: Spectrum<f32>,
    /// Corner color at (1, 0)
    pub color1: Spectrum<f32>,
    /// Corner color at (0, 1)
    pub color2: Spectrum<f32>,
    /// Corner color at (1, 1)
    pub color3: Spectrum<f32>,
}

impl ParallelogramLight {
    /// Position and color at `uv` in [0, 1)^2 over the parallelogram.
    pub fn sample(&self, uv: Point2<f32>) -> LightSample {
        let p = self.v0 + self.edge01 * uv.x + self.edge02 * uv.y;

        let color = self.color0 * ((1.0 - uv.x) * (1.0 - uv.y))
            + self.color1 * (uv.x * (1.0 - uv.y))
            + self.color2 * ((1.0 - uv.x) * uv.y)
            + self.color3 * (uv.x * uv.y);

        LightSample { p, color }
    }

    /// Monte-Carlo average of `samples` visibility-and-shading evaluations
    /// over the parallelogram.
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
            let LightSample { p, color } = self.sample(state.sampler.next_2d());
            sum += contribution_from_sample(state, p, color, ray, hit, rays.as_deref_mut());
        }

        if samples > 0 {
            sum / samples as f32
        } else {
            sum
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn light() -> ParallelogramLight {
        ParallelogramLight {
            v0: Point3::new(1.0, 2.0, 3.0),
            edge01: Vec3::new(2.0, 0.0, 0.0),
            edge02: Vec3::new(0.0, 0.0, 4.0),
            color0: Spectrum::new(1.0, 0.0, 0.0),
            color1: Spectrum::new(0.0, 1.0, 0.0),
            color2: Spectrum::new(0.0, 0.0, 1.0),
            color3: Spectrum::new(1.0, 1.0, 0.0),
        }
    }

    #[test]
    fn corners() {
        let light = light();

        let LightSample { p, color } = light.sample(Point2::new(0.0, 0.0));
        assert_abs_diff_eq!(p, light.v0);
        assert_abs_diff_eq!(color, light.color0);

        let LightSample { p, color } = light.sample(Point2::new(1.0, 0.0));
        assert_abs_diff_eq!(p, light.v0 + light.edge01);
        assert_abs_diff_eq!(color, light.color1);

        let LightSample { p, color } = light.sample(Point2::new(0.0, 1.0));
        assert_abs_diff_eq!(p, light.v0 + light.edge02);
        assert_abs_diff_eq!(color, light.color2);

        let LightSample { p, color } = light.sample(Point2::new(1.0, 1.0));
        assert_abs_diff_eq!(p, light.v0 + light.edge01 + light.edge02);
        assert_abs_diff_eq!(color, light.color3);
    }

    #[test]
    fn center_blend() {
        let LightSample { color, .. } = light().sample(Point2::new(0.5, 0.5));
        assert_abs_diff_eq!(color, Spectrum::new(0.5, 0.5, 0.25));
    }
}
