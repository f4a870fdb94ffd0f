use super::{GlossyReflector, Integrator, IntegratorRay, RadianceResult, RayType};
use crate::{
    hit::HitInfo,
    lights::compute_light_contribution,
    math::{Ray, Vec3},
    state::RenderState,
};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Offset applied to secondary-ray origins to avoid re-intersecting the
/// surface they leave
const ORIGIN_BIAS: f32 = 1e-3;

#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct Params {
    pub max_depth: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self { max_depth: 6 }
    }
}

/// Recursive ray-tree evaluator: direct lighting at every hit plus mirror,
/// glossy and passthrough children up to `max_depth`.
pub struct Whitted {
    max_depth: u32,
    glossy: Option<Arc<dyn GlossyReflector>>,
}

impl Whitted {
    pub fn new(params: Params) -> Self {
        Self {
            max_depth: params.max_depth,
            glossy: None,
        }
    }

    /// Attaches the glossy-reflection collaborator consulted when glossy
    /// reflections are enabled.
    pub fn with_glossy(mut self, glossy: Arc<dyn GlossyReflector>) -> Self {
        self.glossy = Some(glossy);
        self
    }

    fn reflected_ray(
        &self,
        state: &mut RenderState,
        ray: &Ray<f32>,
        hit: &HitInfo,
    ) -> Option<Ray<f32>> {
        if state.features.enable_glossy_reflection {
            let glossy = self.glossy.as_ref()?;
            let mirror = generate_reflection_ray(ray, hit);
            let u = state.sampler.next_2d();
            Some(Ray::unbounded(
                mirror.o,
                glossy.perturb(mirror.d, hit.material.shininess, u),
            ))
        } else {
            Some(generate_reflection_ray(ray, hit))
        }
    }
}

/// Mirrors the incident ray about the surface normal at its intersection.
pub fn generate_reflection_ray(ray: &Ray<f32>, hit: &HitInfo) -> Ray<f32> {
    let i = ray.d.normalized();
    let n = Vec3::from(hit.n).normalized();

    Ray::unbounded(ray.point(ray.t) + n * ORIGIN_BIAS, i.reflect(n))
}

/// Continues the incident ray past its intersection, for transparency.
pub fn generate_passthrough_ray(ray: &Ray<f32>) -> Ray<f32> {
    Ray::unbounded(ray.point(ray.t) + ray.d.normalized() * ORIGIN_BIAS, ray.d)
}

fn append_child_rays(
    rays: &mut Vec<IntegratorRay>,
    mut child_rays: Vec<IntegratorRay>,
    ray_type: RayType,
) {
    // The child's first ray is its incident ray; retag it with the branch
    // that spawned it
    if let Some(first) = child_rays.first_mut() {
        first.ray_type = ray_type;
    }
    rays.append(&mut child_rays);
}

impl Integrator for Whitted {
    fn li(&self, state: &mut RenderState, mut ray: Ray<f32>, depth: u32) -> RadianceResult {
        let hit = state.scene.bvh.intersect(&mut ray);
        let mut ray_count = 1;

        let mut rays = Vec::new();
        if state.collect_rays {
            rays.push(IntegratorRay {
                ray,
                ray_type: RayType::Direct,
            });
        }

        let Some(hit) = hit else {
            return RadianceResult {
                li: state.scene.background.li(ray.d),
                ray_scene_intersections: ray_count,
                rays,
            };
        };

        let mut lo = {
            let collected = state.collect_rays.then_some(&mut rays);
            compute_light_contribution(state, &ray, &hit, collected)
        };

        if depth < self.max_depth {
            if state.features.enable_reflections && hit.material.is_reflective() {
                if let Some(child) = self.reflected_ray(state, &ray, &hit) {
                    // A degenerate direction spawns no child
                    if child.d != Vec3::zeros() {
                        let result = self.li(state, child, depth + 1);
                        lo += hit.material.ks * result.li;
                        ray_count += result.ray_scene_intersections;
                        append_child_rays(&mut rays, result.rays, RayType::Reflection);
                    }
                }
            }

            if state.features.enable_transparency && hit.material.is_transparent() {
                let child = generate_passthrough_ray(&ray);
                if child.d != Vec3::zeros() {
                    let result = self.li(state, child, depth + 1);
                    lo = lo.lerp(result.li, hit.material.transparency);
                    ray_count += result.ray_scene_intersections;
                    append_child_rays(&mut rays, result.rays, RayType::Passthrough);
                }
            }
        }

        RadianceResult {
            li: lo,
            ray_scene_intersections: ray_count,
            rays,
        }
    }
}
