use crate::{
    integrator::{IntegratorRay, RayType},
    math::{Point3, Ray, Spectrum},
    state::RenderState,
};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Light_Sources/Light_Interface#VisibilityTesting

/// Offset applied to shadow-ray origins to avoid self-intersection
const SHADOW_BIAS: f32 = 1e-4;

fn shadow_ray_toward(p: Point3<f32>, light_position: Point3<f32>) -> Ray<f32> {
    let d = (light_position - p).normalized();
    Ray::unbounded(p + d * SHADOW_BIAS, d)
}

/// Resolves the light color reaching the intersection from a light sample:
/// unchanged with shadows disabled, on/off with transparency disabled,
/// occluder-attenuated with both enabled.
pub fn visibility_of_light_sample(
    state: &RenderState,
    light_position: Point3<f32>,
    light_color: Spectrum<f32>,
    ray: &Ray<f32>,
    rays: Option<&mut Vec<IntegratorRay>>,
) -> Spectrum<f32> {
    if !state.features.enable_shadows {
        light_color
    } else if !state.features.enable_transparency {
        if visibility_of_light_sample_binary(state, light_position, ray, rays) {
            light_color
        } else {
            Spectrum::zeros()
        }
    } else {
        visibility_of_light_sample_transparency(state, light_position, light_color, ray, rays)
    }
}

/// Reports whether the sampled light position is visible from the
/// intersection on `ray`.
///
/// Any hit along the unbounded shadow ray counts as occlusion, including
/// geometry beyond the light itself.
pub fn visibility_of_light_sample_binary(
    state: &RenderState,
    light_position: Point3<f32>,
    ray: &Ray<f32>,
    rays: Option<&mut Vec<IntegratorRay>>,
) -> bool {
    let mut shadow_ray = shadow_ray_toward(ray.point(ray.t), light_position);
    let occluded = state.scene.bvh.intersect(&mut shadow_ray).is_some();

    if let Some(rays) = rays {
        rays.push(IntegratorRay {
            ray: shadow_ray,
            ray_type: RayType::Shadow,
        });
    }

    !occluded
}

/// Returns the light reaching the intersection, attenuated on occlusion by
/// `kd * (1 - transparency)` of the occluding surface's material.
///
/// The blend is a deliberate approximation: the occluder's diffuse color
/// scales the shadow regardless of its opacity, so an opaque occluder with
/// near-zero `kd` barely darkens the sample, and only the first occluder
/// along the shadow ray is consulted, so stacked transparent occluders do
/// not compound.
pub fn visibility_of_light_sample_transparency(
    state: &RenderState,
    light_position: Point3<f32>,
    light_color: Spectrum<f32>,
    ray: &Ray<f32>,
    rays: Option<&mut Vec<IntegratorRay>>,
) -> Spectrum<f32> {
    let mut shadow_ray = shadow_ray_toward(ray.point(ray.t), light_position);
    let occluder = state.scene.bvh.intersect(&mut shadow_ray);

    if let Some(rays) = rays {
        rays.push(IntegratorRay {
            ray: shadow_ray,
            ray_type: RayType::Shadow,
        });
    }

    match occluder {
        Some(hit) => light_color * hit.material.kd * (1.0 - hit.material.transparency),
        None => light_color,
    }
}
