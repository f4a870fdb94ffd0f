mod gradient;

pub use gradient::{GradientStop, LinearGradient};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
    hit::HitInfo,
    math::{Spectrum, Vec3},
    state::RenderState,
};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumString)]
pub enum ShadingModel {
    Lambertian,
    Phong,
    BlinnPhong,
    LinearGradient,
}

/// Resolves the diffuse color at `hit`, through the material's texture when
/// texture mapping is enabled.
pub fn sample_material_kd(state: &RenderState, hit: &HitInfo) -> Spectrum<f32> {
    if state.features.enable_texture_mapping {
        if let Some(texture) = &hit.material.kd_texture {
            return texture.sample(hit.uv, state.features.texture_filter);
        }
    }
    hit.material.kd
}

/// Evaluates the selected shading model at `hit`, returning the light
/// reflected toward `camera_dir`.
///
/// With shading disabled the light color is modulated by the diffuse color
/// only.
pub fn compute_shading(
    state: &RenderState,
    camera_dir: Vec3<f32>,
    light_dir: Vec3<f32>,
    light_color: Spectrum<f32>,
    hit: &HitInfo,
) -> Spectrum<f32> {
    if state.features.enable_shading {
        match state.features.shading_model {
            ShadingModel::Lambertian => lambertian(state, light_dir, light_color, hit),
            ShadingModel::Phong => phong(state, camera_dir, light_dir, light_color, hit),
            ShadingModel::BlinnPhong => blinn_phong(state, camera_dir, light_dir, light_color, hit),
            ShadingModel::LinearGradient => {
                linear_gradient(light_dir, light_color, hit, &state.scene.gradient)
            }
        }
    } else {
        light_color * sample_material_kd(state, hit)
    }
}

fn lambertian(
    state: &RenderState,
    light_dir: Vec3<f32>,
    light_color: Spectrum<f32>,
    hit: &HitInfo,
) -> Spectrum<f32> {
    let n = Vec3::from(hit.n).normalized();
    let l = light_dir.normalized();

    sample_material_kd(state, hit) * light_color * n.dot(l).max(0.0)
}

fn phong(
    state: &RenderState,
    camera_dir: Vec3<f32>,
    light_dir: Vec3<f32>,
    light_color: Spectrum<f32>,
    hit: &HitInfo,
) -> Spectrum<f32> {
    let n = Vec3::from(hit.n).normalized();
    let l = light_dir.normalized();
    let v = camera_dir.normalized();
    let r = (-l).reflect(n);

    let diffuse = sample_material_kd(state, hit) * light_color * n.dot(l).max(0.0);
    let specular = hit.material.ks * light_color * r.dot(v).max(0.0).powf(hit.material.shininess);

    diffuse + specular
}

fn blinn_phong(
    state: &RenderState,
    camera_dir: Vec3<f32>,
    light_dir: Vec3<f32>,
    light_color: Spectrum<f32>,
    hit: &HitInfo,
) -> Spectrum<f32> {
    let n = Vec3::from(hit.n).normalized();
    let l = light_dir.normalized();
    let v = camera_dir.normalized();

    let diffuse = sample_material_kd(state, hit) * light_color * n.dot(l).max(0.0);

    // Half vector degenerates when the light is exactly behind the viewer
    let half = l + v;
    let specular = if half.len_sqr() > 0.0 {
        hit.material.ks
            * light_color
            * n.dot(half.normalized()).max(0.0).powf(hit.material.shininess)
    } else {
        Spectrum::zeros()
    };

    diffuse + specular
}

fn linear_gradient(
    light_dir: Vec3<f32>,
    light_color: Spectrum<f32>,
    hit: &HitInfo,
    gradient: &LinearGradient,
) -> Spectrum<f32> {
    let cos_theta = light_dir
        .normalized()
        .dot(Vec3::from(hit.n).normalized())
        .clamp(-1.0, 1.0);

    gradient.sample(cos_theta) * light_color
}
