use serde::{Deserialize, Serialize};

use crate::{sampling::Sampler, scene::Scene, shading::ShadingModel, textures::TextureFilter};

/// Feature toggles for a render, fixed for the whole frame.
#[derive(Copy, Clone, Deserialize, Serialize)]
pub struct Features {
    pub enable_shadows: bool,
    pub enable_transparency: bool,
    pub enable_reflections: bool,
    pub enable_glossy_reflection: bool,
    pub enable_shading: bool,
    pub shading_model: ShadingModel,
    pub enable_texture_mapping: bool,
    pub texture_filter: TextureFilter,
    /// Samples taken per segment/parallelogram light
    pub shadow_samples: u32,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            enable_shadows: true,
            enable_transparency: false,
            enable_reflections: true,
            enable_glossy_reflection: false,
            enable_shading: true,
            shading_model: ShadingModel::Lambertian,
            enable_texture_mapping: true,
            texture_filter: TextureFilter::Nearest,
            shadow_samples: 4,
        }
    }
}

/// Shared context for one top-level ray evaluation.
///
/// Passed by reference through the whole recursive call tree; the scene and
/// feature config are never mutated, only the sampler stream is consumed.
pub struct RenderState<'a> {
    pub scene: &'a Scene,
    pub features: &'a Features,
    pub sampler: &'a mut dyn Sampler,
    /// Record every generated ray into the radiance result
    pub collect_rays: bool,
}
