use std::sync::Arc;

use crate::{math::Spectrum, textures::Texture};

/// Local reflectance parameters of a surface.
#[derive(Clone)]
pub struct Material {
    /// Diffuse color
    pub kd: Spectrum<f32>,
    /// Specular color, near zero for non-reflective surfaces
    pub ks: Spectrum<f32>,
    pub shininess: f32,
    /// Opacity in [0, 1], 1.0 fully opaque
    pub transparency: f32,
    /// Diffuse texture, overrides `kd` when texture mapping is enabled
    pub kd_texture: Option<Arc<dyn Texture>>,
}

impl Material {
    pub fn is_reflective(&self) -> bool {
        !self.ks.is_black()
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency != 1.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            kd: Spectrum::ones(),
            ks: Spectrum::zeros(),
            shininess: 1.0,
            transparency: 1.0,
            kd_texture: None,
        }
    }
}
