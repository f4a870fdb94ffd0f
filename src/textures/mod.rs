mod constant;

pub use constant::ConstantTexture;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::math::{Point2, Spectrum};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Texture/Texture_Interface_and_Basic_Textures

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumString)]
pub enum TextureFilter {
    Nearest,
    Bilinear,
}

/// Contract for the external texture storage and filtering.
pub trait Texture: Send + Sync {
    /// Evaluates this `Texture` at `uv` with the given filter mode.
    fn sample(&self, uv: Point2<f32>, filter: TextureFilter) -> Spectrum<f32>;
}
