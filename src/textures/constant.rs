use super::{Texture, TextureFilter};
use crate::math::{Point2, Spectrum};

pub struct ConstantTexture {
    value: Spectrum<f32>,
}

impl ConstantTexture {
    pub fn new(value: Spectrum<f32>) -> Self {
        Self { value }
    }
}

impl Texture for ConstantTexture {
    fn sample(&self, _uv: Point2<f32>, _filter: TextureFilter) -> Spectrum<f32> {
        self.value
    }
}
