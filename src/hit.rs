use crate::{
    materials::Material,
    math::{Normal, Point2},
};

/// Info of a surface hit
#[derive(Clone)]
pub struct HitInfo {
    /// Surface normal
    pub n: Normal<f32>,
    /// Texture coordinate
    pub uv: Point2<f32>,
    /// Resolved surface material
    pub material: Material,
}
