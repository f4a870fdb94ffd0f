use crate::{hit::HitInfo, math::Ray};

/// Contract for the external intersection acceleration structure.
///
/// Implementations are queried concurrently during rendering and must not
/// mutate shared state.
pub trait Accel: Send + Sync {
    /// Returns the nearest intersection in the ray's positive parametric
    /// range, writing the hit distance into `ray.t`.
    fn intersect(&self, ray: &mut Ray<f32>) -> Option<HitInfo>;
}
