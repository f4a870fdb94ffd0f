use std::ops::Neg;

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal<T>
where
    T: FloatValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Normal<T>
where
    T: FloatValueType,
{
    /// Creates a new `Normal`.
    pub fn new(x: T, y: T, z: T) -> Self {
        let ret = Self { x, y, z };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Checks if any of the components is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns this `Normal` scaled to unit length.
    pub fn normalized(self) -> Self {
        Self::from(Vec3::from(self).normalized())
    }

    pub fn dot_v(self, v: Vec3<T>) -> T {
        Vec3::from(self).dot(v)
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: FloatValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl<T> Neg for Normal<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
