use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Sub};

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point2<T>
where
    T: FloatValueType,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: FloatValueType,
{
    /// Creates a new `Point2`.
    pub fn new(x: T, y: T) -> Self {
        let ret = Self { x, y };
        debug_assert!(!ret.has_nans());
        ret
    }

    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
        }
    }

    /// Checks if any of the components is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: FloatValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3<T>
where
    T: FloatValueType,
{
    /// Creates a new `Point3`.
    pub fn new(x: T, y: T, z: T) -> Self {
        let ret = Self { x, y, z };
        debug_assert!(!ret.has_nans());
        ret
    }

    pub fn zeros() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }

    /// Checks if any of the components is NaN.
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Interpolates linearly toward `other`, `t` in [0, 1].
    pub fn lerp(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, v: Vec3<T>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

impl<T> Sub for Point3<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T> AbsDiffEq for Point3<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T> RelativeEq for Point3<T>
where
    T: FloatValueType + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
