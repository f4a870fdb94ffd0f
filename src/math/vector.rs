use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{common::FloatValueType, normal::Normal};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec3<T>
where
    T: FloatValueType,
{
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Creates a new `Vec3`.
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

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len_sqr(self) -> T {
        self.dot(self)
    }

    pub fn len(self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns this `Vec3` scaled to unit length.
    pub fn normalized(self) -> Self {
        self / self.len()
    }

    /// Reflects this `Vec3` about the unit direction `n`.
    pub fn reflect(self, n: Self) -> Self {
        self - n * (T::two() * self.dot(n))
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: FloatValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self {
            x: n.x,
            y: n.y,
            z: n.z,
        }
    }
}

impl<T> Neg for Vec3<T>
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

impl<T> Add for Vec3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T> Sub for Vec3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T> Mul<T> for Vec3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl<T> Div<T> for Vec3<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self {
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
        }
    }
}

impl<T> AbsDiffEq for Vec3<T>
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

impl<T> RelativeEq for Vec3<T>
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
