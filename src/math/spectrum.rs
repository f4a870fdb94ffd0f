use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, Mul};

use super::common::FloatValueType;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum<T>
where
    T: FloatValueType,
{
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Creates a new `Spectrum`.
    pub fn new(r: T, g: T, b: T) -> Self {
        let ret = Self { r, g, b };
        debug_assert!(!ret.has_nans());
        ret
    }

    pub fn zeros() -> Self {
        Self {
            r: T::zero(),
            g: T::zero(),
            b: T::zero(),
        }
    }

    pub fn ones() -> Self {
        Self {
            r: T::one(),
            g: T::one(),
            b: T::one(),
        }
    }

    /// Checks if any of the channels is NaN.
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Interpolates linearly toward `other`, `t` in [0, 1].
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::one() - t) + other * t
    }
}

impl<T> Add for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl<T> AddAssign for Spectrum<T>
where
    T: FloatValueType,
{
    fn add_assign(&mut self, other: Self) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl<T> Mul for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl<T> Mul<T> for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }
}

impl<T> Div<T> for Spectrum<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self {
            r: self.r / s,
            g: self.g / s,
            b: self.b / s,
        }
    }
}

impl<T> AbsDiffEq for Spectrum<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T> RelativeEq for Spectrum<T>
where
    T: FloatValueType + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}
