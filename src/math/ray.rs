use super::{common::FloatValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
    /// Parametric hit distance, written by intersection. Starts unbounded.
    pub t: T,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>, t: T) -> Self {
        let ret = Self { o, d, t };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new unbounded `Ray`.
    pub fn unbounded(o: Point3<T>, d: Vec3<T>) -> Self {
        Self::new(o, d, T::infinity())
    }

    /// Checks if any of the members contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t.is_nan()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}
