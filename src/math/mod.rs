mod common;
mod normal;
mod point;
mod ray;
mod spectrum;
mod vector;

pub use common::FloatValueType;
pub use normal::Normal;
pub use point::{Point2, Point3};
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::Vec3;
