use num::traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Float types the math primitives are generic over
pub trait FloatValueType:
    Float + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Send + Sync + 'static
{
    /// Returns two, for formulas written against the generic type.
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

// Impl for all matching types
impl<T> FloatValueType for T where
    T: Float + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Send + Sync + 'static
{
}
