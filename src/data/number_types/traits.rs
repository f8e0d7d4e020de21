//! # Traits
//!
//! The tableau is stored in floating point numbers. Comparisons against zero are never exact and
//! always go through a tolerance, see `SolverConfig::epsilon`.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Floating point numbers the simplex method can be computed with.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait RealField: Float + Debug + Display {
    /// Whether the value is smaller than `epsilon` in absolute value.
    fn is_negligible(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}
impl<T: Float + Debug + Display> RealField for T {
}
