//! # Solver configuration
//!
//! Numerical tolerance and optional budgets for the simplex method.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::time::Duration;

use num_traits::cast;

use crate::algorithm::SolveError;
use crate::data::number_types::traits::RealField;

/// Tolerance used when no other value is configured.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Parameters of a `Simplex` solver.
///
/// Every comparison of a tableau value against zero, and of two ratios against each other, is
/// made with `epsilon`: values within `epsilon` of zero are zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F> {
    /// Numerical tolerance, strictly positive.
    pub epsilon: F,
    /// Maximum number of pivots. Termination is guaranteed by the anti-cycling rule, so there is
    /// no limit unless one is set.
    pub max_iterations: Option<usize>,
    /// Maximum wall-clock time spent pivoting.
    pub time_limit: Option<Duration>,
}

impl<F: RealField> Default for SolverConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: cast(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            max_iterations: None,
            time_limit: None,
        }
    }
}

impl<F: RealField> SolverConfig<F> {
    /// Replace the numerical tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Limit the number of pivots.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Limit the time spent pivoting.
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), SolveError> {
        if self.epsilon > F::zero() && self.epsilon.is_finite() {
            Ok(())
        } else {
            Err(SolveError::InvalidConfig(format!(
                "epsilon should be strictly positive and finite, but is {}",
                self.epsilon,
            )))
        }
    }
}

/// A limit on the amount of work the solver may do.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Budget {
    /// Number of pivots.
    Iterations(usize),
    /// Wall-clock time.
    Time(Duration),
}

impl Display for Budget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Budget::Iterations(max) => write!(f, "limit of {} pivots", max),
            Budget::Time(limit) => write!(f, "time limit of {:?}", limit),
        }
    }
}
