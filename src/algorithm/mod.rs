//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::simplex::Simplex;
use crate::algorithm::simplex::config::SolverConfig;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;

pub use error::SolveError;

pub mod error;
pub mod simplex;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Solution<F>),
    Unbounded,
}

impl<F: Display> Display for OptimizationResult<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            OptimizationResult::FiniteOptimum(solution) => solution.fmt(f),
            OptimizationResult::Infeasible => f.write_str(
                "No feasible solution exists, the constraints are inconsistent!",
            ),
            OptimizationResult::Unbounded => f.write_str(
                "Answer = +Inf, the polytope is unbounded in the direction of the gradient of the objective function!",
            ),
        }
    }
}

/// Maximize `c^T x` subject to `Ax <= b`, `x >= 0` with the default solver configuration.
///
/// # Arguments
///
/// * `constraints`: The matrix `A`, as `m` rows of `n` values each.
/// * `b`: Right-hand side of length `m`.
/// * `c`: Objective coefficients of length `n`.
///
/// # Errors
///
/// `SolveError::InvalidInput` when the dimensions don't agree or the problem is empty.
pub fn solve(
    constraints: Vec<Vec<f64>>,
    b: Vec<f64>,
    c: Vec<f64>,
) -> Result<OptimizationResult<f64>, SolveError> {
    let problem = StandardForm::new(constraints, b, c)?;
    Simplex::new(SolverConfig::default())?.solve(&problem)
}
