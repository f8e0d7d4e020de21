//! # Linear programs in standard inequality form
//!
//! Maximize `c^T x` subject to `Ax <= b`, `x >= 0`.
use itertools::Itertools;

use crate::algorithm::SolveError;
use crate::data::number_types::traits::RealField;

/// A linear program of the form max `c^T x` s.t. `Ax <= b`, `x >= 0`.
///
/// Dimensions are validated at construction, so algorithms may index without further checks.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    /// Constraint coefficients, one `Vec` of length `n` per row, `m` rows.
    constraints: Vec<Vec<F>>,
    /// Right-hand side, length `m`.
    b: Vec<F>,
    /// Objective coefficients, length `n`.
    c: Vec<F>,
}

impl<F: RealField> StandardForm<F> {
    /// Create a new linear program after checking its dimensions.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Matrix `A` given as `m` rows of `n` values each.
    /// * `b`: Right-hand side of length `m`.
    /// * `c`: Objective coefficients of length `n`.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidInput` if there are no constraints or no variables, if the dimensions
    /// don't agree, or if any of the values is not finite.
    pub fn new(constraints: Vec<Vec<F>>, b: Vec<F>, c: Vec<F>) -> Result<Self, SolveError> {
        let nr_constraints = constraints.len();
        let nr_variables = c.len();

        if nr_constraints == 0 {
            return Err(SolveError::InvalidInput("at least one constraint is required".into()));
        }
        if nr_variables == 0 {
            return Err(SolveError::InvalidInput("at least one variable is required".into()));
        }
        if b.len() != nr_constraints {
            return Err(SolveError::InvalidInput(format!(
                "right-hand side has length {}, but there are {} constraints",
                b.len(), nr_constraints,
            )));
        }
        if let Some((i, row)) = constraints.iter().enumerate().find(|(_, row)| row.len() != nr_variables) {
            return Err(SolveError::InvalidInput(format!(
                "constraint {} has {} coefficients, but there are {} variables",
                i, row.len(), nr_variables,
            )));
        }

        let non_finite = constraints.iter().flatten()
            .chain(b.iter())
            .chain(c.iter())
            .find(|value| !value.is_finite());
        if let Some(value) = non_finite {
            return Err(SolveError::InvalidInput(format!("value {} is not finite", value)));
        }

        Ok(Self { constraints, b, c })
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of variables `n`, not counting any slacks.
    pub fn nr_variables(&self) -> usize {
        self.c.len()
    }

    /// Constraint coefficient rows.
    pub fn constraints(&self) -> &[Vec<F>] {
        &self.constraints
    }

    /// Right-hand side.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Objective coefficients.
    pub fn c(&self) -> &[F] {
        &self.c
    }

    /// Value `c^T x` of the objective function at a point.
    pub fn objective_value(&self, x: &[F]) -> F {
        debug_assert_eq!(x.len(), self.nr_variables());

        inner_product(&self.c, x)
    }

    /// Values `Ax` of all constraint rows at a point.
    pub fn constraint_values(&self, x: &[F]) -> Vec<F> {
        debug_assert_eq!(x.len(), self.nr_variables());

        self.constraints.iter().map(|row| inner_product(row, x)).collect()
    }

    /// Whether a point satisfies `x >= 0` and `Ax <= b`, up to `epsilon`.
    pub fn is_feasible(&self, x: &[F], epsilon: F) -> bool {
        x.len() == self.nr_variables()
            && x.iter().all(|&value| value >= -epsilon)
            && self.constraint_values(x).into_iter().zip_eq(&self.b)
                .all(|(lhs, &rhs)| lhs <= rhs + epsilon)
    }
}

fn inner_product<F: RealField>(left: &[F], right: &[F]) -> F {
    left.iter().zip_eq(right).fold(F::zero(), |total, (&l, &r)| total + l * r)
}
