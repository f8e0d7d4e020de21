//! # Representation of optimal solutions
//!
//! Once a linear program is solved to optimality, the optimal value and a point attaining it are
//! reported together.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

/// An optimal point of a linear program together with its objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function at `values`.
    pub objective_value: F,
    /// Value for each of the original variables, in the order of the problem's columns.
    pub values: Vec<F>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "Answer = {}, x = [{}]", self.objective_value, self.values.iter().join(", "))
    }
}
