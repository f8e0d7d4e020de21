//! # Dense simplex tableau
//!
//! Contains the simplex tableau and the elementary operations which can be performed upon it.
//!
//! The tableau is a dictionary: every constraint row expresses its basic variable as an affine
//! function of the non-basic variables, which are the first `n + 1` columns. The last column holds
//! the constant term. Two objective rows follow the constraint rows: the real objective and an
//! auxiliary objective which measures infeasibility through a single artificial variable.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::RealField;

/// Identity of a variable as it was in the problem before any pivot.
///
/// The derived ordering is the one used for anti-cycling: original variables first, then the
/// artificial variable, then the slack variables, each group by index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Variable {
    /// Variable `x_j` of the problem.
    Original(usize),
    /// The single variable measuring infeasibility.
    Artificial,
    /// The slack of constraint `i`.
    Slack(usize),
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a dense matrix of size `(m + 2) x (n + 2)`. Rows `0..m` are the constraints, row `m` is
/// the objective and row `m + 1` the auxiliary objective. Columns `0..n + 1` hold the non-basic
/// variables, initially `x_0, ..., x_{n - 1}` and the artificial variable; column `n + 1` holds
/// the constants.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    matrix: Dense<F>,
    /// Which variable each of the first `n + 1` columns currently represents.
    ///
    /// Changes only with a basis change.
    column_variables: Vec<Variable>,
    /// Which variable is basic in each of the `m` constraint rows.
    ///
    /// Changes only with a basis change.
    row_variables: Vec<Variable>,
}

impl<F: RealField> Tableau<F> {
    /// Create the initial dictionary, in which all slacks are basic.
    ///
    /// Constraint row `i` reads `s_i = b_i - sum_j A_ij x_j + x_a`, where `x_a` is the artificial
    /// variable. The objective row holds `c` and the auxiliary objective is `-x_a`.
    pub fn new(problem: &StandardForm<F>) -> Self {
        let m = problem.nr_constraints();
        let n = problem.nr_variables();

        let mut matrix = Dense::zeros(m + 2, n + 2);
        for (i, (row, &b)) in problem.constraints().iter().zip(problem.b()).enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix[(i, j)] = -value;
            }
            matrix[(i, n)] = F::one();
            matrix[(i, n + 1)] = b;
        }
        for (j, &cost) in problem.c().iter().enumerate() {
            matrix[(m, j)] = cost;
        }
        matrix[(m + 1, n)] = -F::one();

        Self {
            matrix,
            column_variables: (0..n).map(Variable::Original)
                .chain(Some(Variable::Artificial))
                .collect(),
            row_variables: (0..m).map(Variable::Slack).collect(),
        }
    }

    /// The constraint row with the most negative constant, if there is any negative constant.
    ///
    /// On exact ties the first row is chosen. If this returns `None`, all slacks being basic is
    /// feasible.
    pub fn most_infeasible_row(&self) -> Option<usize> {
        let mut most_infeasible: Option<(usize, F)> = None;
        for i in 0..self.nr_constraints() {
            let constant = self.constant(i);
            let smallest = most_infeasible.map_or(F::zero(), |(_, value)| value);
            if constant < smallest {
                most_infeasible = Some((i, constant));
            }
        }

        most_infeasible.map(|(i, _)| i)
    }

    /// Exchange the basic variable of row `pivot_row` with the non-basic variable of column
    /// `pivot_column` by a Gauss-Jordan step.
    ///
    /// After the step, the column holds the coefficients of the leaving variable.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: Constraint row index, in range `0` until `self.nr_constraints()`.
    /// * `pivot_column`: Column index, in range `0` until `self.nr_pivot_columns()`. The pivot
    /// element should not be zero.
    pub fn pivot(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_constraints());
        debug_assert!(pivot_column < self.nr_pivot_columns());
        debug_assert!(self.matrix[(pivot_row, pivot_column)] != F::zero());

        std::mem::swap(
            &mut self.column_variables[pivot_column],
            &mut self.row_variables[pivot_row],
        );

        let inverse = F::one() / self.matrix[(pivot_row, pivot_column)];
        for (j, value) in self.matrix.row_mut(pivot_row).iter_mut().enumerate() {
            *value = if j == pivot_column { inverse } else { -*value * inverse };
        }
        let pivot_values = self.matrix.row(pivot_row).to_vec();

        for i in (0..self.matrix.nr_rows()).filter(|&i| i != pivot_row) {
            let factor = self.matrix[(i, pivot_column)];
            for (j, value) in self.matrix.row_mut(i).iter_mut().enumerate() {
                if j != pivot_column {
                    *value = *value + pivot_values[j] * factor;
                }
            }
            self.matrix[(i, pivot_column)] = factor * inverse;
        }
    }

    /// Determine the row to pivot on, given the column.
    ///
    /// Only rows with a coefficient below `-epsilon` in the column limit the increase of the
    /// entering variable. Of those, the row with the tightest limit is chosen: the largest ratio
    /// between constant and coefficient, both ratios being at most zero. Ratios within `epsilon`
    /// of each other are equal, and among equal ratios the row whose basic variable is smallest
    /// leaves (Bland's anti cycling algorithm).
    ///
    /// Because this method allows for less strategy and heuristics, it is not included in the
    /// `PivotRule` trait.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the entering variable can increase without
    /// bound.
    pub fn select_leaving_row(&self, pivot_column: usize, epsilon: F) -> Option<usize> {
        debug_assert!(pivot_column < self.nr_pivot_columns());

        // (chosen row, its ratio)
        let mut chosen: Option<(usize, F)> = None;
        for i in 0..self.nr_constraints() {
            let coefficient = self.coefficient(i, pivot_column);
            if coefficient < -epsilon {
                let ratio = self.constant(i) / coefficient;
                match &mut chosen {
                    Some((row, chosen_ratio)) => {
                        let difference = *chosen_ratio - ratio;
                        let tighter = difference < -epsilon;
                        let tie_won = difference.is_negligible(epsilon)
                            && self.row_variables[i] < self.row_variables[*row];
                        if tighter || tie_won {
                            *row = i;
                            *chosen_ratio = ratio;
                        }
                    },
                    None => chosen = Some((i, ratio)),
                }
            }
        }

        chosen.map(|(row, _)| row)
    }

    /// Values of the original variables in the current basic solution.
    ///
    /// Variables that are not basic are zero.
    pub fn current_solution(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_variables()];
        for (i, variable) in self.row_variables.iter().enumerate() {
            if let &Variable::Original(j) = variable {
                values[j] = self.constant(i);
            }
        }

        values
    }

    /// Coefficient at a row and column of the tableau, objective rows included.
    pub fn coefficient(&self, i: usize, j: usize) -> F {
        self.matrix[(i, j)]
    }

    /// Constant term of a row, objective rows included.
    pub fn constant(&self, i: usize) -> F {
        self.matrix[(i, self.constant_column())]
    }

    /// Coefficient of a column in the objective row.
    pub fn relative_cost(&self, j: usize) -> F {
        self.coefficient(self.objective_row(), j)
    }

    /// Coefficient of a column in the auxiliary objective row.
    pub fn relative_infeasibility(&self, j: usize) -> F {
        self.coefficient(self.auxiliary_row(), j)
    }

    /// Get the value of the objective function at the current basic solution.
    pub fn objective_function_value(&self) -> F {
        self.constant(self.objective_row())
    }

    /// Value of the auxiliary objective, `-x_a`. It is negative as long as the current basic
    /// solution violates a constraint.
    pub fn infeasibility(&self) -> F {
        self.constant(self.auxiliary_row())
    }

    /// The variable currently represented by column `j`.
    pub fn column_variable(&self, j: usize) -> Variable {
        self.column_variables[j]
    }

    /// The basic variable of constraint row `i`.
    pub fn row_variable(&self, i: usize) -> Variable {
        self.row_variables[i]
    }

    /// Number of constraint rows `m`.
    pub fn nr_constraints(&self) -> usize {
        self.row_variables.len()
    }

    /// Number of original variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.column_variables.len() - 1
    }

    /// Number of columns that can be pivoted on, `n + 1`.
    pub fn nr_pivot_columns(&self) -> usize {
        self.column_variables.len()
    }

    /// Column in which the artificial variable starts.
    pub fn artificial_column(&self) -> usize {
        self.nr_variables()
    }

    fn constant_column(&self) -> usize {
        self.nr_pivot_columns()
    }

    fn objective_row(&self) -> usize {
        self.nr_constraints()
    }

    fn auxiliary_row(&self) -> usize {
        self.nr_constraints() + 1
    }
}

/// Check whether every variable is represented exactly once, by a column or by a row.
///
/// Only used for debug purposes.
pub fn is_consistent<F>(tableau: &Tableau<F>) -> bool {
    let mut variables = tableau.column_variables.iter()
        .chain(&tableau.row_variables)
        .copied()
        .collect::<Vec<_>>();
    variables.sort_unstable();
    let n = tableau.column_variables.len() - 1;
    let m = tableau.row_variables.len();

    variables.into_iter().eq((0..n).map(Variable::Original)
        .chain(Some(Variable::Artificial))
        .chain((0..m).map(Variable::Slack)))
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Variable::Original(j) => write!(f, "x{}", j),
            Variable::Artificial => f.write_str("xa"),
            Variable::Slack(i) => write!(f, "s{}", i),
        }
    }
}

impl<F: RealField> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        const WIDTH: usize = 10;

        write!(f, "{:>6}", "")?;
        for variable in &self.column_variables {
            write!(f, "{:>WIDTH$}", variable.to_string())?;
        }
        writeln!(f, "{:>WIDTH$}", "constant")?;

        for i in 0..self.matrix.nr_rows() {
            let label = match i {
                i if i < self.nr_constraints() => self.row_variables[i].to_string(),
                i if i == self.objective_row() => "cost".to_string(),
                _ => "aux".to_string(),
            };
            write!(f, "{:>6}", label)?;
            for value in self.matrix.row(i) {
                write!(f, "{:>WIDTH$.4}", value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
