//! # Pivot rules
//!
//! Strategies for choosing the variable that enters the basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::RealField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. That decision is made by
/// `Tableau::select_leaving_row`, independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule.
    ///
    /// # Return value
    ///
    /// The index of the column to enter the basis, or `None` if the tableau is optimal for the
    /// objective currently being pursued.
    fn select_entering_column<F: RealField>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize>;

    /// Column selection on the infeasibility alone, ignoring the objective.
    ///
    /// # Return value
    ///
    /// The index of a column that decreases the infeasibility, or `None` if there is no such
    /// column.
    fn select_restoring_column<F: RealField>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize>;
}

/// Bland's rule on the identities of the variables, pursuing feasibility before optimality.
///
/// A column is profitable when increasing its variable decreases the infeasibility, or when it
/// doesn't change the infeasibility and increases the objective. Of the profitable columns, the
/// one whose variable is smallest enters. Together with the tie breaking in the ratio test, this
/// rules out cycling on degenerate tableaus.
pub struct SmallestIdentity;

impl PivotRule for SmallestIdentity {
    fn new() -> Self {
        Self
    }

    fn select_entering_column<F: RealField>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize> {
        (0..tableau.nr_pivot_columns())
            .filter(|&j| is_profitable(tableau, j, epsilon))
            .min_by_key(|&j| tableau.column_variable(j))
    }

    fn select_restoring_column<F: RealField>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize> {
        (0..tableau.nr_pivot_columns())
            .filter(|&j| tableau.relative_infeasibility(j) > epsilon)
            .min_by_key(|&j| tableau.column_variable(j))
    }
}

/// Whether increasing the variable of column `j` moves towards feasibility, or towards optimality
/// without losing feasibility.
pub fn is_profitable<F: RealField>(tableau: &Tableau<F>, j: usize, epsilon: F) -> bool {
    let infeasibility = tableau.relative_infeasibility(j);

    infeasibility > epsilon
        || (infeasibility.is_negligible(epsilon) && tableau.relative_cost(j) > epsilon)
}
