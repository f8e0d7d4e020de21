//! # The Simplex algorithm
//!
//! A dense tableau implementation that searches for feasibility and optimality in a single loop.
//! A single artificial variable is added to every constraint. While that variable is positive, the
//! auxiliary objective `-x_a` governs the choice of entering variables; once it has been driven to
//! zero, the real objective takes over. There is no hard boundary between the two phases.
use std::time::Instant;

use enum_map::{Enum, EnumMap};
use log::{debug, trace};

use crate::algorithm::{OptimizationResult, SolveError};
use crate::algorithm::simplex::config::{Budget, SolverConfig};
use crate::algorithm::simplex::pivot_rule::{PivotRule, SmallestIdentity};
use crate::algorithm::simplex::tableau::{is_consistent, Tableau};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::RealField;

pub mod config;
pub mod pivot_rule;
pub mod tableau;


/// The part of the search a pivot belongs to.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The current basic solution violates a constraint.
    FeasibilityRestoration,
    /// The current basic solution is feasible, the objective is being improved.
    Optimizing,
}

/// Work done while solving a single problem.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    /// Number of pivots per phase.
    pub pivots: EnumMap<Phase, usize>,
}

impl Statistics {
    /// Number of pivots over both phases.
    pub fn total_pivots(&self) -> usize {
        self.pivots.values().sum()
    }
}

/// Solves linear programs in standard form with the configured tolerance and budgets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Simplex<F> {
    config: SolverConfig<F>,
}

impl<F: RealField> Simplex<F> {
    /// Create a solver.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidConfig` if the tolerance is not strictly positive and finite.
    pub fn new(config: SolverConfig<F>) -> Result<Self, SolveError> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Maximize the objective of a linear program.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    ///
    /// # Errors
    ///
    /// `SolveError::NonConvergence` if a budget was exceeded.
    pub fn solve(&self, problem: &StandardForm<F>) -> Result<OptimizationResult<F>, SolveError> {
        self.solve_with_statistics(problem).map(|(result, _)| result)
    }

    /// Maximize the objective of a linear program, reporting the work that was done.
    ///
    /// # Errors
    ///
    /// `SolveError::NonConvergence` if a budget was exceeded.
    pub fn solve_with_statistics(
        &self,
        problem: &StandardForm<F>,
    ) -> Result<(OptimizationResult<F>, Statistics), SolveError> {
        self.primal::<SmallestIdentity>(Tableau::new(problem))
    }

    /// Pivot until no column is profitable, or until an entering variable is unbounded.
    ///
    /// The first pivot, if any, brings the artificial variable into the basis in place of the most
    /// violated constraint. After it, all constants are nonnegative.
    fn primal<PR: PivotRule>(
        &self,
        mut tableau: Tableau<F>,
    ) -> Result<(OptimizationResult<F>, Statistics), SolveError> {
        let epsilon = self.config.epsilon;
        let started = Instant::now();
        let mut rule = PR::new();
        let mut statistics = Statistics::default();

        let mut pending_row = tableau.most_infeasible_row();
        let mut column = tableau.artificial_column();
        let mut phase = match pending_row {
            Some(_) => Phase::FeasibilityRestoration,
            None => Phase::Optimizing,
        };
        debug!(
            "Solving with {} constraints and {} variables, starting in phase {:?}",
            tableau.nr_constraints(), tableau.nr_variables(), phase,
        );

        loop {
            if let Some(row) = pending_row {
                self.check_budget(&statistics, started)?;

                trace!(
                    "Pivot {}: {} enters, {} leaves",
                    statistics.total_pivots(), tableau.column_variable(column), tableau.row_variable(row),
                );
                tableau.pivot(row, column);
                statistics.pivots[phase] += 1;
                debug_assert!(is_consistent(&tableau));
                trace!("Tableau after pivot:\n{}", tableau);

                let next_phase = if tableau.infeasibility() < -epsilon {
                    Phase::FeasibilityRestoration
                } else {
                    Phase::Optimizing
                };
                if next_phase != phase {
                    debug!("Phase {:?} after {} pivots", next_phase, statistics.total_pivots());
                    phase = next_phase;
                }
            }

            match rule.select_entering_column(&tableau, epsilon) {
                Some(entering) => column = entering,
                None => break,
            }

            match tableau.select_leaving_row(column, epsilon) {
                Some(leaving) => pending_row = Some(leaving),
                None if tableau.infeasibility() < -epsilon => {
                    debug!(
                        "{} is unbounded while infeasibility {} remains, settling feasibility first",
                        tableau.column_variable(column), -tableau.infeasibility(),
                    );
                    let result = self.settle_feasibility(&mut rule, &mut tableau, &mut statistics, started)?;
                    return Ok((result, statistics));
                },
                None => {
                    debug!(
                        "Unbounded: {} can increase without limit after {} pivots",
                        tableau.column_variable(column), statistics.total_pivots(),
                    );
                    return Ok((OptimizationResult::Unbounded, statistics));
                },
            }
        }

        let result = if tableau.infeasibility() < -epsilon {
            debug!("Infeasible: infeasibility {} remains after {} pivots", -tableau.infeasibility(), statistics.total_pivots());
            OptimizationResult::Infeasible
        } else {
            let solution = Solution::new(tableau.objective_function_value(), tableau.current_solution());
            debug!("Optimal value {} after {} pivots", solution.objective_value, statistics.total_pivots());
            OptimizationResult::FiniteOptimum(solution)
        };

        Ok((result, statistics))
    }

    /// Pivot on the infeasibility alone, after a ray improving the objective has been found.
    ///
    /// That ray satisfies `Ad <= 0` and `d >= 0`, so the problem is unbounded as soon as any
    /// feasible point exists.
    fn settle_feasibility<PR: PivotRule>(
        &self,
        rule: &mut PR,
        tableau: &mut Tableau<F>,
        statistics: &mut Statistics,
        started: Instant,
    ) -> Result<OptimizationResult<F>, SolveError> {
        let epsilon = self.config.epsilon;

        while tableau.infeasibility() < -epsilon {
            let Some(column) = rule.select_restoring_column(tableau, epsilon) else { break };
            let Some(row) = tableau.select_leaving_row(column, epsilon) else { break };
            self.check_budget(statistics, started)?;

            trace!(
                "Pivot {}: {} enters, {} leaves",
                statistics.total_pivots(), tableau.column_variable(column), tableau.row_variable(row),
            );
            tableau.pivot(row, column);
            statistics.pivots[Phase::FeasibilityRestoration] += 1;
            debug_assert!(is_consistent(tableau));
        }

        if tableau.infeasibility() < -epsilon {
            debug!("Infeasible: infeasibility {} remains after {} pivots", -tableau.infeasibility(), statistics.total_pivots());
            Ok(OptimizationResult::Infeasible)
        } else {
            debug!("Unbounded: feasible after {} pivots", statistics.total_pivots());
            Ok(OptimizationResult::Unbounded)
        }
    }

    fn check_budget(&self, statistics: &Statistics, started: Instant) -> Result<(), SolveError> {
        let iterations = statistics.total_pivots();

        if let Some(max_iterations) = self.config.max_iterations {
            if iterations >= max_iterations {
                return Err(SolveError::NonConvergence { budget: Budget::Iterations(max_iterations), iterations });
            }
        }
        if let Some(time_limit) = self.config.time_limit {
            if started.elapsed() >= time_limit {
                return Err(SolveError::NonConvergence { budget: Budget::Time(time_limit), iterations });
            }
        }

        Ok(())
    }
}
