//! # Error reporting for solving
//!
//! Infeasibility and unboundedness are regular outcomes, see `OptimizationResult`. The errors in
//! this module describe situations in which no outcome could be determined.
use thiserror::Error;

use crate::algorithm::simplex::config::Budget;

/// Reasons for which a linear program could not be solved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The problem is malformed: dimensions don't agree, it is empty or contains values that are
    /// not finite.
    ///
    /// The contained `String` is a message for the end user.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A solver parameter was set to a value it can't be used with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The solver exhausted its budget before reaching a terminal state.
    #[error("did not converge within the {budget} after {iterations} pivots")]
    NonConvergence {
        /// The budget that was exceeded.
        budget: Budget,
        /// Number of pivots performed up to that moment.
        iterations: usize,
    },
}
