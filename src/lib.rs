//! # A dense linear program solver
//!
//! Linear programs of the form max `c^T x` s.t. `Ax <= b`, `x >= 0` are solved using a tableau
//! Simplex Method that looks for feasibility and optimality in the same pivoting loop, as described
//! in chapter 2 of Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use relp_tableau::algorithm::{solve, OptimizationResult};
//!
//! let result = solve(
//!     vec![vec![1.0, -1.0], vec![-1.0, 1.0], vec![1.0, 1.0]],
//!     vec![1.0, 1.0, 3.0],
//!     vec![2.0, 1.0],
//! ).unwrap();
//! assert!(matches!(result, OptimizationResult::FiniteOptimum(_)));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
