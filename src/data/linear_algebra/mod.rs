//! # Linear algebra primitives
//!
//! Dense storage for the simplex tableau.

pub mod matrix;
