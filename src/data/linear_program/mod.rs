//! # Representing linear programs
//!
//! Linear programs are accepted in standard inequality form only: maximize `c^T x` subject to
//! `Ax <= b` and `x >= 0`. Any other form has to be rewritten by the caller.
pub mod standard_form;
pub mod solution;
