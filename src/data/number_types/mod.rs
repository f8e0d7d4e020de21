//! # Number types
//!
//! The simplex implementation is written against a small trait rather than against `f64`, such
//! that the same code runs with `f32` when memory matters more than precision.
pub mod traits;
