//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

#![allow(non_snake_case)]

mod canonical;
mod properties;
