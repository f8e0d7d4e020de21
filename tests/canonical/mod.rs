//! # Small problems with known outcomes
//!
//! Each problem is stored as a JSON file next to this module.
use std::path::{Path, PathBuf};

/// # Import and solve
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("json")
}
