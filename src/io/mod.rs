//! # Reading of linear programs
//!
//! This module provides read functionality for linear program formats. Problems are described in
//! JSON, as an object with the fields `a` (list of constraint rows), `b` and `c`:
//!
//! ```json
//! {"a": [[1, -1], [-1, 1], [1, 1]], "b": [1, 1, 3], "c": [2, 1]}
//! ```
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::data::linear_program::standard_form::StandardForm;
use crate::io::error::ImportError;

pub mod error;

/// A problem as it appears in a file, before its dimensions are checked.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawProblem {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    c: Vec<f64>,
}

/// Import a problem from a file.
///
/// Currently only supports the JSON filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents can't be parsed
/// or the dimensions don't agree, an error type is returned.
pub fn import(file_path: &Path) -> Result<StandardForm<f64>, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;

    // Choose the right parser
    match file_path.extension().and_then(|extension| extension.to_str()) {
        Some("json") => parse(&program),
        Some(extension) => Err(ImportError::FileExtension(format!(
            "Could not recognise file extension \"{}\" of file: {:?}",
            extension, file_path,
        ))),
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}

/// Parse a problem from a JSON string.
///
/// # Errors
///
/// `ImportError::Parse` for malformed JSON, `ImportError::LinearProgram` if the matrix and vectors
/// don't describe a valid problem.
pub fn parse(program: &str) -> Result<StandardForm<f64>, ImportError> {
    let RawProblem { a, b, c } = serde_json::from_str(program)?;

    Ok(StandardForm::new(a, b, c)?)
}
