//! # Error reporting for reading of linear program files
//!
//! Describes any problems encountered during reading and parsing.
use std::io;

use thiserror::Error;

use crate::algorithm::SolveError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error("could not read the problem file")]
    IO(#[source] io::Error),
    /// Contents of the file could not be parsed.
    ///
    /// # Note
    ///
    /// If the linear program is inconsistent, that will not be represented with this error. This
    /// variant should only be created for syntactically incorrect files.
    #[error("could not parse the problem file")]
    Parse(#[from] serde_json::Error),
    /// The parsed matrix and vectors don't describe a linear program in standard form.
    ///
    /// For example, a constraint row might have more coefficients than there are variables.
    #[error("the problem file describes an inconsistent linear program")]
    LinearProgram(#[from] SolveError),
}
