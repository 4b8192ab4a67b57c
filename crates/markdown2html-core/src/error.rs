//! Error types for markdown2html

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for markdown2html operations.
///
/// The conversion itself never fails; every variant here comes from the
/// surrounding command-line and file handling.
#[derive(Error, Debug)]
pub enum Markdown2HtmlError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bad invocation
    #[error("{0}")]
    Usage(String),

    /// The input file does not exist
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    /// The input exists but is not a regular file
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
}

impl Markdown2HtmlError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for markdown2html operations
pub type Result<T> = std::result::Result<T, Markdown2HtmlError>;
