//! Error types for the trip-loader crate.
//!
//! Every failure here is fatal for one load attempt. The caller decides
//! whether to try again (the CLI does so through its restart prompt).

use thiserror::Error;

/// Errors that can occur while loading a city's trip file
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Backing file does not exist
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A row in the CSV file couldn't be read or deserialized
    ///
    /// `line` is 1-based and counts the header row.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The header row lacks one of the columns every city file must carry
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
