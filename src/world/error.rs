//! Error types for tuning data loading.

use thiserror::Error;

/// Errors that can occur when loading the tuning file.
///
/// All of these degrade to compiled-in defaults at startup; none are
/// fatal.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}
