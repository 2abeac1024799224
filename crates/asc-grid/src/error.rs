//! Error types for ASCII grid parsing.

use thiserror::Error;

/// Result type for grid parsing operations.
pub type GridResult<T> = Result<T, GridError>;

/// Fatal conditions raised while parsing a grid file.
///
/// Recoverable structural problems (header key mismatches, rows with the
/// wrong column count, too many or too few lines) are logged and never
/// surface here.
#[derive(Error, Debug)]
pub enum GridError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all six header lines were read
    #[error("header truncated: expected {expected} line, got end of input")]
    TruncatedHeader { expected: &'static str },

    /// A header line had no value token
    #[error("header line '{line}' has no value for {field}")]
    MissingHeaderValue { field: &'static str, line: String },

    /// A header value failed numeric conversion
    #[error("header field {field} has unparsable value '{value}'")]
    BadHeaderValue { field: &'static str, value: String },

    /// The header declared a zero-sized grid
    #[error("invalid grid dimensions: {ncols} x {nrows}")]
    InvalidDimensions { ncols: usize, nrows: usize },

    /// A data-row token failed numeric conversion
    #[error("line {line}, column {col}: unparsable height '{value}'")]
    BadHeightValue {
        line: usize,
        col: usize,
        value: String,
    },
}
