//! Error types for the ndvi-phenology library.

use thiserror::Error;

/// Result type alias for phenology operations.
pub type Result<T> = std::result::Result<T, PhenologyError>;

/// Errors that can occur while building or analysing a vegetation-index series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhenologyError {
    /// Input series is empty.
    #[error("empty input data")]
    EmptyData,

    /// Dates are not strictly increasing.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// A value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },

    /// Dates and values have different lengths.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Malformed input row (unparseable date, non-numeric value, missing column).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading or writing tabular data failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl PhenologyError {
    /// Whether this error belongs to the invalid-input family.
    ///
    /// These are raised for an empty, unordered or non-numeric series and are
    /// never recoverable by retrying.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PhenologyError::EmptyData
                | PhenologyError::TimestampError(_)
                | PhenologyError::NonFiniteValue { .. }
                | PhenologyError::DimensionMismatch { .. }
                | PhenologyError::InvalidInput(_)
        )
    }
}

impl From<csv::Error> for PhenologyError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            PhenologyError::Io(err.to_string())
        } else {
            PhenologyError::InvalidInput(err.to_string())
        }
    }
}

impl From<std::io::Error> for PhenologyError {
    fn from(err: std::io::Error) -> Self {
        PhenologyError::Io(err.to_string())
    }
}
