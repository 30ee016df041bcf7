//! Error types for temperature series operations.

use thiserror::Error;

/// The error type for all series operations.
///
/// Construction and append report [`SeriesError::ValueOutOfRange`] and leave
/// no partial effect behind. Aggregate queries report
/// [`SeriesError::EmptySeries`] when there is nothing to aggregate. Filter
/// queries never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// A reading is below the minimal bound of the series (or is NaN).
    #[error("reading {value} at index {index} is below the minimal bound {bound}")]
    ValueOutOfRange {
        /// Position of the offending reading in the submitted batch.
        index: usize,
        /// The rejected reading.
        value: f64,
        /// The bound it was checked against.
        bound: f64,
    },

    /// An aggregate was requested from a series with no readings.
    #[error("cannot compute {operation} of an empty series")]
    EmptySeries {
        /// Name of the operation that needed at least one reading.
        operation: &'static str,
    },

    /// A custom minimal bound is not a finite number.
    #[error("invalid minimal bound {bound}: must be finite")]
    InvalidBound {
        /// The rejected bound.
        bound: f64,
    },
}

/// Type alias for `Result<T, SeriesError>`.
pub type Result<T> = std::result::Result<T, SeriesError>;
