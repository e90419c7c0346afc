//! Error types for period and series operations.
//!
//! This module defines [`SeriesError`] which covers every failure the engine can
//! report: malformed construction input, misaligned arithmetic, and calendar
//! fields that do not describe a real period. Numeric edge cases such as a
//! division by zero are not errors and never appear here.

use thiserror::Error;

use crate::{granularity::Granularity, period::Period};

/// Errors that can occur while building or combining series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The period and value arrays passed to a constructor differ in length.
    #[error("Length mismatch: {periods} periods but {values} values")]
    LengthMismatch {
        /// Number of periods supplied.
        periods: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// A period appears more than once in a series or horizon.
    #[error("Duplicate period: {0}")]
    DuplicatePeriod(Period),

    /// Two series combined element-wise do not share the same period set.
    #[error("Series are not aligned ({left} vs {right} periods): {period} is not in both")]
    Alignment {
        /// Number of periods in the left operand.
        left: usize,
        /// Number of periods in the right operand.
        right: usize,
        /// The first period found in one operand but not the other.
        period: Period,
    },

    /// A calendar field is out of range or the period leaves the representable calendar.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// A range of periods was requested between two different granularities.
    #[error("Mixed granularity: {first:?} and {last:?}")]
    MixedGranularity {
        /// Granularity of the first endpoint.
        first: Granularity,
        /// Granularity of the last endpoint.
        last: Granularity,
    },

    /// A period label could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Encoding or decoding a series failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Exporting a series to another representation failed.
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias using [`SeriesError`].
pub type Result<T> = std::result::Result<T, SeriesError>;
