//! Error types for the firewx-series crate.

use chrono::NaiveDateTime;

/// Malformed or empty input series. Always fatal for the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the input holds no records.
    #[error("station '{station}' has no records")]
    Empty {
        /// Station identifier.
        station: String,
    },

    /// Returned when a required column is absent.
    #[error("station '{station}' is missing required column '{column}'")]
    MissingColumn {
        /// Station identifier.
        station: String,
        /// Name of the absent column.
        column: &'static str,
    },

    /// Returned when column lengths disagree.
    #[error("{column}: expected {expected} values, got {got}")]
    LengthMismatch {
        /// Name of the mismatched column.
        column: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when one or more rows fail validation.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a timestamp precedes the one before it.
    #[error("row {row}: timestamp {current} precedes previous timestamp {previous}")]
    OutOfOrder {
        /// Zero-based row index of the offending record.
        row: usize,
        /// Timestamp of the previous row.
        previous: NaiveDateTime,
        /// Timestamp of the offending row.
        current: NaiveDateTime,
    },

    /// Returned when the same hour appears twice.
    #[error("row {row}: duplicate hour {timestamp}")]
    DuplicateHour {
        /// Zero-based row index of the second occurrence.
        row: usize,
        /// The repeated timestamp.
        timestamp: NaiveDateTime,
    },
}
