//! Error types for firewx-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the firewx-io crate.
///
/// Covers missing files, CSV framing errors, absent key columns and cells
/// that cannot be parsed into the expected type.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when an input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error from the CSV reader or writer.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Wraps an operating-system I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when the header lacks a column needed to group rows.
    #[error("column '{column}' not found in header of {source_name}")]
    MissingColumn {
        /// Canonical name of the missing column.
        column: &'static str,
        /// File name or other description of the input.
        source_name: String,
    },

    /// Returned when a cell cannot be parsed.
    #[error("row {row}, column '{column}': cannot parse '{value}'")]
    Parse {
        /// One-based data row number (the header is row 0).
        row: usize,
        /// Canonical column name.
        column: &'static str,
        /// Raw cell contents.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            column: "id",
            source_name: "PRF.csv".to_string(),
        };
        assert_eq!(err.to_string(), "column 'id' not found in header of PRF.csv");
    }

    #[test]
    fn display_parse() {
        let err = IoError::Parse {
            row: 3,
            column: "hour",
            value: "noon".to_string(),
        };
        assert_eq!(err.to_string(), "row 3, column 'hour': cannot parse 'noon'");
    }

    #[test]
    fn from_io_error() {
        let err: IoError = std::io::Error::other("disk full").into();
        assert!(err.to_string().contains("disk full"));
    }
}
