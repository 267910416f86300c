//! Accumulated validation of input columns.
//!
//! Row-level problems (unconstructible timestamps, negative or infinite FWI)
//! are gathered into a single [`SeriesError::Validation`] so one pass reports
//! every bad row instead of only the first.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::SeriesError;

/// Maximum number of messages kept verbatim in the error details.
const MAX_DETAILS: usize = 10;

/// Accumulates validation errors and converts them into a single
/// [`SeriesError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `Ok(())` if nothing was recorded. Otherwise the details keep
    /// the first few messages and summarise the rest.
    pub(crate) fn finish(self) -> Result<(), SeriesError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let count = self.errors.len();
        let mut details = self
            .errors
            .iter()
            .take(MAX_DETAILS)
            .cloned()
            .collect::<Vec<_>>()
            .join("; ");
        if count > MAX_DETAILS {
            details.push_str(&format!("; ... and {} more", count - MAX_DETAILS));
        }
        Err(SeriesError::Validation { count, details })
    }
}

/// Returns the column's values, or [`SeriesError::MissingColumn`].
pub(crate) fn require<'a, T>(
    column: &'a Option<Vec<T>>,
    name: &'static str,
    station: &str,
) -> Result<&'a [T], SeriesError> {
    column
        .as_deref()
        .ok_or_else(|| SeriesError::MissingColumn {
            station: station.to_string(),
            column: name,
        })
}

/// Checks that a column has `expected` values.
pub(crate) fn check_length<T>(
    column: &[T],
    name: &'static str,
    expected: usize,
) -> Result<(), SeriesError> {
    if column.len() != expected {
        return Err(SeriesError::LengthMismatch {
            column: name,
            expected,
            got: column.len(),
        });
    }
    Ok(())
}

/// Builds one timestamp per row, recording every row whose date or hour is
/// not a real calendar instant.
pub(crate) fn build_timestamps(
    years: &[i32],
    months: &[u32],
    days: &[u32],
    hours: &[u32],
) -> (Vec<NaiveDateTime>, ValidationCollector) {
    let mut c = ValidationCollector::new();
    let mut timestamps = Vec::with_capacity(years.len());

    for (row, (((&y, &m), &d), &h)) in years
        .iter()
        .zip(months)
        .zip(days)
        .zip(hours)
        .enumerate()
    {
        match NaiveDate::from_ymd_opt(y, m, d).and_then(|date| date.and_hms_opt(h, 0, 0)) {
            Some(ts) => timestamps.push(ts),
            None => c.push(format!("row {row}: invalid timestamp {y}-{m}-{d} hour {h}")),
        }
    }

    (timestamps, c)
}

/// Normalises FWI values: NaN becomes missing; negative or infinite values
/// are recorded as errors.
pub(crate) fn check_fwi(values: &[Option<f64>]) -> (Vec<Option<f64>>, ValidationCollector) {
    let mut c = ValidationCollector::new();
    let mut out = Vec::with_capacity(values.len());

    for (row, value) in values.iter().enumerate() {
        match *value {
            Some(v) if v.is_nan() => out.push(None),
            Some(v) if v.is_infinite() => {
                c.push(format!("row {row}: non-finite FWI {v}"));
                out.push(None);
            }
            Some(v) if v < 0.0 => {
                c.push(format!("row {row}: negative FWI {v}"));
                out.push(None);
            }
            other => out.push(other),
        }
    }

    (out, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_empty_is_ok() {
        assert!(ValidationCollector::new().finish().is_ok());
    }

    #[test]
    fn collector_counts_and_joins() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        c.push("error two");
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            SeriesError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn collector_truncates_long_details() {
        let mut c = ValidationCollector::new();
        for i in 0..15 {
            c.push(format!("e{i}"));
        }
        match c.finish().unwrap_err() {
            SeriesError::Validation { count, details } => {
                assert_eq!(count, 15);
                assert!(details.ends_with("; ... and 5 more"));
                assert!(!details.contains("e10"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn require_reports_column_name() {
        let col: Option<Vec<u32>> = None;
        let err = require(&col, "hour", "PRF").unwrap_err();
        assert_eq!(
            err,
            SeriesError::MissingColumn {
                station: "PRF".to_string(),
                column: "hour",
            }
        );
    }

    #[test]
    fn check_length_mismatch() {
        let err = check_length(&[1, 2, 3], "day", 4).unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                column: "day",
                expected: 4,
                got: 3,
            }
        );
    }

    #[test]
    fn build_timestamps_flags_impossible_rows() {
        let (ts, c) = build_timestamps(&[2019, 2019, 2020], &[2, 2, 1], &[28, 29, 1], &[0, 0, 24]);
        assert_eq!(ts.len(), 1);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn check_fwi_normalises_nan_and_flags_negative() {
        let (values, c) = check_fwi(&[Some(1.0), Some(f64::NAN), None, Some(-0.5)]);
        assert_eq!(values, vec![Some(1.0), None, None, None]);
        assert_eq!(c.len(), 1);
    }
}
