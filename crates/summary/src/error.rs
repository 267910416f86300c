//! Error types for the firewx-summary crate.

use chrono::NaiveDateTime;
use firewx_calendar::CalendarError;
use firewx_series::SeriesError;

/// Errors that can occur while resolving a range or aggregating a series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SummaryError {
    /// The input series is malformed or empty.
    #[error(transparent)]
    Data(#[from] SeriesError),

    /// A date or window could not be constructed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A requested season or rolling range is not covered by the data.
    #[error(
        "insufficient data for {request}: requested {start} to {end}, data covers {data_start} to {data_end}"
    )]
    InsufficientData {
        /// What was asked for, e.g. `"season DJF"` or `"rolling 14 days"`.
        request: String,
        /// Requested start.
        start: NaiveDateTime,
        /// Requested end.
        end: NaiveDateTime,
        /// First timestamp in the series.
        data_start: NaiveDateTime,
        /// Last timestamp in the series.
        data_end: NaiveDateTime,
    },

    /// Fire season detection found no year with data in the season's end month.
    #[error(
        "no fire season found (months {start_month} to {end_month}) in data covering {data_start} to {data_end}"
    )]
    SeasonNotFound {
        /// Detected first month of the season.
        start_month: u32,
        /// Detected last month of the season.
        end_month: u32,
        /// First timestamp in the series.
        data_start: NaiveDateTime,
        /// Last timestamp in the series.
        data_end: NaiveDateTime,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn insufficient_data_reports_both_ranges() {
        let err = SummaryError::InsufficientData {
            request: "season DJF".to_string(),
            start: at(2018, 12, 1, 0),
            end: at(2019, 2, 28, 23),
            data_start: at(2019, 1, 1, 0),
            data_end: at(2019, 6, 30, 23),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("insufficient data for season DJF"));
        assert!(msg.contains("2018-12-01 00:00:00 to 2019-02-28 23:00:00"));
        assert!(msg.contains("data covers 2019-01-01 00:00:00"));
    }

    #[test]
    fn season_not_found_display() {
        let err = SummaryError::SeasonNotFound {
            start_month: 6,
            end_month: 9,
            data_start: at(2019, 1, 1, 0),
            data_end: at(2019, 3, 31, 23),
        };
        assert!(err.to_string().contains("months 6 to 9"));
    }

    #[test]
    fn series_error_is_transparent() {
        let inner = SeriesError::Empty {
            station: "PRF".to_string(),
        };
        let err = SummaryError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SummaryError>();
    }
}
