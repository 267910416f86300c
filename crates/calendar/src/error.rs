//! Error types for the firewx-calendar crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the firewx-calendar crate.
///
/// This enum covers validation failures for month and day values, dates
/// that fall outside the representable range, inverted windows, and
/// unrecognised season names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month.
        max_day: u32,
    },

    /// Returned when a year cannot be represented as a calendar date.
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a window ends before it starts.
    #[error("window end {end} is before start {start}")]
    InvertedWindow {
        /// Requested window start.
        start: NaiveDateTime,
        /// Requested window end.
        end: NaiveDateTime,
    },

    /// Returned when a season scheme name is not recognised.
    #[error("unknown season scheme '{name}' (expected meteorological or solar)")]
    UnknownScheme {
        /// The name that was provided.
        name: String,
    },

    /// Returned when a season label is not in either season table.
    #[error("unknown season '{name}' (expected DJF, MAM, JJA, SON, WINTER, SPRING, SUMMER, AUTUMN or FALL)")]
    UnknownSeason {
        /// The label that was provided.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 31,
            month: 4,
            max_day: 30,
        };
        assert_eq!(err.to_string(), "invalid day: 31 for month 4 (max 30)");
    }

    #[test]
    fn error_inverted_window() {
        let start = NaiveDate::from_ymd_opt(2020, 3, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = CalendarError::InvertedWindow { start, end };
        assert_eq!(
            err.to_string(),
            "window end 2020-03-01 00:00:00 is before start 2020-03-02 00:00:00"
        );
    }

    #[test]
    fn error_unknown_season_names_input() {
        let err = CalendarError::UnknownSeason {
            name: "monsoon".to_string(),
        };
        assert!(err.to_string().contains("'monsoon'"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
