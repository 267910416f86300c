//! Wrap-aware day-of-year windows and dated windows.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;
use crate::month_day::{MonthDayKey, REFERENCE_YEAR};
use crate::sequence::DaySequence;

/// Tests whether `key` lies in the day-of-year window `[start, end]`.
///
/// When `start <= end` the window is the closed interval between them. When
/// `start > end` the window wraps the year boundary and contains every key
/// on or after `start` or on or before `end`. Every day-of-year membership
/// test in the workspace goes through this function.
pub fn in_window(key: MonthDayKey, start: MonthDayKey, end: MonthDayKey) -> bool {
    if start <= end {
        start <= key && key <= end
    } else {
        key >= start || key <= end
    }
}

/// A day-of-year window between two [`MonthDayKey`]s, possibly wrapping
/// from December into January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayWindow {
    start: MonthDayKey,
    end: MonthDayKey,
}

impl DayWindow {
    /// Creates a window. Any pair of keys is valid; `start > end` wraps.
    pub fn new(start: MonthDayKey, end: MonthDayKey) -> Self {
        Self { start, end }
    }

    /// Returns the first key of the window.
    pub fn start(self) -> MonthDayKey {
        self.start
    }

    /// Returns the last key of the window.
    pub fn end(self) -> MonthDayKey {
        self.end
    }

    /// Returns `true` when the window crosses the year boundary.
    pub fn wraps(self) -> bool {
        self.start > self.end
    }

    /// Returns `true` when `key` is inside the window.
    pub fn contains(self, key: MonthDayKey) -> bool {
        in_window(key, self.start, self.end)
    }
}

/// A `(start, end)` pair of timestamps with `end >= start`.
///
/// Used both for the reporting range of an analysis and for the sliding
/// climatological comparison window. Its `(month, day)` projection may wrap
/// the year boundary even though the timestamps themselves are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// Creates a window from two timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvertedWindow`] if `end < start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, CalendarError> {
        if end < start {
            return Err(CalendarError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the trailing window that ends on `anchor` in the reference
    /// year and starts `days` calendar days earlier.
    ///
    /// The window therefore spans `days + 1` calendar days. It is only ever
    /// used through its `(month, day)` projection.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the reference date cannot
    /// be built (never for valid keys).
    pub fn trailing(anchor: MonthDayKey, days: u32) -> Result<Self, CalendarError> {
        let end = anchor.in_year(REFERENCE_YEAR)?.and_time(NaiveTime::MIN);
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(CalendarError::YearOutOfRange {
                year: REFERENCE_YEAR,
            })?;
        Ok(Self { start, end })
    }

    /// Returns the start timestamp.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end timestamp.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the calendar date of the start timestamp.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Returns the calendar date of the end timestamp.
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Returns `true` when `timestamp` lies in `[start, end]`.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Returns `true` when the two windows share at least one instant.
    pub fn overlaps(&self, other: &DateWindow) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Projects the window onto its `(month, day)` keys.
    pub fn month_day_window(&self) -> DayWindow {
        DayWindow::new(MonthDayKey::of(self.start), MonthDayKey::of(self.end))
    }

    /// Shifts both endpoints forward by exactly one calendar day.
    ///
    /// # Panics
    ///
    /// Panics if the shifted end falls outside the representable date range.
    pub fn advance_one_day(&self) -> Self {
        Self {
            start: self.start + Days::new(1),
            end: self.end + Days::new(1),
        }
    }

    /// Iterates the calendar dates from the start date through the end date.
    pub fn days(&self) -> DaySequence {
        DaySequence::new(self.start.date(), self.end.date())
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
