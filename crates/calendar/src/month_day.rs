//! Year-agnostic `(month, day)` keys and month-length tables.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

/// Leap year used when a `(month, day)` key has to be placed on a concrete
/// date without any year context. Being a leap year, it can hold Feb 29.
pub const REFERENCE_YEAR: i32 = 2000;

/// Number of days in each month of a leap year (index 0 unused).
pub(crate) const MAX_DAYS_PER_MONTH: [u32; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of month-day slots in a 12 x 31 grid; not every slot is a valid key.
pub(crate) const SLOT_COUNT: usize = 12 * 31;

/// A `(month, day)` pair stripped of its year.
///
/// Ordering is lexicographic on `(month, day)`, so Jan 1 is the smallest key
/// and Dec 31 the largest. Feb 29 is a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDayKey {
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl MonthDayKey {
    /// Number of distinct slots returned by [`slot`](Self::slot).
    pub const SLOTS: usize = SLOT_COUNT;

    /// Creates a key from a month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the
    /// month in a leap year.
    pub fn new(month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = MAX_DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { month, day })
    }

    /// Projects any dated value onto its `(month, day)` key.
    pub fn of(date: impl Datelike) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the slot index `(month - 1) * 31 + (day - 1)`, in `0..SLOTS`.
    pub fn slot(self) -> usize {
        (self.month as usize - 1) * 31 + (self.day as usize - 1)
    }

    /// Inverse of [`slot`](Self::slot). Returns `None` for slots that do not
    /// name a real day (e.g. Feb 30) or are out of range.
    pub fn from_slot(slot: usize) -> Option<Self> {
        if slot >= SLOT_COUNT {
            return None;
        }
        let month = (slot / 31) as u32 + 1;
        let day = (slot % 31) as u32 + 1;
        Self::new(month, day).ok()
    }

    /// Places the key on a concrete date in `year`.
    ///
    /// Feb 29 falls back to Feb 28 when `year` is not a leap year, so season
    /// tables that end on Feb 29 always resolve to the last day of February.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if `year` cannot be
    /// represented.
    pub fn in_year(self, year: i32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .or_else(|| {
                if self.month == 2 && self.day == 29 {
                    NaiveDate::from_ymd_opt(year, 2, 28)
                } else {
                    None
                }
            })
            .ok_or(CalendarError::YearOutOfRange { year })
    }
}

impl From<NaiveDate> for MonthDayKey {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl From<NaiveDateTime> for MonthDayKey {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self::of(timestamp)
    }
}

impl std::fmt::Display for MonthDayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Returns the last day (28..=31) of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
/// [`CalendarError::YearOutOfRange`] if the year cannot be represented.
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(CalendarError::YearOutOfRange { year })
}

/// Returns the last hourly timestamp (23:00) of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN) + chrono::TimeDelta::hours(23)
}
