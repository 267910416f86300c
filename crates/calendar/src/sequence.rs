//! Day and month sequence generation.

use chrono::{Datelike, NaiveDate};

/// Iterator over every calendar date from a start date through an end date
/// (inclusive). Yields nothing when the end precedes the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySequence {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl DaySequence {
    /// Creates the sequence `start..=last`.
    pub fn new(start: NaiveDate, last: NaiveDate) -> Self {
        Self {
            next: (start <= last).then_some(start),
            last,
        }
    }
}

impl Iterator for DaySequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.last);
        Some(current)
    }
}

/// Generates the contiguous dates `start..=last`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use firewx_calendar::day_sequence;
///
/// let start = NaiveDate::from_ymd_opt(2019, 12, 30).unwrap();
/// let last = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
/// assert_eq!(day_sequence(start, last).len(), 4);
/// ```
pub fn day_sequence(start: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    DaySequence::new(start, last).collect()
}

/// A calendar month in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u32,
}

impl YearMonth {
    /// Returns the month containing `date`.
    pub fn of(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the following month, rolling December into January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the first day of the month, or `None` if out of range.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Generates every month from the month of `start` through the month of
/// `last` (inclusive), regardless of where in those months the dates fall.
pub fn month_sequence(start: NaiveDate, last: NaiveDate) -> Vec<YearMonth> {
    let first = YearMonth::of(start);
    let final_month = YearMonth::of(last);
    let mut months = Vec::new();
    let mut current = first;
    while current <= final_month {
        months.push(current);
        current = current.next();
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_when_inverted() {
        assert!(day_sequence(date(2020, 1, 2), date(2020, 1, 1)).is_empty());
    }

    #[test]
    fn single_day() {
        let dates = day_sequence(date(2020, 6, 15), date(2020, 6, 15));
        assert_eq!(dates, vec![date(2020, 6, 15)]);
    }

    #[test]
    fn leap_february() {
        let dates = day_sequence(date(2020, 2, 27), date(2020, 3, 1));
        assert_eq!(
            dates,
            vec![
                date(2020, 2, 27),
                date(2020, 2, 28),
                date(2020, 2, 29),
                date(2020, 3, 1)
            ]
        );
    }

    #[test]
    fn full_leap_year() {
        assert_eq!(day_sequence(date(2020, 1, 1), date(2020, 12, 31)).len(), 366);
    }

    #[test]
    fn year_month_next_wraps() {
        let dec = YearMonth {
            year: 2019,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            YearMonth {
                year: 2020,
                month: 1
            }
        );
    }

    #[test]
    fn month_sequence_extends_to_full_months() {
        let months = month_sequence(date(2019, 11, 20), date(2020, 2, 3));
        let labels: Vec<(i32, u32)> = months.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(labels, vec![(2019, 11), (2019, 12), (2020, 1), (2020, 2)]);
    }

    #[test]
    fn month_sequence_single_month() {
        let months = month_sequence(date(2020, 5, 1), date(2020, 5, 31));
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].first_day(), Some(date(2020, 5, 1)));
    }
}
