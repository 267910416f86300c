//! Hourly FWI series for one station with precomputed lookup tables.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use firewx_calendar::{DateWindow, DayWindow, MonthDayKey, end_of_day};
use tracing::debug;

use crate::error::SeriesError;
use crate::input::SeriesInput;
use crate::validate::{build_timestamps, check_fwi, check_length, require};

/// One hour of one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRecord {
    /// Date and hour of the observation.
    pub timestamp: NaiveDateTime,
    /// FWI value (`>= 0`), or `None` when missing.
    pub fwi: Option<f64>,
}

/// An ordered, immutable collection of hourly FWI records for one station.
///
/// Built once by [`load`](Self::load). Timestamps are strictly increasing,
/// so every date range maps onto one contiguous slice of records.
#[derive(Debug, Clone)]
pub struct StationSeries {
    station_id: String,
    station_name: Option<String>,
    records: Vec<HourlyRecord>,

    /// Per month-day slot (see [`MonthDayKey::slot`]): record indices across
    /// all years, in time order.
    month_day_indices: Vec<Vec<usize>>,

    /// Per calendar month (index 0 = January): record indices across all years.
    month_indices: [Vec<usize>; 12],
}

impl StationSeries {
    /// Validates the input columns and builds the series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::MissingColumn`] if the FWI column or any
    /// date/hour column is absent, [`SeriesError::Empty`] if there are no
    /// rows, [`SeriesError::LengthMismatch`] if columns disagree in length,
    /// [`SeriesError::Validation`] for unconstructible timestamps or negative
    /// or infinite FWI values, and [`SeriesError::OutOfOrder`] /
    /// [`SeriesError::DuplicateHour`] if timestamps are not strictly
    /// increasing.
    pub fn load(input: SeriesInput) -> Result<Self, SeriesError> {
        let station = input.station_id.as_str();
        let fwi = require(&input.fwi, "fwi", station)?;
        let years = require(&input.year, "year", station)?;
        let months = require(&input.month, "month", station)?;
        let days = require(&input.day, "day", station)?;
        let hours = require(&input.hour, "hour", station)?;

        let n = fwi.len();
        if n == 0 {
            return Err(SeriesError::Empty {
                station: station.to_string(),
            });
        }
        check_length(years, "year", n)?;
        check_length(months, "month", n)?;
        check_length(days, "day", n)?;
        check_length(hours, "hour", n)?;

        let (timestamps, mut collector) = build_timestamps(years, months, days, hours);
        let (values, fwi_errors) = check_fwi(fwi);
        collector.extend(fwi_errors);
        collector.finish()?;

        for (row, pair) in timestamps.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            if current == previous {
                return Err(SeriesError::DuplicateHour {
                    row: row + 1,
                    timestamp: current,
                });
            }
            if current < previous {
                return Err(SeriesError::OutOfOrder {
                    row: row + 1,
                    previous,
                    current,
                });
            }
        }

        let records: Vec<HourlyRecord> = timestamps
            .into_iter()
            .zip(values)
            .map(|(timestamp, fwi)| HourlyRecord { timestamp, fwi })
            .collect();

        let mut month_day_indices = vec![Vec::new(); MonthDayKey::SLOTS];
        let mut month_indices: [Vec<usize>; 12] = std::array::from_fn(|_| Vec::new());
        for (i, record) in records.iter().enumerate() {
            month_day_indices[MonthDayKey::of(record.timestamp).slot()].push(i);
            month_indices[record.timestamp.month0() as usize].push(i);
        }

        let series = Self {
            station_id: input.station_id,
            station_name: input.station_name,
            records,
            month_day_indices,
            month_indices,
        };
        debug!(
            station = %series.station_id,
            n_records = series.records.len(),
            start = %series.extent_start(),
            end = %series.extent_end(),
            "station series loaded"
        );
        Ok(series)
    }

    /// Returns the station identifier.
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Returns the station name, if one was given.
    pub fn station_name(&self) -> Option<&str> {
        self.station_name.as_deref()
    }

    /// Returns all records in time order.
    pub fn records(&self) -> &[HourlyRecord] {
        &self.records
    }

    /// Number of hourly records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: a loaded series holds at least one record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Timestamp of the first record.
    pub fn extent_start(&self) -> NaiveDateTime {
        self.records[0].timestamp
    }

    /// Timestamp of the last record.
    pub fn extent_end(&self) -> NaiveDateTime {
        self.records[self.records.len() - 1].timestamp
    }

    /// The full extent as a window.
    pub fn extent(&self) -> DateWindow {
        DateWindow::new(self.extent_start(), self.extent_end())
            .expect("series timestamps are strictly increasing")
    }

    /// Calendar year of the first record.
    pub fn first_year(&self) -> i32 {
        self.extent_start().year()
    }

    /// Calendar year of the last record.
    pub fn last_year(&self) -> i32 {
        self.extent_end().year()
    }

    /// Records with `start <= timestamp <= end`.
    pub fn records_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> &[HourlyRecord] {
        let lo = self.records.partition_point(|r| r.timestamp < start);
        let hi = self.records.partition_point(|r| r.timestamp <= end);
        if lo >= hi { &[] } else { &self.records[lo..hi] }
    }

    /// Defined FWI values with `start <= timestamp <= end`.
    pub fn values_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<f64> {
        defined(self.records_between(start, end).iter())
    }

    /// Defined FWI values recorded on `date`. Empty if there is no data.
    pub fn values_on_day(&self, date: NaiveDate) -> Vec<f64> {
        self.values_between(date.and_time(NaiveTime::MIN), end_of_day(date))
    }

    /// Defined FWI values in calendar `month` (1..=12), pooled across all
    /// years. Empty for an invalid month.
    pub fn values_in_month(&self, month: u32) -> Vec<f64> {
        if !(1..=12).contains(&month) {
            return Vec::new();
        }
        defined(self.month_indices[month as usize - 1].iter().map(|&i| &self.records[i]))
    }

    /// Defined FWI values in one `(year, month)` bucket.
    pub fn values_in_year_month(&self, year: i32, month: u32) -> Vec<f64> {
        if !(1..=12).contains(&month) {
            return Vec::new();
        }
        defined(
            self.month_indices[month as usize - 1]
                .iter()
                .map(|&i| &self.records[i])
                .filter(|r| r.timestamp.year() == year),
        )
    }

    /// Returns `true` when at least one record (with or without a value)
    /// falls in `(year, month)`.
    pub fn has_records_in(&self, year: i32, month: u32) -> bool {
        (1..=12).contains(&month)
            && self.month_indices[month as usize - 1]
                .iter()
                .any(|&i| self.records[i].timestamp.year() == year)
    }

    /// Defined FWI values whose `(month, day)` lies in `window`, pooled
    /// across all years, in time order within each day slot.
    pub fn values_in_day_window(&self, window: DayWindow) -> Vec<f64> {
        let mut out = Vec::new();
        for (slot, indices) in self.month_day_indices.iter().enumerate() {
            if indices.is_empty() {
                continue;
            }
            let Some(key) = MonthDayKey::from_slot(slot) else {
                continue;
            };
            if window.contains(key) {
                out.extend(indices.iter().filter_map(|&i| self.records[i].fwi));
            }
        }
        out
    }

    /// Defined FWI values whose `(month, day)` lies in the day-of-year
    /// projection of `window`, pooled across all years.
    pub fn values_in_date_window(&self, window: &DateWindow) -> Vec<f64> {
        self.values_in_day_window(window.month_day_window())
    }
}

fn defined<'a>(records: impl Iterator<Item = &'a HourlyRecord>) -> Vec<f64> {
    records.filter_map(|r| r.fwi).collect()
}
