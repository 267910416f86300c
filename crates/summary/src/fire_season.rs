//! Fire season detection from pooled monthly FWI averages.
//!
//! The season starts in the month whose following three months (itself
//! included) have the highest mean of monthly averages, and ends in month
//! `(start + 2) % 12 + 1`.

use chrono::{NaiveDate, NaiveTime};
use firewx_calendar::{CalendarError, DateWindow, end_of_day, last_day_of_month};
use firewx_series::StationSeries;
use firewx_stats::mean;
use tracing::{debug, info, instrument};

use crate::error::SummaryError;

/// Number of monthly averages scored per candidate start month.
const SCORED_MONTHS: usize = 3;

/// Mean FWI of each calendar month pooled across all years. A month with no
/// defined values averages to `0.0`.
pub fn monthly_means(series: &StationSeries) -> [f64; 12] {
    std::array::from_fn(|i| mean(&series.values_in_month(i as u32 + 1)).unwrap_or(0.0))
}

/// The detected start and end months of the fire season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireSeasonMonths {
    /// First month (1..=12).
    pub start: u32,
    /// Last month (1..=12).
    pub end: u32,
}

impl FireSeasonMonths {
    /// Scores every circular start month and keeps the first maximum.
    pub fn from_means(means: &[f64; 12]) -> Self {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for start in 0..12 {
            let score = (0..SCORED_MONTHS)
                .map(|k| means[(start + k) % 12])
                .sum::<f64>()
                / SCORED_MONTHS as f64;
            if score > best_score {
                best = start;
                best_score = score;
            }
        }
        let start = best as u32 + 1;
        Self {
            start,
            end: (start + 2) % 12 + 1,
        }
    }

    /// Returns `true` when the season starts in one year and ends in the next.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// The season ending in `end_year`, from the 1st of the start month
    /// through 23:00 on the last day of the end month.
    pub fn window_ending_in(&self, end_year: i32) -> Result<DateWindow, SummaryError> {
        let start_year = if self.wraps() { end_year - 1 } else { end_year };
        self.window(start_year, end_year)
    }

    /// The season starting in `start_year`.
    pub fn window_starting_in(&self, start_year: i32) -> Result<DateWindow, SummaryError> {
        let end_year = if self.wraps() { start_year + 1 } else { start_year };
        self.window(start_year, end_year)
    }

    fn window(&self, start_year: i32, end_year: i32) -> Result<DateWindow, SummaryError> {
        let start = NaiveDate::from_ymd_opt(start_year, self.start, 1)
            .ok_or(CalendarError::YearOutOfRange { year: start_year })?;
        let last_day = last_day_of_month(end_year, self.end)?;
        let end = NaiveDate::from_ymd_opt(end_year, self.end, last_day)
            .ok_or(CalendarError::YearOutOfRange { year: end_year })?;
        Ok(DateWindow::new(start.and_time(NaiveTime::MIN), end_of_day(end))?)
    }
}

/// Detects the station's fire season months.
pub fn detect_fire_season_months(series: &StationSeries) -> FireSeasonMonths {
    let means = monthly_means(series);
    debug!(?means, "monthly FWI means");
    FireSeasonMonths::from_means(&means)
}

/// Finds the most recent fire season in the data.
///
/// The season ends in the last year of the data if that year has any record
/// in the end month, otherwise in the year before.
///
/// # Errors
///
/// Returns [`SummaryError::SeasonNotFound`] when neither year has a record in
/// the end month.
#[instrument(skip(series), fields(station = series.station_id()))]
pub fn find_fire_season(series: &StationSeries) -> Result<DateWindow, SummaryError> {
    let months = detect_fire_season_months(series);
    let last_year = series.last_year();

    let Some(end_year) = [last_year, last_year - 1]
        .into_iter()
        .find(|&year| series.has_records_in(year, months.end))
    else {
        return Err(SummaryError::SeasonNotFound {
            start_month: months.start,
            end_month: months.end,
            data_start: series.extent_start(),
            data_end: series.extent_end(),
        });
    };

    let window = months.window_ending_in(end_year)?;
    info!(
        start_month = months.start,
        end_month = months.end,
        %window,
        "detected fire season"
    );
    Ok(window)
}

/// The fire season starting in `year`, whether or not the data covers it.
pub fn fire_season_for_year(series: &StationSeries, year: i32) -> Result<DateWindow, SummaryError> {
    detect_fire_season_months(series).window_starting_in(year)
}
