//! Per-mode row builders.
//!
//! Every builder returns rows in ascending timestamp order. A bucket with no
//! defined values yields a row whose statistics are `None`.

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use firewx_calendar::{
    CalendarError, DateWindow, MonthDayKey, SeasonScheme, YearMonth, month_sequence,
    season_occurrences,
};
use firewx_series::StationSeries;
use firewx_stats::{PercentileBand, max, mean};
use rayon::prelude::*;
use tracing::debug;

use crate::table::StatisticRow;

/// Hourly records inside `window`, passed through.
pub fn hourly(series: &StationSeries, window: &DateWindow) -> Vec<StatisticRow> {
    series
        .records_between(window.start(), window.end())
        .iter()
        .map(|r| StatisticRow {
            fwi: r.fwi,
            ..StatisticRow::empty(r.timestamp)
        })
        .collect()
}

/// The maximum FWI of each calendar day in `window`.
pub fn daily_maxima(series: &StationSeries, window: &DateWindow) -> Vec<StatisticRow> {
    window
        .days()
        .map(|date| StatisticRow {
            max: max(&series.values_on_day(date)),
            ..StatisticRow::empty(date.and_time(NaiveTime::MIN))
        })
        .collect()
}

/// The sequence of trailing comparison windows, one per day of `window`.
///
/// The first ends on the `(month, day)` of the window start in the reference
/// year and spans `days + 1` calendar days; each following window is shifted
/// by one day.
pub fn comparison_windows(window: &DateWindow, days: u32) -> Result<Vec<DateWindow>, CalendarError> {
    let mut current = DateWindow::trailing(MonthDayKey::of(window.start()), days)?;
    let mut out = Vec::new();
    for _ in window.days() {
        out.push(current);
        current = current.advance_one_day();
    }
    Ok(out)
}

/// Day-of-year rolling percentile bands for each day of `window`.
///
/// The band pools every year's values inside the day's comparison window;
/// the mean is over the values of that specific calendar day only. Rows are
/// computed in parallel and returned in date order.
pub fn rolling(
    series: &StationSeries,
    window: &DateWindow,
    days: u32,
) -> Result<Vec<StatisticRow>, CalendarError> {
    let dates: Vec<_> = window.days().collect();
    let comparisons = comparison_windows(window, days)?;
    debug!(rows = dates.len(), days, "computing rolling rows");

    Ok(dates
        .par_iter()
        .zip(comparisons.par_iter())
        .map(|(&date, comparison)| StatisticRow {
            mean: mean(&series.values_on_day(date)),
            percentiles: PercentileBand::of(&series.values_in_date_window(comparison)),
            ..StatisticRow::empty(date.and_time(NaiveTime::MIN))
        })
        .collect())
}

/// Percentile bands for every `(year, month)` touched by `window`, using the
/// whole month even when the window starts or ends mid-month.
///
/// Also returns the start of the month after the last one.
pub fn monthly(
    series: &StationSeries,
    window: &DateWindow,
) -> Result<(Vec<StatisticRow>, Option<NaiveDateTime>), CalendarError> {
    let months = month_sequence(window.start_date(), window.end_date());
    let mut rows = Vec::with_capacity(months.len());
    for ym in &months {
        rows.push(StatisticRow {
            percentiles: PercentileBand::of(&series.values_in_year_month(ym.year, ym.month)),
            ..StatisticRow::empty(month_start(*ym)?)
        });
    }
    let next = months.last().map(|ym| month_start(ym.next())).transpose()?;
    Ok((rows, next))
}

/// Percentile bands for every season occurrence of `scheme` touched by
/// `window`, starting with the occurrence that contains the window start.
///
/// Also returns the start of the occurrence after the last one.
pub fn seasonal(
    series: &StationSeries,
    window: &DateWindow,
    scheme: SeasonScheme,
) -> Result<(Vec<StatisticRow>, Option<NaiveDateTime>), CalendarError> {
    let occurrences = season_occurrences(scheme, window.start_date(), window.end_date())?;
    let rows = occurrences
        .iter()
        .map(|occ| StatisticRow {
            percentiles: PercentileBand::of(
                &series.values_between(occ.start_time(), occ.end_time()),
            ),
            ..StatisticRow::empty(occ.start_time())
        })
        .collect();
    let next = occurrences
        .last()
        .map(|occ| {
            occ.end
                .succ_opt()
                .map(|d| d.and_time(NaiveTime::MIN))
                .ok_or(CalendarError::YearOutOfRange {
                    year: occ.end.year(),
                })
        })
        .transpose()?;
    Ok((rows, next))
}

fn month_start(ym: YearMonth) -> Result<NaiveDateTime, CalendarError> {
    ym.first_day()
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or(CalendarError::YearOutOfRange { year: ym.year })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn key(m: u32, d: u32) -> MonthDayKey {
        MonthDayKey::new(m, d).unwrap()
    }

    #[test]
    fn comparison_windows_trail_and_advance() {
        let window = DateWindow::new(at(2019, 12, 30), at(2020, 1, 2)).unwrap();
        let windows = comparison_windows(&window, 3).unwrap();
        assert_eq!(windows.len(), 4);

        let first = windows[0].month_day_window();
        assert_eq!(first.start(), key(12, 27));
        assert_eq!(first.end(), key(12, 30));

        let last = windows[3].month_day_window();
        assert_eq!(last.start(), key(12, 30));
        assert_eq!(last.end(), key(1, 2));
        assert!(last.wraps());
    }

    #[test]
    fn comparison_windows_follow_reference_year_calendar() {
        // The reference year is a leap year, so Feb 29 is always visited.
        let window = DateWindow::new(at(2019, 2, 28), at(2019, 3, 1)).unwrap();
        let windows = comparison_windows(&window, 1).unwrap();
        assert_eq!(windows[1].month_day_window().end(), key(2, 29));
    }
}
