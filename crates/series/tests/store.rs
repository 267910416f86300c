use chrono::{Datelike, Duration, NaiveDate, Timelike};
use firewx_calendar::{DateWindow, MonthDayKey};
use firewx_series::{SeriesError, SeriesInput, StationSeries};

/// Builds an hourly series from `start` for `n_hours`, with FWI = f(hour index).
fn hourly(start: NaiveDate, n_hours: usize, f: impl Fn(usize) -> Option<f64>) -> SeriesInput {
    let mut input = SeriesInput::new("PRF").with_name("Petawawa");
    let t0 = start.and_hms_opt(0, 0, 0).unwrap();
    for i in 0..n_hours {
        let ts = t0 + Duration::hours(i as i64);
        input.push(ts.year(), ts.month(), ts.day(), ts.hour(), f(i));
    }
    input
}

#[test]
fn one_day_of_constant_values() {
    let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let series = StationSeries::load(hourly(day, 24, |_| Some(10.0))).unwrap();
    let values = series.values_on_day(day);
    assert_eq!(values.len(), 24);
    assert!(values.iter().all(|&v| v == 10.0));
    assert!(series.values_on_day(day.succ_opt().unwrap()).is_empty());
    assert_eq!(series.station_name(), Some("Petawawa"));
}

#[test]
fn date_window_pools_across_years() {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    // Three years, FWI equals the year offset so pooled values can be traced.
    let series = StationSeries::load(hourly(start, 3 * 365 * 24, |i| {
        Some((i / (365 * 24)) as f64)
    }))
    .unwrap();
    let anchor = MonthDayKey::new(1, 3).unwrap();
    let window = DateWindow::trailing(anchor, 4).unwrap();
    let pooled = series.values_in_date_window(&window);
    // Dec 30..=Jan 3 is five days. 1095 days from 2018-01-01 end on
    // 2020-12-30 (leap year), so Dec 30 occurs three times, Dec 31 twice and
    // Jan 1-3 three times each.
    assert_eq!(pooled.len(), (3 + 2 + 3 * 3) * 24);
    assert!(pooled.contains(&0.0));
    assert!(pooled.contains(&2.0));
}

#[test]
fn row_errors_are_accumulated() {
    let mut input = SeriesInput::new("BAD");
    input.push(2020, 2, 30, 0, Some(1.0));
    input.push(2020, 3, 1, 0, Some(-4.0));
    input.push(2020, 3, 1, 25, Some(1.0));
    match StationSeries::load(input).unwrap_err() {
        SeriesError::Validation { count, details } => {
            assert_eq!(count, 3);
            assert!(details.contains("row 0"));
            assert!(details.contains("negative FWI"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mismatched_columns_are_rejected() {
    let mut input = hourly(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), 3, |_| Some(1.0));
    if let Some(days) = input.day.as_mut() {
        days.pop();
    }
    assert_eq!(
        StationSeries::load(input).unwrap_err(),
        SeriesError::LengthMismatch {
            column: "day",
            expected: 3,
            got: 2,
        }
    );
}
