//! Reporting range resolution.

use chrono::NaiveTime;
use firewx_calendar::{DateWindow, Season, SeasonOccurrence, end_of_day};
use firewx_series::StationSeries;
use tracing::{info, instrument};

use crate::config::RangeSelection;
use crate::error::SummaryError;
use crate::fire_season::find_fire_season;

/// Resolves a [`RangeSelection`] against a series.
///
/// Priority: both explicit bounds, then one explicit bound with the other
/// taken from the data extent, then a named season, then the entire extent,
/// then fire season detection.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeResolver {
    selection: RangeSelection,
}

impl DateRangeResolver {
    /// Creates a resolver for `selection`.
    pub fn new(selection: RangeSelection) -> Self {
        Self { selection }
    }

    /// Resolves the reporting range.
    ///
    /// # Errors
    ///
    /// - [`SummaryError::Calendar`] if explicit bounds are inverted with
    ///   respect to each other or to the data extent.
    /// - [`SummaryError::InsufficientData`] if a named season has no complete
    ///   occurrence in the data.
    /// - [`SummaryError::SeasonNotFound`] if fire season detection fails.
    #[instrument(skip(self, series), fields(station = series.station_id()))]
    pub fn resolve(&self, series: &StationSeries) -> Result<DateWindow, SummaryError> {
        let sel = &self.selection;
        let window = if sel.is_explicit() {
            let start = sel
                .from()
                .map_or(series.extent_start(), |d| d.and_time(NaiveTime::MIN));
            let end = sel.to().map_or(series.extent_end(), end_of_day);
            DateWindow::new(start, end)?
        } else if let Some(season) = sel.season() {
            occurrence_window(&last_season(series, season)?)?
        } else if sel.entire() {
            series.extent()
        } else {
            find_fire_season(series)?
        };
        info!(%window, "resolved reporting range");
        Ok(window)
    }
}

/// Returns the latest occurrence of `season` that lies entirely within the
/// data.
///
/// The occurrence ending in the last year of the data is tried first; if the
/// data stops before its last day (23:00), the previous year's is used.
///
/// # Errors
///
/// Returns [`SummaryError::InsufficientData`] if the data starts after the
/// chosen occurrence does.
pub fn last_season(series: &StationSeries, season: Season) -> Result<SeasonOccurrence, SummaryError> {
    let definition = season.definition();
    let mut occurrence = definition.occurrence_ending_in(series.last_year())?;
    if series.extent_end() < occurrence.end_time() {
        occurrence = definition.occurrence_ending_in(series.last_year() - 1)?;
    }
    if series.extent_start() > occurrence.start_time() {
        return Err(SummaryError::InsufficientData {
            request: format!("season {season}"),
            start: occurrence.start_time(),
            end: occurrence.end_time(),
            data_start: series.extent_start(),
            data_end: series.extent_end(),
        });
    }
    Ok(occurrence)
}

fn occurrence_window(occurrence: &SeasonOccurrence) -> Result<DateWindow, SummaryError> {
    Ok(DateWindow::new(occurrence.start_time(), occurrence.end_time())?)
}
