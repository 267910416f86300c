//! The aggregation engine: one entry point for every summary mode.

use firewx_calendar::DateWindow;
use firewx_series::StationSeries;
use tracing::{info, instrument};

use crate::aggregate::{daily_maxima, hourly, monthly, rolling, seasonal};
use crate::config::{SummaryConfig, SummaryMode};
use crate::error::SummaryError;
use crate::resolve::DateRangeResolver;
use crate::table::{ReferencePeriod, SummaryTable};

/// Produces summary tables for one station under one configuration.
///
/// # Example
///
/// ```
/// use firewx_series::{SeriesInput, StationSeries};
/// use firewx_summary::{Aggregator, SummaryConfig, SummaryMode};
///
/// let mut input = SeriesInput::new("PRF");
/// for hour in 0..24 {
///     input.push(2020, 1, 1, hour, Some(f64::from(hour)));
/// }
/// let series = StationSeries::load(input).unwrap();
///
/// let config = SummaryConfig::new();
/// let aggregator = Aggregator::new(&series, config).unwrap();
/// let table = aggregator
///     .summarize_window(SummaryMode::DailyMax, series.extent())
///     .unwrap();
/// assert_eq!(table.rows()[0].max, Some(23.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    series: &'a StationSeries,
    config: SummaryConfig,
}

impl<'a> Aggregator<'a> {
    /// Creates an aggregator after validating `config`.
    pub fn new(series: &'a StationSeries, config: SummaryConfig) -> Result<Self, SummaryError> {
        config.validate()?;
        Ok(Self { series, config })
    }

    /// The series being summarised.
    pub fn series(&self) -> &StationSeries {
        self.series
    }

    /// The configuration in effect.
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Resolves the configured reporting range against the series.
    pub fn resolve_range(&self) -> Result<DateWindow, SummaryError> {
        DateRangeResolver::new(*self.config.range()).resolve(self.series)
    }

    /// Resolves the reporting range and builds the table for `mode`.
    pub fn summarize(&self, mode: SummaryMode) -> Result<SummaryTable, SummaryError> {
        let window = self.resolve_range()?;
        self.summarize_window(mode, window)
    }

    /// Builds the table for `mode` over an already resolved `window`.
    ///
    /// # Errors
    ///
    /// - [`SummaryError::InvalidConfig`] for rolling mode without a rolling
    ///   period.
    /// - [`SummaryError::InsufficientData`] for rolling mode when `window`
    ///   does not overlap the data.
    #[instrument(skip(self), fields(station = self.series.station_id()))]
    pub fn summarize_window(
        &self,
        mode: SummaryMode,
        window: DateWindow,
    ) -> Result<SummaryTable, SummaryError> {
        let series = self.series;
        let station = series.station_id();

        let table = match mode {
            SummaryMode::Hourly => {
                SummaryTable::new(station, mode, window, hourly(series, &window))
            }
            SummaryMode::DailyMax => {
                SummaryTable::new(station, mode, window, daily_maxima(series, &window))
            }
            SummaryMode::Rolling => {
                let days = self.config.rolling_days().ok_or_else(|| SummaryError::InvalidConfig {
                    reason: "rolling mode requires a rolling period".to_string(),
                })?;
                if !window.overlaps(&series.extent()) {
                    return Err(SummaryError::InsufficientData {
                        request: format!("rolling {days} days"),
                        start: window.start(),
                        end: window.end(),
                        data_start: series.extent_start(),
                        data_end: series.extent_end(),
                    });
                }
                SummaryTable::new(station, mode, window, rolling(series, &window, days)?)
                    .with_reference_period(ReferencePeriod {
                        first_year: series.first_year(),
                        last_year: series.last_year(),
                    })
            }
            SummaryMode::Monthly => {
                let (rows, next) = monthly(series, &window)?;
                self.padded(SummaryTable::new(station, mode, window, rows), next)
            }
            SummaryMode::Seasonal => {
                let (rows, next) = seasonal(series, &window, self.config.season_scheme())?;
                self.padded(SummaryTable::new(station, mode, window, rows), next)
            }
        };

        info!(%mode, rows = table.len(), "summary table built");
        Ok(table)
    }

    fn padded(&self, table: SummaryTable, next: Option<chrono::NaiveDateTime>) -> SummaryTable {
        match next {
            Some(next) if self.config.step_padding() => table.pad_step(next),
            _ => table,
        }
    }
}
