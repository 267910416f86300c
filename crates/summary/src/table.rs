//! Output rows and tables.

use chrono::NaiveDateTime;
use firewx_calendar::DateWindow;
use firewx_stats::PercentileBand;

use crate::config::SummaryMode;

/// One output row. A field is `None` either because the mode does not
/// produce it or because its underlying sample was empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticRow {
    /// Hour for hourly rows, 00:00 of the period start otherwise.
    pub timestamp: NaiveDateTime,
    /// Hourly FWI value.
    pub fwi: Option<f64>,
    /// Daily maximum.
    pub max: Option<f64>,
    /// Mean FWI of the row's calendar day.
    pub mean: Option<f64>,
    /// Percentile band of the row's pool.
    pub percentiles: Option<PercentileBand>,
}

impl StatisticRow {
    /// A row with every field undefined.
    pub fn empty(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            fwi: None,
            max: None,
            mean: None,
            percentiles: None,
        }
    }

    /// Returns a copy of this row with a different timestamp.
    pub fn at(self, timestamp: NaiveDateTime) -> Self {
        Self { timestamp, ..self }
    }
}

/// The years pooled by a rolling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePeriod {
    /// First calendar year in the series.
    pub first_year: i32,
    /// Last calendar year in the series.
    pub last_year: i32,
}

/// An ordered sequence of rows for one mode over one reporting range.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    station_id: String,
    mode: SummaryMode,
    window: DateWindow,
    rows: Vec<StatisticRow>,
    reference_period: Option<ReferencePeriod>,
    padded: bool,
}

impl SummaryTable {
    pub(crate) fn new(
        station_id: impl Into<String>,
        mode: SummaryMode,
        window: DateWindow,
        rows: Vec<StatisticRow>,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            mode,
            window,
            rows,
            reference_period: None,
            padded: false,
        }
    }

    pub(crate) fn with_reference_period(mut self, period: ReferencePeriod) -> Self {
        self.reference_period = Some(period);
        self
    }

    /// Appends a copy of the last row stamped `next_start`, the start of
    /// the period that would follow. Does nothing for an empty table.
    pub(crate) fn pad_step(mut self, next_start: NaiveDateTime) -> Self {
        if let Some(last) = self.rows.last().copied() {
            self.rows.push(last.at(next_start));
            self.padded = true;
        }
        self
    }

    /// Station the table was computed for.
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Aggregation mode.
    pub fn mode(&self) -> SummaryMode {
        self.mode
    }

    /// The resolved reporting range.
    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Rows in ascending timestamp order.
    pub fn rows(&self) -> &[StatisticRow] {
        &self.rows
    }

    /// Number of rows, including any step padding row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Years pooled by a rolling table; `None` for other modes.
    pub fn reference_period(&self) -> Option<ReferencePeriod> {
        self.reference_period
    }

    /// Returns `true` when the last row is a step padding duplicate.
    pub fn padded(&self) -> bool {
        self.padded
    }

    /// Rows excluding the step padding duplicate.
    pub fn statistic_rows(&self) -> &[StatisticRow] {
        if self.padded {
            &self.rows[..self.rows.len() - 1]
        } else {
            &self.rows
        }
    }
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

    fn window() -> DateWindow {
        DateWindow::new(at(2020, 1, 1), at(2020, 2, 29)).unwrap()
    }

    #[test]
    fn pad_step_duplicates_last_row() {
        let mut row = StatisticRow::empty(at(2020, 2, 1));
        row.max = Some(4.0);
        let table = SummaryTable::new(
            "PRF",
            SummaryMode::Monthly,
            window(),
            vec![StatisticRow::empty(at(2020, 1, 1)), row],
        )
        .pad_step(at(2020, 3, 1));

        assert!(table.padded());
        assert_eq!(table.len(), 3);
        assert_eq!(table.statistic_rows().len(), 2);
        assert_eq!(table.rows()[2].timestamp, at(2020, 3, 1));
        assert_eq!(table.rows()[2].max, Some(4.0));
    }

    #[test]
    fn pad_step_on_empty_table_is_noop() {
        let table =
            SummaryTable::new("PRF", SummaryMode::Seasonal, window(), Vec::new()).pad_step(at(2020, 3, 1));
        assert!(!table.padded());
        assert!(table.is_empty());
    }

    #[test]
    fn reference_period_only_when_set() {
        let table = SummaryTable::new("PRF", SummaryMode::Rolling, window(), Vec::new());
        assert_eq!(table.reference_period(), None);
        let table = table.with_reference_period(ReferencePeriod {
            first_year: 2010,
            last_year: 2020,
        });
        assert_eq!(table.reference_period().unwrap().first_year, 2010);
        assert_eq!(table.station_id(), "PRF");
        assert_eq!(table.mode(), SummaryMode::Rolling);
    }
}
