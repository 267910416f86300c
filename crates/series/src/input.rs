//! Columnar input for building a [`StationSeries`](crate::StationSeries).

/// One station's hourly records as parallel columns.
///
/// Every column is optional so that an input layer can report exactly which
/// one was absent. All present columns must have the same length. A `None`
/// or NaN FWI value marks a missing observation for that hour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesInput {
    pub station_id: String,
    pub station_name: Option<String>,
    pub year: Option<Vec<i32>>,
    pub month: Option<Vec<u32>>,
    pub day: Option<Vec<u32>>,
    pub hour: Option<Vec<u32>>,
    pub fwi: Option<Vec<Option<f64>>>,
}

impl SeriesInput {
    /// Creates an input with every column present but empty.
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            station_name: None,
            year: Some(Vec::new()),
            month: Some(Vec::new()),
            day: Some(Vec::new()),
            hour: Some(Vec::new()),
            fwi: Some(Vec::new()),
        }
    }

    /// Sets the human-readable station name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.station_name = Some(name.into());
        self
    }

    /// Appends one hourly row to every present column.
    pub fn push(&mut self, year: i32, month: u32, day: u32, hour: u32, fwi: Option<f64>) {
        if let Some(col) = self.year.as_mut() {
            col.push(year);
        }
        if let Some(col) = self.month.as_mut() {
            col.push(month);
        }
        if let Some(col) = self.day.as_mut() {
            col.push(day);
        }
        if let Some(col) = self.hour.as_mut() {
            col.push(hour);
        }
        if let Some(col) = self.fwi.as_mut() {
            col.push(fwi);
        }
    }

    /// Number of rows in the FWI column, or zero when it is absent.
    pub fn len(&self) -> usize {
        self.fwi.as_ref().map_or(0, Vec::len)
    }

    /// Returns `true` when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
