//! CSV reader for hourly FWI files.
//!
//! The header decides which columns are present. Accepted names (any case):
//! `id`, `name`, `yr`/`year`, `mon`/`month`, `day`, `hr`/`hour`, `fwi`.
//! Only `id` is required here; an absent date or FWI column is left as
//! `None` in the [`SeriesInput`] so that loading the series reports it.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use firewx_series::SeriesInput;
use tracing::{debug, info};

use crate::error::IoError;

/// Per-station inputs keyed by station id.
pub type StationInputs = BTreeMap<String, SeriesInput>;

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    id: usize,
    name: Option<usize>,
    year: Option<usize>,
    month: Option<usize>,
    day: Option<usize>,
    hour: Option<usize>,
    fwi: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord, source_name: &str) -> Result<Self, IoError> {
        let find = |aliases: &[&str]| {
            header
                .iter()
                .position(|h| aliases.iter().any(|a| h.trim().eq_ignore_ascii_case(a)))
        };
        let id = find(&["id"]).ok_or_else(|| IoError::MissingColumn {
            column: "id",
            source_name: source_name.to_string(),
        })?;
        Ok(Self {
            id,
            name: find(&["name"]),
            year: find(&["yr", "year"]),
            month: find(&["mon", "month"]),
            day: find(&["day"]),
            hour: find(&["hr", "hour"]),
            fwi: find(&["fwi"]),
        })
    }

    fn empty_input(&self, station_id: &str) -> SeriesInput {
        SeriesInput {
            station_id: station_id.to_string(),
            station_name: None,
            year: self.year.map(|_| Vec::new()),
            month: self.month.map(|_| Vec::new()),
            day: self.day.map(|_| Vec::new()),
            hour: self.hour.map(|_| Vec::new()),
            fwi: self.fwi.map(|_| Vec::new()),
        }
    }
}

/// Reads an hourly FWI CSV file, grouping rows by station id.
///
/// Rows keep their file order within each station.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::MissingColumn`] if the header has no `id` column.
/// - [`IoError::Parse`] if a date cell is not an integer or an FWI cell is
///   neither empty, `NaN`, nor a number.
pub fn read_csv(path: &Path) -> Result<StationInputs, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    info!(path = %path.display(), "reading hourly FWI");
    let file = std::fs::File::open(path)?;
    let source_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    read_csv_from(file, &source_name)
}

/// Reads hourly FWI CSV data from any reader. `source_name` only appears in
/// error messages.
pub fn read_csv_from<R: Read>(reader: R, source_name: &str) -> Result<StationInputs, IoError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let cols = Columns::from_header(rdr.headers()?, source_name)?;

    let mut stations = StationInputs::new();
    let mut record = StringRecord::new();
    let mut row = 0;
    while rdr.read_record(&mut record)? {
        row += 1;
        let id = record.get(cols.id).unwrap_or_default();
        let input = stations
            .entry(id.to_string())
            .or_insert_with(|| cols.empty_input(id));

        if input.station_name.is_none()
            && let Some(name) = cols.name.and_then(|i| record.get(i))
            && !name.is_empty()
        {
            input.station_name = Some(name.to_string());
        }

        input.push(
            integer(&record, cols.year, row, "year")?,
            integer(&record, cols.month, row, "month")?,
            integer(&record, cols.day, row, "day")?,
            integer(&record, cols.hour, row, "hour")?,
            fwi(&record, cols.fwi, row)?,
        );
    }

    debug!(rows = row, stations = stations.len(), "parsed hourly FWI");
    Ok(stations)
}

/// Parses an integer cell. An absent column yields the default, which is
/// discarded by [`SeriesInput::push`].
fn integer<T: FromStr + Default>(
    record: &StringRecord,
    column: Option<usize>,
    row: usize,
    name: &'static str,
) -> Result<T, IoError> {
    let Some(i) = column else {
        return Ok(T::default());
    };
    let raw = record.get(i).unwrap_or_default();
    raw.parse().map_err(|_| IoError::Parse {
        row,
        column: name,
        value: raw.to_string(),
    })
}

/// Parses an FWI cell. Empty and NaN cells are missing observations.
fn fwi(record: &StringRecord, column: Option<usize>, row: usize) -> Result<Option<f64>, IoError> {
    let Some(i) = column else {
        return Ok(None);
    };
    let raw = record.get(i).unwrap_or_default();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(|v| if v.is_nan() { None } else { Some(v) })
        .map_err(|_| IoError::Parse {
            row,
            column: "fwi",
            value: raw.to_string(),
        })
}
