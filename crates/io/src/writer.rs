//! CSV export of summary tables.
//!
//! Dates are written as `YYYYMMDDHH` and undefined statistics as `NaN`.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use firewx_summary::{StatisticRow, SummaryMode, SummaryTable};
use tracing::info;

use crate::error::IoError;

/// Token written for an undefined statistic.
pub const UNDEFINED: &str = "NaN";

/// Timestamp format of the `date` column.
pub const DATE_FORMAT: &str = "%Y%m%d%H";

const BAND_HEADER: [&str; 5] = ["5th percentile", "25th", "50th", "75th", "95th"];

/// Column names written for `mode`, `date` first.
pub fn header(mode: SummaryMode) -> Vec<&'static str> {
    let mut cols = vec!["date"];
    match mode {
        SummaryMode::Hourly => cols.push("fwi"),
        SummaryMode::DailyMax => cols.push("max"),
        SummaryMode::Rolling => {
            cols.extend(BAND_HEADER);
            cols.push("fwi");
        }
        SummaryMode::Monthly | SummaryMode::Seasonal => cols.extend(BAND_HEADER),
    }
    cols
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
}

fn band_cells(row: &StatisticRow) -> [String; 5] {
    match row.percentiles {
        Some(band) => band.values().map(|v| v.to_string()),
        None => std::array::from_fn(|_| UNDEFINED.to_string()),
    }
}

/// Formats one row for `mode`.
pub fn format_row(mode: SummaryMode, row: &StatisticRow) -> Vec<String> {
    let mut cells = vec![row.timestamp.format(DATE_FORMAT).to_string()];
    match mode {
        SummaryMode::Hourly => cells.push(cell(row.fwi)),
        SummaryMode::DailyMax => cells.push(cell(row.max)),
        SummaryMode::Rolling => {
            cells.extend(band_cells(row));
            cells.push(cell(row.mean));
        }
        SummaryMode::Monthly | SummaryMode::Seasonal => cells.extend(band_cells(row)),
    }
    cells
}

/// Writes `table` as CSV to any writer.
pub fn write_table_to<W: Write>(writer: W, table: &SummaryTable) -> Result<(), IoError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(header(table.mode()))?;
    for row in table.rows() {
        wtr.write_record(format_row(table.mode(), row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `table` as CSV to `path`, replacing any existing file.
pub fn write_table(path: &Path, table: &SummaryTable) -> Result<(), IoError> {
    let file = std::fs::File::create(path)?;
    write_table_to(file, table)?;
    info!(
        path = %path.display(),
        mode = %table.mode(),
        rows = table.len(),
        "summary table written"
    );
    Ok(())
}
