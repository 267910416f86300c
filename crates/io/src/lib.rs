//! # firewx-io
//!
//! Reads hourly FWI CSV files into per-station [`SeriesInput`] columns and
//! writes summary tables back out as CSV.
//!
//! [`SeriesInput`]: firewx_series::SeriesInput

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{StationInputs, read_csv, read_csv_from};
pub use writer::{DATE_FORMAT, UNDEFINED, format_row, header, write_table, write_table_to};
