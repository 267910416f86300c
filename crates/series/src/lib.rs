//! # firewx-series
//!
//! The time series store: one station's hourly FWI records, validated once
//! at load time and read-only afterwards, with indices for day, month and
//! wrap-aware day-of-year window queries.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `input` | Columnar load input (`SeriesInput`) |
//! | `series` | `StationSeries` and `HourlyRecord` |
//! | `validate` | Accumulated validation of input columns |
//! | `error` | Error types |

mod error;
mod input;
mod series;
mod validate;

pub use error::SeriesError;
pub use input::SeriesInput;
pub use series::{HourlyRecord, StationSeries};
