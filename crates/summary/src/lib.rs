//! # firewx-summary
//!
//! Calendar-aware FWI summaries for one station: fire season detection,
//! reporting range resolution, and the aggregation engine that turns an
//! hourly series into daily maxima, rolling percentile bands, and monthly
//! or seasonal percentile bands.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["StationSeries"] --> B["DateRangeResolver"]
//!     C["RangeSelection"] --> B
//!     B -->|"no explicit range"| D["find_fire_season()"]
//!     B -->|"season"| E["last_season()"]
//!     B --> F["DateWindow"]
//!     F --> G["Aggregator::summarize_window()"]
//!     H["SummaryConfig"] --> G
//!     G --> I["SummaryTable"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use firewx_series::{SeriesInput, StationSeries};
//! use firewx_summary::{Aggregator, RangeSelection, SummaryConfig, SummaryMode};
//!
//! let mut input = SeriesInput::new("PRF");
//! for day in 1..=31 {
//!     for hour in 0..24 {
//!         input.push(2020, 7, day, hour, Some(12.5));
//!     }
//! }
//! let series = StationSeries::load(input).unwrap();
//!
//! let range = RangeSelection::new().with_entire(true);
//! let config = SummaryConfig::new().with_range(range);
//! let table = Aggregator::new(&series, config)
//!     .unwrap()
//!     .summarize(SummaryMode::Monthly)
//!     .unwrap();
//!
//! let band = table.rows()[0].percentiles.unwrap();
//! assert_eq!(band.p5, 12.5);
//! assert_eq!(band.p95, 12.5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | `SummaryMode`, `RangeSelection`, `SummaryConfig` |
//! | `fire_season` | Monthly means and fire season detection |
//! | `resolve` | `DateRangeResolver` and latest complete season lookup |
//! | `aggregate` | Per-mode row builders |
//! | `engine` | `Aggregator` entry point |
//! | `table` | `StatisticRow`, `SummaryTable` |
//! | `error` | Error types |

mod aggregate;
mod config;
mod engine;
mod error;
mod fire_season;
mod resolve;
mod table;

pub use aggregate::{comparison_windows, daily_maxima, hourly, monthly, rolling, seasonal};
pub use config::{MAX_ROLLING_DAYS, RangeSelection, SummaryConfig, SummaryMode};
pub use engine::Aggregator;
pub use error::SummaryError;
pub use fire_season::{
    FireSeasonMonths, detect_fire_season_months, find_fire_season, fire_season_for_year,
    monthly_means,
};
pub use resolve::{DateRangeResolver, last_season};
pub use table::{ReferencePeriod, StatisticRow, SummaryTable};
