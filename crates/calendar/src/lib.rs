//! # firewx-calendar
//!
//! Year-agnostic calendar arithmetic for day-of-year windows that may wrap
//! across the year boundary, plus the fixed season tables.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate / NaiveDateTime"] -->|"MonthDayKey::of()"| B["MonthDayKey"]
//!     B -->|"in_window()"| C["bool"]
//!     D["DateWindow"] -->|".month_day_window()"| E["DayWindow"]
//!     D -->|".advance_one_day()"| D
//!     F["Season"] -->|".definition()"| G["SeasonDefinition"]
//!     G -->|".occurrence_ending_in()"| H["SeasonOccurrence"]
//!     I["SeasonScheme"] -->|"season_occurrences()"| J["Vec of SeasonOccurrence"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use firewx_calendar::{MonthDayKey, in_window};
//!
//! let start = MonthDayKey::new(12, 21).unwrap();
//! let end = MonthDayKey::new(3, 19).unwrap();
//!
//! let christmas = MonthDayKey::of(NaiveDate::from_ymd_opt(2019, 12, 25).unwrap());
//! assert!(in_window(christmas, start, end));
//! assert!(!in_window(MonthDayKey::new(7, 1).unwrap(), start, end));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month_day` | `MonthDayKey`, month lengths, reference year projection |
//! | `window` | Wrap-aware `DayWindow` and dated `DateWindow` |
//! | `season` | Meteorological and solar season tables |
//! | `sequence` | Day and month sequences |
//! | `error` | Error types |

mod error;
mod month_day;
mod season;
mod sequence;
mod window;

pub use error::CalendarError;
pub use month_day::{MonthDayKey, REFERENCE_YEAR, end_of_day, last_day_of_month};
pub use season::{Season, SeasonDefinition, SeasonOccurrence, SeasonScheme, season_occurrences};
pub use sequence::{DaySequence, YearMonth, day_sequence, month_sequence};
pub use window::{DateWindow, DayWindow, in_window};
