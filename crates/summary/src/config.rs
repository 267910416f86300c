//! Typed configuration for range resolution and aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use firewx_calendar::{Season, SeasonScheme};

use crate::error::SummaryError;

/// Longest rolling period whose day-of-year projection does not fold back
/// onto itself.
pub const MAX_ROLLING_DAYS: u32 = 364;

/// Which aggregation to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryMode {
    /// Hourly FWI values passed through unchanged.
    Hourly,
    /// Maximum FWI per calendar day.
    DailyMax,
    /// Day-of-year rolling percentile band plus the same-day mean.
    Rolling,
    /// Percentile band per `(year, month)`.
    Monthly,
    /// Percentile band per season occurrence.
    Seasonal,
}

impl SummaryMode {
    /// Returns the canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::DailyMax => "maxdaily",
            Self::Rolling => "rolling",
            Self::Monthly => "monthly",
            Self::Seasonal => "seasonal",
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SummaryMode {
    type Err = SummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "maxdaily" | "dailymax" | "daily-max" => Ok(Self::DailyMax),
            "rolling" => Ok(Self::Rolling),
            "monthly" => Ok(Self::Monthly),
            "seasonal" => Ok(Self::Seasonal),
            _ => Err(SummaryError::InvalidConfig {
                reason: format!("unknown summary mode '{s}'"),
            }),
        }
    }
}

/// How the reporting range is chosen.
///
/// Explicit dates win over everything else; a season wins over `entire`;
/// with nothing set the station's fire season is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeSelection {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    season: Option<Season>,
    entire: bool,
}

impl RangeSelection {
    /// Creates an empty selection (fire season detection).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first reported day (from 00:00).
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the last reported day (through 23:00).
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Selects the latest complete occurrence of a named season.
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Selects the full extent of the data.
    pub fn with_entire(mut self, entire: bool) -> Self {
        self.entire = entire;
        self
    }

    /// Returns the explicit start day, if any.
    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    /// Returns the explicit end day, if any.
    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }

    /// Returns the named season, if any.
    pub fn season(&self) -> Option<Season> {
        self.season
    }

    /// Returns `true` when the full extent is requested.
    pub fn entire(&self) -> bool {
        self.entire
    }

    /// Returns `true` when either explicit bound is set.
    pub fn is_explicit(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// Configuration for the aggregation engine.
///
/// # Example
///
/// ```
/// use firewx_calendar::{Season, SeasonScheme};
/// use firewx_summary::{RangeSelection, SummaryConfig};
///
/// let config = SummaryConfig::new()
///     .with_range(RangeSelection::new().with_season(Season::Jja))
///     .with_rolling_days(14)
///     .with_season_scheme(SeasonScheme::Solar);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryConfig {
    range: RangeSelection,
    rolling_days: Option<u32>,
    season_scheme: SeasonScheme,
    step_padding: bool,
}

impl SummaryConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: fire season detection, no rolling period, meteorological
    /// seasons, no step padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range selection.
    pub fn with_range(mut self, range: RangeSelection) -> Self {
        self.range = range;
        self
    }

    /// Sets the rolling period in days.
    pub fn with_rolling_days(mut self, days: u32) -> Self {
        self.rolling_days = Some(days);
        self
    }

    /// Sets the season table used for seasonal aggregation.
    pub fn with_season_scheme(mut self, scheme: SeasonScheme) -> Self {
        self.season_scheme = scheme;
        self
    }

    /// Appends a trailing duplicate row to monthly and seasonal tables.
    ///
    /// The duplicate closes the last step of a step-function chart. It is a
    /// presentation artifact, not a statistic.
    pub fn with_step_padding(mut self, step_padding: bool) -> Self {
        self.step_padding = step_padding;
        self
    }

    /// Returns the range selection.
    pub fn range(&self) -> &RangeSelection {
        &self.range
    }

    /// Returns the rolling period, if set.
    pub fn rolling_days(&self) -> Option<u32> {
        self.rolling_days
    }

    /// Returns the season scheme.
    pub fn season_scheme(&self) -> SeasonScheme {
        self.season_scheme
    }

    /// Returns `true` when step padding is enabled.
    pub fn step_padding(&self) -> bool {
        self.step_padding
    }

    /// Validates this configuration.
    ///
    /// The rolling period, when set, must be in `1..=364`, and explicit
    /// dates must not be inverted.
    pub fn validate(&self) -> Result<(), SummaryError> {
        if let Some(days) = self.rolling_days
            && !(1..=MAX_ROLLING_DAYS).contains(&days)
        {
            return Err(SummaryError::InvalidConfig {
                reason: format!("rolling period must be 1..={MAX_ROLLING_DAYS} days, got {days}"),
            });
        }
        if let (Some(from), Some(to)) = (self.range.from, self.range.to)
            && to < from
        {
            return Err(SummaryError::InvalidConfig {
                reason: format!("end date {to} is before start date {from}"),
            });
        }
        Ok(())
    }
}
