//! Pure conversion functions: TOML config and CLI flags -> library config types.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::ValueEnum;
use firewx_calendar::{Season, SeasonScheme};
use firewx_summary::{RangeSelection, SummaryConfig};

use crate::cli::{Cli, Mode};
use crate::config::FirewxConfig;

/// Everything a run needs after merging the config file with the flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub mode: Mode,
    pub summary: SummaryConfig,
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {s:?}"))
}

/// Builds a date from the three values of `--from` or `--to`.
pub fn date_from_parts(parts: &[i32]) -> Result<NaiveDate> {
    let &[year, month, day] = parts else {
        bail!("expected YYYY MM DD, got {} value(s)", parts.len());
    };
    let month = u32::try_from(month).with_context(|| format!("invalid month: {month}"))?;
    let day = u32::try_from(day).with_context(|| format!("invalid day: {day}"))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date: {year}-{month:02}-{day:02}"))
}

/// Parses a mode name as accepted by `--mode`.
pub fn parse_mode(s: &str) -> Result<Mode> {
    <Mode as ValueEnum>::from_str(s, true).map_err(|_| anyhow::anyhow!("unknown mode: {s:?}"))
}

fn pick_date(flag: Option<&Vec<i32>>, file: Option<&str>) -> Result<Option<NaiveDate>> {
    match (flag, file) {
        (Some(parts), _) => date_from_parts(parts).map(Some),
        (None, Some(s)) => parse_date(s).map(Some),
        (None, None) => Ok(None),
    }
}

/// Merges the config file with the command-line flags. Flags win.
///
/// # Errors
///
/// Fails on unparseable dates, season or mode names, on rolling mode
/// without a period, and on any value rejected by
/// [`SummaryConfig::validate`].
pub fn build_settings(file: &FirewxConfig, cli: &Cli) -> Result<RunSettings> {
    let mode = match (cli.mode, file.output.mode.as_deref()) {
        (Some(mode), _) => mode,
        (None, Some(name)) => parse_mode(name)?,
        (None, None) => Mode::Default,
    };

    let mut range = RangeSelection::new().with_entire(cli.all || file.range.all);
    if let Some(from) = pick_date(cli.from.as_ref(), file.range.from.as_deref())? {
        range = range.with_from(from);
    }
    if let Some(to) = pick_date(cli.to.as_ref(), file.range.to.as_deref())? {
        range = range.with_to(to);
    }
    let season = match (cli.season, file.range.season.as_deref()) {
        (Some(season), _) => Some(season),
        (None, Some(name)) => Some(Season::from_str(name)?),
        (None, None) => None,
    };
    if let Some(season) = season {
        range = range.with_season(season);
    }

    let scheme = match (cli.scheme, file.range.scheme.as_deref()) {
        (Some(scheme), _) => scheme,
        (None, Some(name)) => SeasonScheme::from_str(name)?,
        (None, None) => SeasonScheme::default(),
    };

    let mut summary = SummaryConfig::new()
        .with_range(range)
        .with_season_scheme(scheme)
        .with_step_padding(cli.step_padding || file.output.step_padding);
    match cli.period.or(file.rolling.period) {
        Some(days) => summary = summary.with_rolling_days(days),
        None if mode == Mode::Rolling => {
            bail!("rolling mode requires a period: pass --period <days> or set [rolling] period")
        }
        None => {}
    }
    summary.validate()?;

    Ok(RunSettings { mode, summary })
}
