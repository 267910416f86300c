use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use firewx_calendar::{Season, SeasonScheme};

/// Calendar-aware FWI summaries from hourly station data.
#[derive(Parser, Debug)]
#[command(
    name = "firewx",
    version,
    about = "Daily maxima, rolling percentile bands and seasonal summaries of hourly FWI"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Hourly FWI CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output CSV path. Default mode writes `<stem>_hourly` and
    /// `<stem>_maxdaily` next to it.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Station id to summarise (required when the file holds several).
    #[arg(long)]
    pub station: Option<String>,

    /// Station name, overriding any `name` column.
    #[arg(long)]
    pub name: Option<String>,

    /// Summary mode.
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Rolling period in days.
    #[arg(short, long)]
    pub period: Option<u32>,

    /// First day of the range.
    #[arg(long, num_args = 3, value_names = ["YYYY", "MM", "DD"])]
    pub from: Option<Vec<i32>>,

    /// Last day of the range (through 23:00).
    #[arg(long, num_args = 3, value_names = ["YYYY", "MM", "DD"])]
    pub to: Option<Vec<i32>>,

    /// Latest complete occurrence of a season: DJF, MAM, JJA, SON, WINTER,
    /// SPRING, SUMMER, AUTUMN or FALL.
    #[arg(long)]
    pub season: Option<Season>,

    /// Season table for seasonal mode (meteorological or solar).
    #[arg(long)]
    pub scheme: Option<SeasonScheme>,

    /// Use the entire date range of the data.
    #[arg(long)]
    pub all: bool,

    /// Append a trailing duplicate row to monthly and seasonal output.
    #[arg(long)]
    pub step_padding: bool,

    /// Optional TOML configuration file. Flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Output modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Hourly FWI plus daily maxima, as two files.
    Default,
    /// Hourly FWI.
    Hourly,
    /// Maximum FWI per day.
    Maxdaily,
    /// Rolling percentile band and same-day mean (needs a period).
    Rolling,
    /// Percentile band per month.
    Monthly,
    /// Percentile band per season.
    Seasonal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_dates_and_season() {
        let cli = Cli::try_parse_from([
            "firewx", "-i", "in.csv", "-o", "out.csv", "-m", "rolling", "-p", "14", "--from",
            "2020", "6", "1", "--to", "2020", "8", "31", "--season", "fall", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(Mode::Rolling));
        assert_eq!(cli.period, Some(14));
        assert_eq!(cli.from, Some(vec![2020, 6, 1]));
        assert_eq!(cli.to, Some(vec![2020, 8, 31]));
        assert_eq!(cli.season, Some(Season::Autumn));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_season() {
        let result = Cli::try_parse_from([
            "firewx", "-i", "in.csv", "-o", "out.csv", "--season", "monsoon",
        ]);
        assert!(result.is_err());
    }
}
