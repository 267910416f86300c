//! Summarize command: read hourly FWI, build the requested tables, write CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use firewx_io::{StationInputs, read_csv, write_table};
use firewx_series::{SeriesInput, StationSeries};
use firewx_summary::{Aggregator, SummaryMode};
use tracing::{info, info_span};

use crate::cli::{Cli, Mode};
use crate::config::FirewxConfig;
use crate::convert::build_settings;

/// Library modes written for a CLI mode, each with its output path.
pub fn outputs(mode: Mode, output: &Path) -> Vec<(SummaryMode, PathBuf)> {
    let single = |m| vec![(m, output.to_path_buf())];
    match mode {
        Mode::Default => vec![
            (SummaryMode::Hourly, sibling(output, "hourly")),
            (SummaryMode::DailyMax, sibling(output, "maxdaily")),
        ],
        Mode::Hourly => single(SummaryMode::Hourly),
        Mode::Maxdaily => single(SummaryMode::DailyMax),
        Mode::Rolling => single(SummaryMode::Rolling),
        Mode::Monthly => single(SummaryMode::Monthly),
        Mode::Seasonal => single(SummaryMode::Seasonal),
    }
}

/// `dir/out.csv` -> `dir/out_<suffix>.csv`.
pub fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map_or_else(|| "firewx".into(), |s| s.to_string_lossy());
    let ext = path.extension().map_or_else(|| "csv".into(), |e| e.to_string_lossy());
    path.with_file_name(format!("{stem}_{suffix}.{ext}"))
}

/// Takes the requested station out of `stations`, or the only one present.
pub fn select_station(stations: &mut StationInputs, id: Option<&str>) -> Result<SeriesInput> {
    match id {
        Some(id) => match stations.remove(id) {
            Some(input) => Ok(input),
            None => bail!("station {id:?} not found; file holds {}", stations_list(stations)),
        },
        None if stations.len() == 1 => match stations.pop_first() {
            Some((_, input)) => Ok(input),
            None => bail!("input file holds no records"),
        },
        None if stations.is_empty() => bail!("input file holds no records"),
        None => bail!(
            "input file holds {} stations ({}); choose one with --station",
            stations.len(),
            stations_list(stations)
        ),
    }
}

fn stations_list(stations: &StationInputs) -> String {
    stations.keys().cloned().collect::<Vec<_>>().join(", ")
}

fn load_config(path: Option<&Path>) -> Result<FirewxConfig> {
    let Some(path) = path else {
        return Ok(FirewxConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Run the summarize pipeline.
pub fn run(cli: Cli) -> Result<()> {
    let _cmd = info_span!("summarize").entered();

    // 1. Settings: config file, then flags
    let file_config = load_config(cli.config.as_deref())?;
    let settings = build_settings(&file_config, &cli)?;

    // 2. Read and load the station
    let mut stations = read_csv(&cli.input)
        .with_context(|| format!("failed to read FWI data: {}", cli.input.display()))?;
    let mut input = select_station(&mut stations, cli.station.as_deref())?;
    if let Some(name) = &cli.name {
        input.station_name = Some(name.clone());
    }
    let station = input.station_id.clone();
    let series = StationSeries::load(input)
        .with_context(|| format!("invalid FWI data for station {station}"))?;
    info!(
        station = %station,
        name = series.station_name().unwrap_or(""),
        records = series.len(),
        "loaded series"
    );

    // 3. Resolve the range once, then build every table over it
    let aggregator = Aggregator::new(&series, settings.summary)?;
    let window = aggregator
        .resolve_range()
        .with_context(|| format!("failed to resolve date range for station {station}"))?;

    for (mode, path) in outputs(settings.mode, &cli.output) {
        let table = aggregator
            .summarize_window(mode, window)
            .with_context(|| format!("failed to build {mode} table"))?;
        if let Some(period) = table.reference_period() {
            info!(
                first_year = period.first_year,
                last_year = period.last_year,
                "climate reference period"
            );
        }
        write_table(&path, &table)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
