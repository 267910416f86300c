use chrono::NaiveDate;
use firewx_calendar::{Season, SeasonScheme, season_occurrences};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn every_season_round_trips_through_its_label() {
    let all = [
        Season::Djf,
        Season::Mam,
        Season::Jja,
        Season::Son,
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
    ];
    for season in all {
        assert_eq!(season.label().parse::<Season>().unwrap(), season);
        assert_eq!(season.definition().season, season);
    }
}

#[test]
fn meteorological_occurrences_cover_a_year() {
    let occ = season_occurrences(
        SeasonScheme::Meteorological,
        date(2021, 3, 15),
        date(2022, 3, 1),
    )
    .unwrap();
    let labels: Vec<&str> = occ.iter().map(|o| o.season.label()).collect();
    assert_eq!(labels, vec!["MAM", "JJA", "SON", "DJF", "MAM"]);
    assert_eq!(occ[0].start, date(2021, 3, 1));
    assert_eq!(occ[3].start, date(2021, 12, 1));
    assert_eq!(occ[3].end, date(2022, 2, 28));
}

#[test]
fn solar_occurrence_containing_late_december() {
    let occ = season_occurrences(SeasonScheme::Solar, date(2020, 12, 25), date(2020, 12, 25))
        .unwrap();
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0].season, Season::Winter);
    assert_eq!(occ[0].start, date(2020, 12, 21));
    assert_eq!(occ[0].end, date(2021, 3, 19));
}

#[test]
fn solar_boundary_day_starts_new_season() {
    let occ = season_occurrences(SeasonScheme::Solar, date(2020, 3, 20), date(2020, 3, 20))
        .unwrap();
    assert_eq!(occ.len(), 1);
    assert_eq!(occ[0].season, Season::Spring);
}
