//! Fixed meteorological and solar season tables.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CalendarError;
use crate::month_day::{MonthDayKey, end_of_day};

/// Which of the two season tables to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonScheme {
    /// Calendar quarters starting Dec 1, Mar 1, Jun 1 and Sep 1.
    #[default]
    Meteorological,
    /// Solstice and equinox anchored seasons (Dec 21, Mar 20, Jun 21, Sep 22).
    Solar,
}

/// A named season from one of the two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Djf,
    Mam,
    Jja,
    Son,
    Winter,
    Spring,
    Summer,
    Autumn,
}

/// The fixed `(start, end)` day-of-year bounds of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonDefinition {
    /// Season label.
    pub season: Season,
    /// First day of the season.
    pub start: MonthDayKey,
    /// Last day of the season. Feb 29 resolves to Feb 28 in common years.
    pub end: MonthDayKey,
}

const fn md(month: u32, day: u32) -> MonthDayKey {
    MonthDayKey { month, day }
}

const METEOROLOGICAL: [SeasonDefinition; 4] = [
    SeasonDefinition {
        season: Season::Djf,
        start: md(12, 1),
        end: md(2, 29),
    },
    SeasonDefinition {
        season: Season::Mam,
        start: md(3, 1),
        end: md(5, 31),
    },
    SeasonDefinition {
        season: Season::Jja,
        start: md(6, 1),
        end: md(8, 31),
    },
    SeasonDefinition {
        season: Season::Son,
        start: md(9, 1),
        end: md(11, 30),
    },
];

const SOLAR: [SeasonDefinition; 4] = [
    SeasonDefinition {
        season: Season::Winter,
        start: md(12, 21),
        end: md(3, 19),
    },
    SeasonDefinition {
        season: Season::Spring,
        start: md(3, 20),
        end: md(6, 20),
    },
    SeasonDefinition {
        season: Season::Summer,
        start: md(6, 21),
        end: md(9, 21),
    },
    SeasonDefinition {
        season: Season::Autumn,
        start: md(9, 22),
        end: md(12, 20),
    },
];

impl SeasonScheme {
    /// Returns the four seasons of the scheme, starting with the one that
    /// spans the year boundary.
    pub fn seasons(self) -> &'static [SeasonDefinition; 4] {
        match self {
            Self::Meteorological => &METEOROLOGICAL,
            Self::Solar => &SOLAR,
        }
    }
}

impl FromStr for SeasonScheme {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "meteorological" | "met" => Ok(Self::Meteorological),
            "solar" | "astronomical" => Ok(Self::Solar),
            _ => Err(CalendarError::UnknownScheme {
                name: s.to_string(),
            }),
        }
    }
}

impl Season {
    /// Returns the table entry for this season.
    pub fn definition(self) -> SeasonDefinition {
        let table = self.scheme().seasons();
        let index = match self {
            Self::Djf | Self::Winter => 0,
            Self::Mam | Self::Spring => 1,
            Self::Jja | Self::Summer => 2,
            Self::Son | Self::Autumn => 3,
        };
        table[index]
    }

    /// Returns the table this season belongs to.
    pub fn scheme(self) -> SeasonScheme {
        match self {
            Self::Djf | Self::Mam | Self::Jja | Self::Son => SeasonScheme::Meteorological,
            Self::Winter | Self::Spring | Self::Summer | Self::Autumn => SeasonScheme::Solar,
        }
    }

    /// Returns the canonical upper-case label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Djf => "DJF",
            Self::Mam => "MAM",
            Self::Jja => "JJA",
            Self::Son => "SON",
            Self::Winter => "WINTER",
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Autumn => "AUTUMN",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = CalendarError;

    /// Parses a season label case-insensitively. `FALL` is accepted as an
    /// alias for `AUTUMN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DJF" => Ok(Self::Djf),
            "MAM" => Ok(Self::Mam),
            "JJA" => Ok(Self::Jja),
            "SON" => Ok(Self::Son),
            "WINTER" => Ok(Self::Winter),
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "AUTUMN" | "FALL" => Ok(Self::Autumn),
            _ => Err(CalendarError::UnknownSeason {
                name: s.to_string(),
            }),
        }
    }
}

impl SeasonDefinition {
    /// Returns `true` when the season starts in one year and ends in the next.
    pub fn crosses_year(&self) -> bool {
        self.start > self.end
    }

    /// Returns the occurrence of this season whose last day falls in `end_year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if either endpoint cannot be
    /// represented.
    pub fn occurrence_ending_in(&self, end_year: i32) -> Result<SeasonOccurrence, CalendarError> {
        let start_year = if self.crosses_year() {
            end_year - 1
        } else {
            end_year
        };
        Ok(SeasonOccurrence {
            season: self.season,
            start: self.start.in_year(start_year)?,
            end: self.end.in_year(end_year)?,
        })
    }
}

/// One dated occurrence of a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonOccurrence {
    /// Season label.
    pub season: Season,
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

impl SeasonOccurrence {
    /// Returns `true` when `date` falls inside the occurrence.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Midnight on the first day.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// 23:00 on the last day.
    pub fn end_time(&self) -> NaiveDateTime {
        end_of_day(self.end)
    }
}

/// Lists the consecutive season occurrences of `scheme` covering `from..=to`.
///
/// The first occurrence is the one containing `from`, found by scanning the
/// season boundaries of the surrounding years; subsequent occurrences follow
/// until one starts after `to`. Returns an empty list when `to < from`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] if a boundary cannot be
/// represented.
pub fn season_occurrences(
    scheme: SeasonScheme,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<SeasonOccurrence>, CalendarError> {
    if to < from {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for end_year in from.year()..=to.year() + 1 {
        for definition in scheme.seasons() {
            candidates.push(definition.occurrence_ending_in(end_year)?);
        }
    }
    candidates.sort_by_key(|occ| occ.start);

    let Some(first) = candidates.iter().position(|occ| occ.contains(from)) else {
        return Ok(Vec::new());
    };

    Ok(candidates[first..]
        .iter()
        .take_while(|occ| occ.start <= to)
        .copied()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_is_case_insensitive_with_fall_alias() {
        assert_eq!("djf".parse::<Season>().unwrap(), Season::Djf);
        assert_eq!("Winter".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("FALL".parse::<Season>().unwrap(), Season::Autumn);
        assert_eq!("autumn".parse::<Season>().unwrap(), Season::Autumn);
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn scheme_membership() {
        assert_eq!(Season::Jja.scheme(), SeasonScheme::Meteorological);
        assert_eq!(Season::Summer.scheme(), SeasonScheme::Solar);
    }

    #[test]
    fn definition_matches_table() {
        let djf = Season::Djf.definition();
        assert_eq!(djf.start, MonthDayKey::new(12, 1).unwrap());
        assert_eq!(djf.end, MonthDayKey::new(2, 29).unwrap());
        assert!(djf.crosses_year());

        let summer = Season::Summer.definition();
        assert_eq!(summer.start, MonthDayKey::new(6, 21).unwrap());
        assert_eq!(summer.end, MonthDayKey::new(9, 21).unwrap());
        assert!(!summer.crosses_year());
    }

    #[test]
    fn tables_are_contiguous() {
        for scheme in [SeasonScheme::Meteorological, SeasonScheme::Solar] {
            let occ = season_occurrences(scheme, date(2018, 1, 1), date(2021, 12, 31)).unwrap();
            for pair in occ.windows(2) {
                assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
            }
        }
    }

    #[test]
    fn djf_ending_in_leap_year() {
        let occ = Season::Djf.definition().occurrence_ending_in(2020).unwrap();
        assert_eq!(occ.start, date(2019, 12, 1));
        assert_eq!(occ.end, date(2020, 2, 29));
        assert_eq!(
            occ.end_time(),
            date(2020, 2, 29).and_hms_opt(23, 0, 0).unwrap()
        );
    }

    #[test]
    fn djf_ending_in_common_year() {
        let occ = Season::Djf.definition().occurrence_ending_in(2019).unwrap();
        assert_eq!(occ.start, date(2018, 12, 1));
        assert_eq!(occ.end, date(2019, 2, 28));
    }

    #[test]
    fn occurrences_start_with_containing_season() {
        let occ = season_occurrences(SeasonScheme::Solar, date(2020, 1, 10), date(2020, 7, 1))
            .unwrap();
        let labels: Vec<Season> = occ.iter().map(|o| o.season).collect();
        assert_eq!(
            labels,
            vec![Season::Winter, Season::Spring, Season::Summer]
        );
        assert_eq!(occ[0].start, date(2019, 12, 21));
    }

    #[test]
    fn occurrences_empty_for_inverted_range() {
        let occ = season_occurrences(
            SeasonScheme::Meteorological,
            date(2020, 5, 1),
            date(2020, 4, 1),
        )
        .unwrap();
        assert!(occ.is_empty());
    }

    #[test]
    fn scheme_parse() {
        assert_eq!(
            "solar".parse::<SeasonScheme>().unwrap(),
            SeasonScheme::Solar
        );
        assert_eq!(
            "Meteorological".parse::<SeasonScheme>().unwrap(),
            SeasonScheme::Meteorological
        );
    }
}
