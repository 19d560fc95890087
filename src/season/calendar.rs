//! Season calendar lookups.
//!
//! Competition weeks are counted from a per-season calendar week, and each
//! season reserves one competition week for the championship. Both numbers
//! come from a `SeasonCalendar`; `StaticSeasonCalendar` carries the known
//! seasons and can be extended from configuration.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::season::{DEFAULT_CHAMPIONSHIP_WEEK, DEFAULT_FIRST_COMPETITION_WEEK};

/// Per-season week constants.
pub trait SeasonCalendar {
    /// Calendar week-of-year that competition week numbers are offset from.
    fn first_competition_week(&self, year: i32) -> i32;

    /// Competition week number of the season's championship.
    fn championship_week(&self, year: i32) -> i32;
}

impl<C: SeasonCalendar + ?Sized> SeasonCalendar for &C {
    fn first_competition_week(&self, year: i32) -> i32 {
        (**self).first_competition_week(year)
    }

    fn championship_week(&self, year: i32) -> i32 {
        (**self).championship_week(year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWeeks {
    pub first_competition_week: i32,
    pub championship_week: i32,
}

impl Default for SeasonWeeks {
    fn default() -> Self {
        SeasonWeeks {
            first_competition_week: DEFAULT_FIRST_COMPETITION_WEEK,
            championship_week: DEFAULT_CHAMPIONSHIP_WEEK,
        }
    }
}

/// Table-backed calendar. Seasons without an entry use `SeasonWeeks::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSeasonCalendar {
    seasons: BTreeMap<i32, SeasonWeeks>,
}

impl Default for StaticSeasonCalendar {
    fn default() -> Self {
        let seasons = BTreeMap::from([
            (
                2014,
                SeasonWeeks {
                    first_competition_week: 8,
                    championship_week: 9,
                },
            ),
            (
                2015,
                SeasonWeeks {
                    first_competition_week: 8,
                    championship_week: 9,
                },
            ),
            // Week 0.5 pushed every later week back by one
            (
                2016,
                SeasonWeeks {
                    first_competition_week: 7,
                    championship_week: 10,
                },
            ),
        ]);
        StaticSeasonCalendar { seasons }
    }
}

impl StaticSeasonCalendar {
    /// Calendar with no season entries; every year uses the defaults.
    pub fn empty() -> Self {
        StaticSeasonCalendar {
            seasons: BTreeMap::new(),
        }
    }

    /// Adds or replaces the entry for `year`.
    pub fn with_season(mut self, year: i32, weeks: SeasonWeeks) -> Self {
        self.seasons.insert(year, weeks);
        self
    }

    pub fn weeks_for(&self, year: i32) -> SeasonWeeks {
        self.seasons.get(&year).copied().unwrap_or_default()
    }

    /// Seasons with explicit entries, in year order.
    pub fn seasons(&self) -> impl Iterator<Item = (i32, SeasonWeeks)> + '_ {
        self.seasons.iter().map(|(year, weeks)| (*year, *weeks))
    }
}

impl SeasonCalendar for StaticSeasonCalendar {
    fn first_competition_week(&self, year: i32) -> i32 {
        self.weeks_for(year).first_competition_week
    }

    fn championship_week(&self, year: i32) -> i32 {
        self.weeks_for(year).championship_week
    }
}

/// ISO-8601 week number of `date` (1-based).
pub fn iso_week_of_year(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Competition week containing `date`, never negative.
///
/// Events run Wednesday through Saturday/Sunday, so the date is shifted back
/// a day before taking the ISO week; a Monday event then still counts with
/// the preceding weekend.
pub fn competition_week<C: SeasonCalendar + ?Sized>(calendar: &C, date: NaiveDate) -> i32 {
    let shifted = date.pred_opt().unwrap_or(date);
    let week = iso_week_of_year(shifted) as i32 - calendar.first_competition_week(date.year());
    week.max(0)
}
