//! Mapping between competition weeks and their human labels.
//!
//! 2016 is irregular: one event ran in "Week 0.5" before the first full week,
//! so feed week numbers for that season are one ahead of their label.

use crate::constants::labels::{
    CHAMPIONSHIP, CITY_CHAMPIONSHIP_SUFFIX, OFFSEASON, OFFSEASON_SUFFIX, PRESEASON, WEEK_PREFIX,
    WEEKLESS,
};
use crate::constants::season::{
    CITY_CHAMPIONSHIP_SINCE, HALF_WEEK_EVENT_KEY, MAX_LABEL_SEARCH_WEEK, SHIFTED_WEEK_SEASON,
};
use crate::constants::sentinels::WEEK_NOT_FOUND;
use crate::events::{Event, EventType};

use super::calendar::SeasonCalendar;
use super::dates::month_name;

fn week_label(week: i32) -> String {
    format!("{WEEK_PREFIX} {week}")
}

fn half_week_label() -> String {
    format!("{WEEK_PREFIX} {:.1}", 0.5)
}

/// Section label for a single event, e.g. "Week 3" or "Houston Championship".
pub fn label_for_event(event: &Event) -> String {
    let year = event.season_year();
    match event.event_type {
        EventType::CmpDivision | EventType::CmpFinals => match &event.city {
            Some(city) if year >= CITY_CHAMPIONSHIP_SINCE => {
                format!("{city} {CITY_CHAMPIONSHIP_SUFFIX}")
            }
            _ => CHAMPIONSHIP.to_string(),
        },
        EventType::Regional | EventType::District | EventType::DistrictCmp => {
            if year == SHIFTED_WEEK_SEASON {
                match event.week {
                    None => week_label(0),
                    Some(_) if event.key == HALF_WEEK_EVENT_KEY => half_week_label(),
                    Some(week) => week_label(week.saturating_sub(1)),
                }
            } else {
                week_label(event.week.unwrap_or(0))
            }
        }
        EventType::Offseason => match event.start_date {
            Some(start) => format!("{} {OFFSEASON_SUFFIX}", month_name(start)),
            None => OFFSEASON.to_string(),
        },
        EventType::Preseason => PRESEASON.to_string(),
        EventType::Other => WEEKLESS.to_string(),
    }
}

/// Label for a bare competition week number.
///
/// Unlike `label_for_event`, offseason weeks share one bucket because no
/// month is known here.
pub fn label_from_week_number<C: SeasonCalendar + ?Sized>(
    calendar: &C,
    year: i32,
    week: Option<i32>,
) -> String {
    let Some(mut week) = week else {
        return WEEKLESS.to_string();
    };

    if week <= 0 {
        return PRESEASON.to_string();
    }

    let championship_week = calendar.championship_week(year);

    if year == SHIFTED_WEEK_SEASON {
        if week == 1 {
            return half_week_label();
        }
        if week > 1 && week < championship_week {
            week -= 1;
        }
    }

    if week > 0 && week < championship_week {
        week_label(week)
    } else if week == championship_week {
        CHAMPIONSHIP.to_string()
    } else if week > championship_week {
        OFFSEASON.to_string()
    } else {
        WEEKLESS.to_string()
    }
}

/// Inverse of `label_from_week_number`: the smallest week in `0..20` whose
/// label equals `label`, or `WEEK_NOT_FOUND` (-1).
///
/// Labels are not unique per week (every offseason week shares one), so the
/// result is only guaranteed to map back to the same label.
pub fn week_number_from_label<C: SeasonCalendar + ?Sized>(
    calendar: &C,
    year: i32,
    label: &str,
) -> i32 {
    (0..MAX_LABEL_SEARCH_WEEK)
        .find(|&week| label_from_week_number(calendar, year, Some(week)) == label)
        .unwrap_or(WEEK_NOT_FOUND)
}
