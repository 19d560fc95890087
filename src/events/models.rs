use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::keys::year_of;

/// Kind of competition event, in section order.
///
/// The declaration order is the sort order used by the type-then-date
/// comparator, so new variants must be appended with care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Regional,
    District,
    DistrictCmp,
    CmpDivision,
    CmpFinals,
    Offseason,
    Preseason,
    #[serde(other)]
    Other,
}

impl EventType {
    /// Section header text for events of this type.
    pub fn display_name(self) -> &'static str {
        match self {
            EventType::Regional => "Regional Events",
            EventType::District => "District Events",
            EventType::DistrictCmp => "District Championships",
            EventType::CmpDivision => "Championship Divisions",
            EventType::CmpFinals => "Championship Finals",
            EventType::Offseason => "Offseason Events",
            EventType::Preseason => "Preseason Events",
            EventType::Other => "Other Events",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Geographic district. Serialized as the lowercase district abbreviation.
///
/// Codes not listed here are kept as `Other`, holding the upper-cased code,
/// so events from newer districts still parse and group on their own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DistrictType {
    Fim,
    Mar,
    Ne,
    Pnw,
    In,
    Chs,
    Nc,
    Pch,
    Ont,
    Isr,
    Fit,
    Other(String),
}

impl DistrictType {
    pub fn abbreviation(&self) -> &str {
        match self {
            DistrictType::Fim => "FIM",
            DistrictType::Mar => "MAR",
            DistrictType::Ne => "NE",
            DistrictType::Pnw => "PNW",
            DistrictType::In => "IN",
            DistrictType::Chs => "CHS",
            DistrictType::Nc => "NC",
            DistrictType::Pch => "PCH",
            DistrictType::Ont => "ONT",
            DistrictType::Isr => "ISR",
            DistrictType::Fit => "FIT",
            DistrictType::Other(code) => code,
        }
    }

    /// Region name used in section headers. Unlisted districts show their code.
    pub fn display_name(&self) -> &str {
        match self {
            DistrictType::Fim => "Michigan",
            DistrictType::Mar => "Mid-Atlantic",
            DistrictType::Ne => "New England",
            DistrictType::Pnw => "Pacific Northwest",
            DistrictType::In => "Indiana",
            DistrictType::Chs => "Chesapeake",
            DistrictType::Nc => "North Carolina",
            DistrictType::Pch => "Peachtree",
            DistrictType::Ont => "Ontario",
            DistrictType::Isr => "Israel",
            DistrictType::Fit => "Texas",
            DistrictType::Other(code) => code,
        }
    }
}

impl From<String> for DistrictType {
    fn from(code: String) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "fim" => DistrictType::Fim,
            "mar" => DistrictType::Mar,
            "ne" => DistrictType::Ne,
            "pnw" => DistrictType::Pnw,
            "in" => DistrictType::In,
            "chs" => DistrictType::Chs,
            "nc" => DistrictType::Nc,
            "pch" => DistrictType::Pch,
            "ont" => DistrictType::Ont,
            "isr" => DistrictType::Isr,
            "fit" => DistrictType::Fit,
            _ => DistrictType::Other(code.to_ascii_uppercase()),
        }
    }
}

impl From<DistrictType> for String {
    fn from(district: DistrictType) -> Self {
        district.abbreviation().to_ascii_lowercase()
    }
}

/// An event record as supplied by the data feed.
///
/// The engine only reads these; rendering hands back references into the
/// caller's slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub name: String,
    /// Season year. Falls back to the key prefix when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub event_type: EventType,
    /// Only meaningful for `EventType::District`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<DistrictType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_happening_now: bool,
}

impl Event {
    /// Returns the season year, derived from the key when not set explicitly.
    ///
    /// Yields the invalid-year sentinel when neither source is usable.
    pub fn season_year(&self) -> i32 {
        self.year.unwrap_or_else(|| year_of(&self.key))
    }

    /// District used for grouping. Ignored for non-district events.
    pub fn grouping_district(&self) -> Option<&DistrictType> {
        match self.event_type {
            EventType::District => self.district.as_ref(),
            _ => None,
        }
    }

    /// Whether `date` falls inside the event's start/end window (inclusive).
    pub fn is_live_on(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

/// Sets `is_happening_now` on every event whose date window contains `date`.
///
/// Events already flagged by the feed keep their flag.
pub fn mark_happening_on(events: &mut [Event], date: NaiveDate) -> usize {
    let mut marked = 0;
    for event in events.iter_mut() {
        if !event.is_happening_now && event.is_live_on(date) {
            event.is_happening_now = true;
            marked += 1;
        }
    }
    tracing::debug!("Marked {marked} of {} events as live on {date}", events.len());
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::sentinels::INVALID_YEAR;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_full_event() {
        let json = r#"{
            "key": "2016necmp",
            "name": "NE FIRST District Championship",
            "city": "Hartford",
            "event_type": "DISTRICT_CMP",
            "week": 7,
            "start_date": "2016-04-13",
            "end_date": "2016-04-16",
            "is_happening_now": true
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.key, "2016necmp");
        assert_eq!(event.event_type, EventType::DistrictCmp);
        assert_eq!(event.week, Some(7));
        assert_eq!(event.start_date, Some(ymd(2016, 4, 13)));
        assert_eq!(event.city.as_deref(), Some("Hartford"));
        assert!(event.is_happening_now);
        assert_eq!(event.season_year(), 2016);
    }

    #[test]
    fn test_deserialize_minimal_event_uses_defaults() {
        let json = r#"{"key": "2019mimil", "name": "FIM District Milford Event",
                       "event_type": "DISTRICT", "district": "fim"}"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.district, Some(DistrictType::Fim));
        assert_eq!(event.week, None);
        assert_eq!(event.start_date, None);
        assert!(!event.is_happening_now);
    }

    #[test]
    fn test_unknown_event_type_maps_to_other() {
        let json = r#"{"key": "2020xxx", "name": "Remote Event", "event_type": "REMOTE"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Other);
    }

    #[test]
    fn test_unlisted_district_code_is_kept() {
        let json = r#"[
            {"key": "2019mdbet", "name": "X", "event_type": "DISTRICT", "district": "fma"},
            {"key": "2019ncwak", "name": "Y", "event_type": "DISTRICT", "district": "FNC"}
        ]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();

        assert_eq!(events[0].district, Some(DistrictType::Other("FMA".to_string())));
        assert_eq!(events[1].grouping_district().map(|d| d.display_name()), Some("FNC"));
        assert!(DistrictType::Fit < DistrictType::Other("FMA".to_string()));
        assert_eq!(
            serde_json::to_string(&events[0].district).unwrap(),
            r#""fma""#
        );
        assert_eq!(serde_json::to_string(&DistrictType::Pnw).unwrap(), r#""pnw""#);
    }

    #[test]
    fn test_season_year_prefers_explicit_year() {
        let json = r#"{"key": "garbage", "name": "X", "year": 2012, "event_type": "REGIONAL"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.season_year(), 2012);

        let json = r#"{"key": "garbage", "name": "X", "event_type": "REGIONAL"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.season_year(), INVALID_YEAR);
    }

    #[test]
    fn test_event_type_order_matches_section_order() {
        assert!(EventType::Regional < EventType::District);
        assert!(EventType::District < EventType::DistrictCmp);
        assert!(EventType::CmpFinals < EventType::Offseason);
        assert!(EventType::Preseason < EventType::Other);
        assert_eq!(EventType::DistrictCmp.to_string(), "District Championships");
    }

    #[test]
    fn test_grouping_district_only_for_district_events() {
        let json = r#"{"key": "2016necmp", "name": "X", "event_type": "DISTRICT_CMP", "district": "ne"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.grouping_district(), None);
    }

    #[test]
    fn test_mark_happening_on() {
        let mut events: Vec<Event> = serde_json::from_str(
            r#"[
                {"key": "2016a", "name": "A", "event_type": "REGIONAL",
                 "start_date": "2016-03-02", "end_date": "2016-03-05"},
                {"key": "2016b", "name": "B", "event_type": "REGIONAL",
                 "start_date": "2016-03-09", "end_date": "2016-03-12"},
                {"key": "2016c", "name": "C", "event_type": "REGIONAL"}
            ]"#,
        )
        .unwrap();

        let marked = mark_happening_on(&mut events, ymd(2016, 3, 5));

        assert_eq!(marked, 1);
        assert!(events[0].is_happening_now);
        assert!(!events[1].is_happening_now);
        assert!(!events[2].is_happening_now);
    }
}
