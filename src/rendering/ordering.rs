//! Event comparators used by the list renderer.
//!
//! Events without a start date sort before dated ones. Sorting is stable, so
//! events comparing equal keep their input order.

use std::cmp::Ordering;

use crate::events::Event;

/// Orders by event type, then district (district events only), then start date.
pub fn by_type_and_date(a: &Event, b: &Event) -> Ordering {
    a.event_type
        .cmp(&b.event_type)
        .then_with(|| a.grouping_district().cmp(&b.grouping_district()))
        .then_with(|| a.start_date.cmp(&b.start_date))
}

/// Orders by start date only.
pub fn by_date(a: &Event, b: &Event) -> Ordering {
    a.start_date.cmp(&b.start_date)
}

/// Returns references to `events` in comparator order, leaving the slice untouched.
pub fn sorted_by<'a, F>(events: &'a [Event], compare: F) -> Vec<&'a Event>
where
    F: Fn(&Event, &Event) -> Ordering,
{
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{DistrictType, EventType};
    use crate::testing_utils::{TestEventBuilder, district_event};

    fn keys(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.key.clone()).collect()
    }

    #[test]
    fn test_type_before_date() {
        let events = vec![
            TestEventBuilder::new("2019cmp", EventType::CmpFinals)
                .starts("2019-04-17")
                .build(),
            TestEventBuilder::new("2019late", EventType::Regional)
                .starts("2019-04-03")
                .build(),
            TestEventBuilder::new("2019early", EventType::Regional)
                .starts("2019-03-01")
                .build(),
        ];

        let sorted = sorted_by(&events, by_type_and_date);

        assert_eq!(keys(&sorted), vec!["2019early", "2019late", "2019cmp"]);
    }

    #[test]
    fn test_district_before_date_within_district_type() {
        let events = vec![
            district_event("2019pnw1", DistrictType::Pnw, "2019-03-01"),
            district_event("2019fim2", DistrictType::Fim, "2019-03-22"),
            district_event("2019fim1", DistrictType::Fim, "2019-03-08"),
        ];

        let sorted = sorted_by(&events, by_type_and_date);

        assert_eq!(keys(&sorted), vec!["2019fim1", "2019fim2", "2019pnw1"]);
    }

    #[test]
    fn test_district_ignored_for_other_types() {
        let events = vec![
            TestEventBuilder::new("2019b", EventType::DistrictCmp)
                .district(DistrictType::Fim)
                .starts("2019-04-10")
                .build(),
            TestEventBuilder::new("2019a", EventType::DistrictCmp)
                .district(DistrictType::Pnw)
                .starts("2019-04-03")
                .build(),
        ];

        let sorted = sorted_by(&events, by_type_and_date);

        assert_eq!(keys(&sorted), vec!["2019a", "2019b"]);
    }

    #[test]
    fn test_by_date_is_stable_and_undated_first() {
        let events = vec![
            TestEventBuilder::new("2019x", EventType::Regional)
                .starts("2019-03-08")
                .build(),
            TestEventBuilder::new("2019y", EventType::District)
                .starts("2019-03-08")
                .build(),
            TestEventBuilder::new("2019z", EventType::Offseason).build(),
        ];

        let sorted = sorted_by(&events, by_date);

        assert_eq!(keys(&sorted), vec!["2019z", "2019x", "2019y"]);
        // Input slice order is unchanged
        assert_eq!(events[0].key, "2019x");
    }
}
