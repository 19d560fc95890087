use std::cell::RefCell;

use chrono::NaiveDate;

use crate::error::AppError;
use crate::events::{DistrictType, Event, EventType};
use crate::rendering::notifications::{LiveEventSink, LiveEventUpdate};

/// Builder for event fixtures in tests
pub struct TestEventBuilder {
    event: Event,
}

impl TestEventBuilder {
    /// Starts an event with the given key and type. The name is derived from the key.
    pub fn new(key: &str, event_type: EventType) -> Self {
        TestEventBuilder {
            event: Event {
                key: key.to_string(),
                name: format!("{key} Event"),
                year: None,
                city: None,
                event_type,
                district: None,
                week: None,
                start_date: None,
                end_date: None,
                is_happening_now: false,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.event.name = name.to_string();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.event.year = Some(year);
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.event.city = Some(city.to_string());
        self
    }

    pub fn district(mut self, district: DistrictType) -> Self {
        self.event.district = Some(district);
        self
    }

    pub fn week(mut self, week: i32) -> Self {
        self.event.week = Some(week);
        self
    }

    /// Sets both start and end date
    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.event.start_date = Some(start);
        self.event.end_date = Some(end);
        self
    }

    /// Sets a start date only, from `YYYY-MM-DD`
    pub fn starts(mut self, date: &str) -> Self {
        self.event.start_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
        self
    }

    pub fn live(mut self) -> Self {
        self.event.is_happening_now = true;
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// Creates a district event with a start date, the common case in render tests
pub fn district_event(key: &str, district: DistrictType, start: &str) -> Event {
    TestEventBuilder::new(key, EventType::District)
        .district(district)
        .starts(start)
        .build()
}

/// Sink that keeps every published update, in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    updates: RefCell<Vec<LiveEventUpdate>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys of the events published so far
    pub fn keys(&self) -> Vec<String> {
        self.updates
            .borrow()
            .iter()
            .map(|update| update.event.key.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.updates.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.borrow().is_empty()
    }
}

impl LiveEventSink for RecordingSink {
    fn publish(&self, update: LiveEventUpdate) -> Result<(), AppError> {
        self.updates.borrow_mut().push(update);
        Ok(())
    }
}

/// Sink whose every delivery fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSink;

impl LiveEventSink for FailingSink {
    fn publish(&self, update: LiveEventUpdate) -> Result<(), AppError> {
        Err(AppError::notification_delivery(
            update.event.key,
            "listener unavailable",
        ))
    }
}
