use tracing::{debug, instrument, warn};

use crate::constants::labels::EVENTS_SUFFIX;
use crate::events::{DistrictType, Event, EventType};
use crate::season::calendar::SeasonCalendar;
use crate::season::week_labels::label_from_week_number;

use super::notifications::{LiveEventSink, LiveEventUpdate, NoopSink};
use super::ordering::{by_date, by_type_and_date, sorted_by};

/// One row of a rendered event list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry<'a> {
    Header(String),
    Event(&'a Event),
}

impl<'a> ListEntry<'a> {
    pub fn header_text(&self) -> Option<&str> {
        match self {
            ListEntry::Header(text) => Some(text.as_str()),
            ListEntry::Event(_) => None,
        }
    }

    pub fn event(&self) -> Option<&'a Event> {
        match self {
            ListEntry::Header(_) => None,
            ListEntry::Event(event) => Some(*event),
        }
    }
}

/// Groups event lists into sections separated by headers.
///
/// The renderer holds no state between calls. Every in-progress event it
/// walks is published to `sink` right after the event's own entry.
#[derive(Debug, Clone)]
pub struct EventListRenderer<C, S = NoopSink> {
    calendar: C,
    sink: S,
}

impl<C: SeasonCalendar> EventListRenderer<C, NoopSink> {
    /// Renderer that drops live-event notifications.
    pub fn new(calendar: C) -> Self {
        EventListRenderer {
            calendar,
            sink: NoopSink,
        }
    }
}

impl<C: SeasonCalendar, S: LiveEventSink> EventListRenderer<C, S> {
    pub fn with_sink(calendar: C, sink: S) -> Self {
        EventListRenderer { calendar, sink }
    }

    /// Events grouped by type (districts split per district), each group in date order.
    pub fn render_for_team_schedule<'a>(&self, events: &'a [Event]) -> Vec<ListEntry<'a>> {
        let mut output = Vec::with_capacity(events.len() * 2);
        self.render_for_team_schedule_into(events, &mut output);
        output
    }

    pub fn render_for_team_schedule_into<'a, O>(&self, events: &'a [Event], output: &mut O)
    where
        O: Extend<ListEntry<'a>>,
    {
        self.render_by_type(events, output);
    }

    /// Same grouping and order as the team schedule view.
    pub fn render_for_week<'a>(&self, events: &'a [Event]) -> Vec<ListEntry<'a>> {
        let mut output = Vec::with_capacity(events.len() * 2);
        self.render_for_week_into(events, &mut output);
        output
    }

    // TODO: sort by name within type once the week view gets its own comparator
    pub fn render_for_week_into<'a, O>(&self, events: &'a [Event], output: &mut O)
    where
        O: Extend<ListEntry<'a>>,
    {
        self.render_by_type(events, output);
    }

    /// Events in date order, with a header whenever the week label changes.
    pub fn render_for_district<'a>(&self, events: &'a [Event]) -> Vec<ListEntry<'a>> {
        let mut output = Vec::with_capacity(events.len() * 2);
        self.render_for_district_into(events, &mut output);
        output
    }

    #[instrument(skip_all, fields(events = events.len()))]
    pub fn render_for_district_into<'a, O>(&self, events: &'a [Event], output: &mut O)
    where
        O: Extend<ListEntry<'a>>,
    {
        let mut last_header: Option<String> = None;

        for event in sorted_by(events, by_date) {
            let week_label =
                label_from_week_number(&self.calendar, event.season_year(), event.week);
            let header = format!("{week_label} {EVENTS_SUFFIX}");

            if last_header.as_deref() != Some(header.as_str()) {
                output.extend(Some(ListEntry::Header(header.clone())));
            }
            output.extend(Some(ListEntry::Event(event)));
            self.notify_if_live(event);

            last_header = Some(header);
        }
    }

    #[instrument(skip_all, fields(events = events.len()))]
    fn render_by_type<'a, O>(&self, events: &'a [Event], output: &mut O)
    where
        O: Extend<ListEntry<'a>>,
    {
        let mut last_type: Option<EventType> = None;
        let mut last_district: Option<&DistrictType> = None;

        for event in sorted_by(events, by_type_and_date) {
            let current_type = event.event_type;
            let current_district = event.grouping_district();

            let type_changed = last_type != Some(current_type);
            let district_changed =
                current_type == EventType::District && current_district != last_district;

            if type_changed || district_changed {
                output.extend(Some(ListEntry::Header(type_header(event))));
            }
            output.extend(Some(ListEntry::Event(event)));
            self.notify_if_live(event);

            last_type = Some(current_type);
            last_district = current_district;
        }
    }

    fn notify_if_live(&self, event: &Event) {
        if !event.is_happening_now {
            return;
        }
        debug!("Sending live event broadcast: {}", event.key);
        if let Err(e) = self.sink.publish(LiveEventUpdate::new(event)) {
            warn!("Dropping live event update: {e}");
        }
    }
}

fn type_header(event: &Event) -> String {
    match (event.event_type, event.grouping_district()) {
        (EventType::District, Some(district)) => {
            format!("{} District {EVENTS_SUFFIX}", district.display_name())
        }
        (event_type, _) => event_type.display_name().to_string(),
    }
}
