//! Plain-text presentation of rendered event lists.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::AppError;
use crate::events::{Event, event_code, short_name};
use crate::season::dates::date_range_label;

use super::sections::ListEntry;

const CODE_WIDTH: usize = 8;
const LIVE_MARKER: &str = "[LIVE]";

/// Formats one event row: code, short name, date range and live marker.
pub fn format_event_row(event: &Event) -> String {
    let mut row = format!(
        "  {:<width$} {}",
        event_code(&event.key),
        short_name(&event.name),
        width = CODE_WIDTH
    );

    let dates = date_range_label(event.start_date, event.end_date);
    if !dates.is_empty() {
        row.push_str(&format!("  {dates}"));
    }
    if event.is_happening_now {
        row.push_str(&format!("  {LIVE_MARKER}"));
    }
    row
}

/// Formats entries as lines without any terminal styling.
pub fn format_entries(entries: &[ListEntry<'_>]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            ListEntry::Header(text) => text.clone(),
            ListEntry::Event(event) => format_event_row(event),
        })
        .collect()
}

/// Writes entries to `out`, with bold yellow headers and green live rows when
/// `colors` is set.
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[ListEntry<'_>],
    colors: bool,
) -> Result<(), AppError> {
    for entry in entries {
        match entry {
            ListEntry::Header(text) if colors => {
                queue!(
                    out,
                    SetForegroundColor(Color::Yellow),
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    ResetColor,
                    Print("\n")
                )?;
            }
            ListEntry::Event(event) if colors && event.is_happening_now => {
                queue!(
                    out,
                    SetForegroundColor(Color::Green),
                    Print(format_event_row(event)),
                    ResetColor,
                    Print("\n")
                )?;
            }
            ListEntry::Header(text) => writeln!(out, "{text}")?,
            ListEntry::Event(event) => writeln!(out, "{}", format_event_row(event))?,
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::testing_utils::TestEventBuilder;
    use chrono::NaiveDate;

    fn regional() -> Event {
        TestEventBuilder::new("2016casj", EventType::Regional)
            .name("Silicon Valley Regional sponsored by Google.org")
            .dates(
                NaiveDate::from_ymd_opt(2016, 3, 31).unwrap(),
                NaiveDate::from_ymd_opt(2016, 4, 2).unwrap(),
            )
            .build()
    }

    #[test]
    fn test_format_event_row() {
        assert_eq!(
            format_event_row(&regional()),
            "  CASJ     Silicon Valley  Mar 31 to Apr 2, 2016"
        );
    }

    #[test]
    fn test_format_event_row_live_without_dates() {
        let event = TestEventBuilder::new("2019iri", EventType::Offseason)
            .name("Indiana Robotics Invitational")
            .live()
            .build();
        assert_eq!(
            format_event_row(&event),
            "  IRI      Indiana Robotics Invitational  [LIVE]"
        );
    }

    #[test]
    fn test_plain_output() {
        let event = regional();
        let entries = vec![
            ListEntry::Header("Regional Events".to_string()),
            ListEntry::Event(&event),
        ];
        let mut buffer = Vec::new();

        write_entries(&mut buffer, &entries, false).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, format!("{}\n", format_entries(&entries).join("\n")));
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let event = regional();
        let entries = vec![
            ListEntry::Header("Regional Events".to_string()),
            ListEntry::Event(&event),
        ];
        let mut buffer = Vec::new();

        write_entries(&mut buffer, &entries, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Regional Events"));
        assert!(text.contains("\x1b["));
    }
}
