//! Date formatting used in event labels and list rows.

use chrono::NaiveDate;

const EVENT_DATE_FORMAT: &str = "%b %-d, %Y";
const EVENT_SHORT_DATE_FORMAT: &str = "%b %-d";
const MONTH_FORMAT: &str = "%B";

/// Full English month name of `date` ("March").
pub fn month_name(date: NaiveDate) -> String {
    date.format(MONTH_FORMAT).to_string()
}

/// Formats an event's date range for display.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use frc_events::season::dates::date_range_label;
///
/// let start = NaiveDate::from_ymd_opt(2016, 3, 3);
/// let end = NaiveDate::from_ymd_opt(2016, 3, 5);
/// assert_eq!(date_range_label(start, end), "Mar 3 to Mar 5, 2016");
/// assert_eq!(date_range_label(start, start), "Mar 3, 2016");
/// assert_eq!(date_range_label(start, None), "");
/// ```
pub fn date_range_label(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };
    if start == end {
        return start.format(EVENT_DATE_FORMAT).to_string();
    }
    format!(
        "{} to {}",
        start.format(EVENT_SHORT_DATE_FORMAT),
        end.format(EVENT_DATE_FORMAT)
    )
}
