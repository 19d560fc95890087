pub mod calendar;
pub mod dates;
pub mod week_labels;

pub use calendar::{
    SeasonCalendar, SeasonWeeks, StaticSeasonCalendar, competition_week, iso_week_of_year,
};
pub use dates::{date_range_label, month_name};
pub use week_labels::{label_for_event, label_from_week_number, week_number_from_label};
