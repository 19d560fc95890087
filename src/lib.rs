//! FRC event list library
//!
//! Turns a season's event records into grouped, labelled lists: which
//! competition week an event belongs to, how a section is titled, and how a
//! long sponsor-laden event name shortens for display. Events that are in
//! progress are reported to a pluggable sink while the list is built.
//!
//! # Examples
//!
//! ```rust
//! use frc_events::events::{Event, EventType};
//! use frc_events::rendering::{EventListRenderer, ListEntry};
//! use frc_events::season::StaticSeasonCalendar;
//!
//! let events: Vec<Event> = serde_json::from_str(
//!     r#"[{"key": "2019casj", "name": "Silicon Valley Regional", "event_type": "REGIONAL"}]"#,
//! )
//! .unwrap();
//!
//! let renderer = EventListRenderer::new(StaticSeasonCalendar::default());
//! let entries = renderer.render_for_team_schedule(&events);
//!
//! assert_eq!(entries[0], ListEntry::Header("Regional Events".to_string()));
//! assert_eq!(entries[1].event().map(|e| e.event_type), Some(EventType::Regional));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod rendering;
pub mod season;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use events::{DistrictType, Event, EventType, short_name};
pub use rendering::{EventListRenderer, ListEntry, LiveEventSink, LiveEventUpdate};
pub use season::{SeasonCalendar, StaticSeasonCalendar};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
