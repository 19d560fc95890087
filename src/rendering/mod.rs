pub mod notifications;
pub mod ordering;
pub mod sections;
pub mod text_output;

pub use notifications::{ChannelSink, FnSink, LiveEventSink, LiveEventUpdate, NoopSink};
pub use sections::{EventListRenderer, ListEntry};
pub use text_output::{format_entries, write_entries};
