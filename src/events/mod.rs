pub mod keys;
pub mod models;
pub mod short_name;

pub use keys::{event_code, short_code, validate_key, year_of};
pub use models::{DistrictType, Event, EventType, mark_happening_on};
pub use short_name::short_name;
