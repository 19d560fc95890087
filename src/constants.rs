//! Application-wide constants and label templates
//!
//! Label text is shared between the week/label mapper and the list renderer,
//! so it lives here rather than in either module.

/// Section and week label text
pub mod labels {
    pub const CHAMPIONSHIP: &str = "Championship Event";

    /// Suffix appended to a city for the two-championship seasons (2017 onward)
    pub const CITY_CHAMPIONSHIP_SUFFIX: &str = "Championship";

    pub const WEEK_PREFIX: &str = "Week";

    pub const WEEKLESS: &str = "Other Official Events";

    /// Suffix appended to a month name for offseason events
    pub const OFFSEASON_SUFFIX: &str = "Offseason Events";

    /// Offseason bucket when no month is known (numeric week path, or no start date)
    pub const OFFSEASON: &str = "Offseason Events";

    pub const PRESEASON: &str = "Preseason Events";

    /// Appended to district names and week labels in section headers
    pub const EVENTS_SUFFIX: &str = "Events";
}

/// Season calendar defaults
pub mod season {
    /// Calendar week-of-year that precedes competition week 1 in most seasons
    pub const DEFAULT_FIRST_COMPETITION_WEEK: i32 = 8;

    /// Competition week of the championship in most seasons
    pub const DEFAULT_CHAMPIONSHIP_WEEK: i32 = 8;

    /// The season whose week numbering was shifted by the week 0.5 event
    pub const SHIFTED_WEEK_SEASON: i32 = 2016;

    /// The only event played in "Week 0.5"
    pub const HALF_WEEK_EVENT_KEY: &str = "2016scmb";

    /// First season where championship labels carry the host city
    pub const CITY_CHAMPIONSHIP_SINCE: i32 = 2017;

    /// Upper bound (exclusive) of the reverse label search
    pub const MAX_LABEL_SEARCH_WEEK: i32 = 20;

    /// Earliest season accepted in configuration overrides
    pub const MIN_SEASON_YEAR: i32 = 1992;

    /// Latest season accepted in configuration overrides
    pub const MAX_SEASON_YEAR: i32 = 2100;
}

/// Sentinel values returned by lookups that do not fail
pub mod sentinels {
    /// Returned by `year_of` for keys that fail validation
    pub const INVALID_YEAR: i32 = -1;

    /// Returned by `week_number_from_label` when no week produces the label
    pub const WEEK_NOT_FOUND: i32 = -1;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "FRC_EVENTS_LOG_FILE";

    /// Environment variable for an alternate config file location
    pub const CONFIG_PATH: &str = "FRC_EVENTS_CONFIG";
}

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "frc_events.log";

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "frc_events";
