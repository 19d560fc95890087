//! Event, match and district key helpers.
//!
//! Keys look like `2016necmp` (event), `2014calb_qm17` (match) or
//! `2014pnw` (district). None of these functions fail; malformed input
//! yields a sentinel or the input itself.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::sentinels::INVALID_YEAR;

// ASCII digits only; `\d` also matches digits from other scripts.
static EVENT_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-9][0-9]{3})[a-z0-9]+$").unwrap());

static ALPHA_RUN_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

static DIGITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Returns true if `key` is a well-formed event key.
///
/// # Examples
/// ```
/// use frc_events::events::keys::validate_key;
///
/// assert!(validate_key("2016necmp"));
/// assert!(!validate_key("necmp"));
/// assert!(!validate_key(""));
/// ```
pub fn validate_key(key: &str) -> bool {
    !key.is_empty() && EVENT_KEY_PATTERN.is_match(key)
}

/// Returns the season year encoded in an event key, or `INVALID_YEAR` (-1).
pub fn year_of(key: &str) -> i32 {
    if key.is_empty() {
        return INVALID_YEAR;
    }
    EVENT_KEY_PATTERN
        .captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse().ok())
        .unwrap_or(INVALID_YEAR)
}

/// Strips every digit from a valid event key (`2016necmp` -> `necmp`).
///
/// Invalid keys are returned unchanged.
pub fn short_code(key: &str) -> String {
    if validate_key(key) {
        DIGITS_PATTERN.replace_all(key, "").into_owned()
    } else {
        key.to_string()
    }
}

/// Returns the first run of ASCII letters in a match, event or district key,
/// upper-cased. Empty when the identifier contains no letters.
///
/// # Examples
/// ```
/// use frc_events::events::keys::event_code;
///
/// assert_eq!(event_code("2014calb_qm17"), "CALB");
/// assert_eq!(event_code("2014pnw"), "PNW");
/// assert_eq!(event_code("2014"), "");
/// ```
pub fn event_code(identifier: &str) -> String {
    ALPHA_RUN_PATTERN
        .find(identifier)
        .map(|m| m.as_str().to_ascii_uppercase())
        .unwrap_or_default()
}
