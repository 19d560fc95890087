//! Short display names for events.
//!
//! Official names carry district prefixes, sponsor clauses and venue words
//! ("MAR District - Hatboro-Horsham Event", "Silicon Valley Regional
//! sponsored by Google.org"). A short ordered table of name shapes strips
//! that boilerplate; the first shape that matches wins and anything else is
//! returned trimmed.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// One recognised name shape.
///
/// `pattern` must match (its anchors decide whether that is a whole-name or
/// prefix match) and its first group is the candidate name. `refine` is then
/// tried against the candidate; when it matches at the start, its first group
/// replaces the candidate.
struct ShortNameRule {
    shape: &'static str,
    pattern: Regex,
    refine: Regex,
    /// Trim the candidate before `refine` runs, not only the final result.
    trim_before_refine: bool,
}

impl ShortNameRule {
    fn new(shape: &'static str, pattern: &str, refine: &str, trim_before_refine: bool) -> Self {
        Self {
            shape,
            pattern: Regex::new(pattern).unwrap(),
            refine: Regex::new(refine).unwrap(),
            trim_before_refine,
        }
    }

    fn apply(&self, name: &str) -> Option<String> {
        let captured = self.pattern.captures(name)?.get(1)?.as_str();
        let candidate = if self.trim_before_refine {
            captured.trim()
        } else {
            captured
        };

        let refined = self
            .refine
            .captures(candidate)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(candidate);

        trace!("Short name rule '{}' matched {name:?}", self.shape);
        Some(refined.trim().to_string())
    }
}

static RULES: LazyLock<Vec<ShortNameRule>> = LazyLock::new(|| {
    vec![
        // "XYZ District - NAME Event ..."
        ShortNameRule::new(
            "district prefix",
            r"^[A-Z]{2,3} District -(.+)$",
            r"^(.+)Event",
            true,
        ),
        // "NAME Regional ...", "FRC NAME State Championship", "PNW NAME District ..."
        ShortNameRule::new(
            "regional suffix",
            r"^\s*(?:MAR |PNW )?(?:FIRST Robotics|FRC)?(.+)(?:District|Regional|Region|State|Tournament|FRC|Field)\b",
            r"^(.+)(?:FIRST Robotics|FRC)",
            false,
        ),
    ]
});

/// Extracts a short name like "Silicon Valley" from a full event name.
///
/// Never fails: names matching no known shape come back trimmed.
///
/// # Examples
/// ```
/// use frc_events::events::short_name::short_name;
///
/// assert_eq!(short_name("Silicon Valley Regional sponsored by Google.org"), "Silicon Valley");
/// assert_eq!(short_name("MAR District - Silicon Valley Event sponsored by X"), "Silicon Valley");
/// assert_eq!(short_name("  Some Arbitrary Title "), "Some Arbitrary Title");
/// ```
pub fn short_name(event_name: &str) -> String {
    RULES
        .iter()
        .find_map(|rule| rule.apply(event_name))
        .unwrap_or_else(|| event_name.trim().to_string())
}
