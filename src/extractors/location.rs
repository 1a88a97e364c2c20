//! Location extractor: the phrase introduced by "at" or "in".

use std::sync::LazyLock;

use regex::Regex;

use super::time::matches_time;

/// Strict first, loose fallback. The strict pattern stops at the first
/// following "at"/"on" clause, comma, or end of input; the loose one runs to
/// a comma or the end. The `regex` crate has no look-ahead, so the strict
/// terminator is consumed rather than peeked; the capture is the same.
static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:at|in)\s+(?:the\s+)?([^,.]+?)(?:\s+at|\s*$|\s*,|\s+on\s+)",
        r"(?i)(?:at|in)\s+(?:the\s+)?([^,.]+)(?:\s*$|,)",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Extract a trimmed location span.
///
/// Only the first match of each pattern is considered. A candidate that
/// contains a clock time ("at 3pm") is rejected so times are never read as
/// places.
pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_PATTERNS.iter().find_map(|pattern| {
        let span = pattern.captures(text)?.get(1)?.as_str();
        if matches_time(span) {
            None
        } else {
            Some(span.trim().to_owned())
        }
    })
}
