//! Title extractor.
//!
//! Prefers an "event-type + subject" phrase ("meeting with Sarah ..."). When
//! there is none, the title is whatever precedes the first temporal or
//! location marker word. A marker only counts when whitespace or the ends of
//! the text surround it, so "check-in" and "#at" stay intact.

use std::sync::LazyLock;

use regex::Regex;

use super::UNTITLED_EVENT;

const EVENT_TYPES: [&str; 9] = [
    "meeting",
    "appointment",
    "call",
    "lunch",
    "dinner",
    "conference",
    "event",
    "reminder",
    "task",
];

static EVENT_PHRASE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)({})\s+(?:with|about|for)?\s+([^,.]+)",
        EVENT_TYPES.join("|")
    );
    Regex::new(&pattern).ok()
});

static MARKER_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|\s)(?:at|in|on|tomorrow|next|today)(?:\s|$)").ok()
});

/// Derive a title from the raw input. Never empty.
pub fn extract_title(text: &str) -> String {
    if let Some(phrase) = EVENT_PHRASE.as_ref().and_then(|re| re.find(text)) {
        return phrase.as_str().trim().to_owned();
    }

    let head = match MARKER_WORD.as_ref().and_then(|re| re.find(text)) {
        Some(marker) => &text[..marker.start()],
        None => text,
    };
    let head = head.trim();
    if head.is_empty() {
        UNTITLED_EVENT.to_owned()
    } else {
        head.to_owned()
    }
}
