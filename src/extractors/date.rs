//! Date extractor: relative phrases, month/day phrases and "next <weekday>".

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;

static MONTH_DAY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\s+([0-9]{1,2})(?:st|nd|rd|th)?",
    )
    .ok()
});

static NEXT_WEEKDAY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)next\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)").ok()
});

/// Month abbreviations, January first.
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Weekday names indexed from Sunday = 0.
const WEEKDAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Resolve an absolute date from `text` relative to `reference`.
///
/// Priority order, first match wins:
/// 1. "tomorrow"  2. "today"  3. "next week"
/// 4. month name + day number, in the reference year
/// 5. "next <weekday>", strictly after the reference date
///
/// A month/day phrase naming an impossible date ("Feb 30") yields `None`
/// without falling through to the weekday rule.
pub fn extract_date(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();

    if lower.contains("tomorrow") {
        return reference.checked_add_days(Days::new(1));
    }
    if lower.contains("today") {
        return Some(reference);
    }
    if lower.contains("next week") {
        return reference.checked_add_days(Days::new(7));
    }

    if let Some(caps) = MONTH_DAY.as_ref().and_then(|re| re.captures(text)) {
        let month = caps.get(1).and_then(|m| month_number(m.as_str()))?;
        let day = caps.get(2)?.as_str().parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(reference.year(), month, day);
    }

    let caps = NEXT_WEEKDAY.as_ref()?.captures(text)?;
    let target = weekday_index(caps.get(1)?.as_str())?;
    next_weekday(reference, target)
}

/// The next date after `reference` falling on weekday `target`
/// (Sunday = 0). Never returns `reference` itself.
pub fn next_weekday(reference: NaiveDate, target: u32) -> Option<NaiveDate> {
    let current = reference.weekday().num_days_from_sunday();
    let days_to_add = if target > current {
        target.saturating_sub(current)
    } else {
        target.saturating_add(7).saturating_sub(current)
    };
    reference.checked_add_days(Days::new(u64::from(days_to_add)))
}

/// 1-based month number for a month name or abbreviation.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let position = MONTHS.iter().position(|m| lower.starts_with(m))?;
    u32::try_from(position).ok()?.checked_add(1)
}

fn weekday_index(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let position = WEEKDAYS.iter().position(|d| *d == lower)?;
    u32::try_from(position).ok()
}
