//! Structured extractors: deterministic parsers from free text to event fields.
//!
//! Each sub-module resolves one attribute of an event from the raw input
//! string. [`extract`] runs all of them over the same text and reference
//! date and merges the results into an [`ExtractedEventInfo`].
//!
//! Extractors never fail. An attribute that cannot be determined is simply
//! absent from the record; callers decide what absence means (a missing
//! date, for example, rejects the whole input).

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod date;
pub mod keywords;
pub mod location;
pub mod tags;
pub mod time;
pub mod title;

/// Title used when nothing in the input can serve as one.
pub const UNTITLED_EVENT: &str = "Untitled Event";

/// Event priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can be skipped or moved.
    Low,
    /// Default when no priority keyword is present.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Lowercase label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// Every year.
    Yearly,
}

impl Recurrence {
    /// Lowercase label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed category vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Work.
    Work,
    /// Personal.
    Personal,
    /// Health.
    Health,
    /// Social.
    Social,
    /// Family.
    Family,
    /// Shopping.
    Shopping,
    /// Travel.
    Travel,
    /// Education.
    Education,
    /// Finance.
    Finance,
    /// Matched only when the word "other" appears; never a fallback.
    Other,
}

impl Category {
    /// Lowercase label, identical to the serialized form and to the keyword
    /// that selects the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Social => "social",
            Self::Family => "family",
            Self::Shopping => "shopping",
            Self::Travel => "travel",
            Self::Education => "education",
            Self::Finance => "finance",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the extractors could determine from one input string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEventInfo {
    /// Human-readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Absolute calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Clock time in canonical `{hour}:{minute}{am|pm}` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Free-text location span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Priority, defaulted to medium.
    #[serde(default)]
    pub priority: Priority,

    /// Hashtags in order of first occurrence, without the `#`.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Recurrence; absent means a one-off event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurrence>,

    /// Category from the fixed vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Run every extractor over `text` and merge the results.
///
/// `reference` is the day treated as "today" when resolving relative
/// phrases such as "tomorrow" or "next Tuesday". The same text and reference
/// always produce the same record.
pub fn extract(text: &str, reference: NaiveDate) -> ExtractedEventInfo {
    let info = ExtractedEventInfo {
        title: Some(title::extract_title(text)),
        date: date::extract_date(text, reference),
        time: time::extract_time(text),
        location: location::extract_location(text),
        priority: keywords::extract_priority(text).unwrap_or_default(),
        tags: tags::extract_tags(text),
        recurring: keywords::extract_recurrence(text),
        category: keywords::extract_category(text),
    };

    debug!(
        %reference,
        has_date = info.date.is_some(),
        has_time = info.time.is_some(),
        has_location = info.location.is_some(),
        priority = %info.priority,
        tags = info.tags.len(),
        "extracted event info"
    );

    info
}

/// [`extract`] against the local calendar date, read once per call.
pub fn extract_today(text: &str) -> ExtractedEventInfo {
    extract(text, chrono::Local::now().date_naive())
}
