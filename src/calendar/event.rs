//! The calendar event entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CalendarError;
use crate::config::{Settings, TimeFormat};
use crate::extractors::{Category, ExtractedEventInfo, Priority, Recurrence, UNTITLED_EVENT};

/// Example date phrases shown when an input is rejected for lacking a date.
pub const DATE_HINTS: [&str; 3] = ["tomorrow", "next Tuesday", "March 15th"];

/// A calendar event owned by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Generated identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Day of the event.
    pub date: NaiveDate,
    /// Canonical 12h time, when one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Free-text location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Longer description; never set from text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CSS color.
    pub color: String,
    /// Priority.
    pub priority: Priority,
    /// Hashtags.
    pub tags: Vec<String>,
    /// Reminder offset in minutes.
    pub reminder_minutes: u32,
    /// Whether the event is done.
    pub completed: bool,
    /// Recurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurrence>,
    /// Attendee names; never set from text.
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Free-form notes; never set from text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Duration in minutes.
    pub duration_minutes: u32,
}

impl Event {
    /// Build an event from an extraction, filling defaults from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoDateFound`] when the extraction has no
    /// date; such input is not actionable as an event.
    pub fn from_extracted(
        info: ExtractedEventInfo,
        settings: &Settings,
    ) -> Result<Self, CalendarError> {
        let date = info.date.ok_or(CalendarError::NoDateFound)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: info.title.unwrap_or_else(|| UNTITLED_EVENT.to_owned()),
            date,
            time: info.time,
            location: info.location,
            description: None,
            color: settings.default_event_color.clone(),
            priority: info.priority,
            tags: info.tags,
            reminder_minutes: settings.default_reminder_minutes,
            completed: false,
            recurring: info.recurring,
            attendees: Vec::new(),
            notes: None,
            category: info.category,
            duration_minutes: settings.default_event_duration_minutes,
        })
    }

    /// First eight hex digits of the id, enough to address it in a session.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string().chars().take(8).collect()
    }

    /// The event time rendered in `format`, if it has one.
    pub fn display_time(&self, format: TimeFormat) -> Option<String> {
        let time = self.time.as_deref()?;
        match format {
            TimeFormat::TwelveHour => Some(time.to_owned()),
            TimeFormat::TwentyFourHour => Some(to_24h(time).unwrap_or_else(|| time.to_owned())),
        }
    }

    /// One-line summary for listings.
    pub fn summary_line(&self, format: TimeFormat) -> String {
        let mut line = format!("{} {}", self.short_id(), self.date);
        if let Some(time) = self.display_time(format) {
            line.push(' ');
            line.push_str(&time);
        }
        line.push_str("  ");
        line.push_str(&self.title);
        line.push_str(&format!(" [{}]", self.priority));
        if let Some(location) = &self.location {
            line.push_str(&format!(" @ {location}"));
        }
        if let Some(recurring) = self.recurring {
            line.push_str(&format!(" ({recurring})"));
        }
        for tag in &self.tags {
            line.push_str(&format!(" #{tag}"));
        }
        if self.completed {
            line.push_str(" ✓");
        }
        line
    }
}

/// Convert canonical `h:mm{am|pm}` to `HH:MM`. Hours outside 1-12 are not
/// converted and yield `None`.
fn to_24h(time: &str) -> Option<String> {
    let (clock, pm) = if let Some(clock) = time.strip_suffix("pm") {
        (clock, true)
    } else {
        (time.strip_suffix("am")?, false)
    };
    let (hour, minute) = clock.split_once(':')?;
    let hour = hour.parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let base = hour.checked_rem(12)?;
    let hour = if pm { base.checked_add(12)? } else { base };
    Some(format!("{hour:02}:{minute}"))
}
