//! In-memory event list for one session.
//!
//! Nothing is persisted; the store is dropped with the session.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};
use uuid::Uuid;

use super::{CalendarError, Event};
use crate::config::Settings;
use crate::extractors;

/// Events in insertion order.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract an event from `text` and add it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyInput`] for blank text and
    /// [`CalendarError::NoDateFound`] when no date could be resolved. The
    /// store is unchanged on error.
    pub fn add_from_text(
        &mut self,
        text: &str,
        reference: NaiveDate,
        settings: &Settings,
    ) -> Result<&Event, CalendarError> {
        if text.trim().is_empty() {
            return Err(CalendarError::EmptyInput);
        }
        let info = extractors::extract(text, reference);
        let event = Event::from_extracted(info, settings)?;
        Ok(self.insert(event))
    }

    /// Append an already-built event.
    pub fn insert(&mut self, event: Event) -> &Event {
        info!(id = %event.id, date = %event.date, title = %event.title, "event added");
        let index = self.events.len();
        self.events.push(event);
        &self.events[index]
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Events to show under `settings`: completed ones are hidden unless
    /// `show_completed` is set.
    pub fn visible<'a>(&'a self, settings: &'a Settings) -> impl Iterator<Item = &'a Event> {
        self.events
            .iter()
            .filter(move |event| settings.show_completed || !event.completed)
    }

    /// Look up an event by id.
    pub fn get(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events on `date`, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }

    /// Events in one month, grouped by day in date order.
    pub fn events_in_month(&self, year: i32, month: u32) -> BTreeMap<NaiveDate, Vec<&Event>> {
        let mut days: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
        for event in self
            .events
            .iter()
            .filter(|event| event.date.year() == year && event.date.month() == month)
        {
            days.entry(event.date).or_default().push(event);
        }
        days
    }

    /// Resolve a full id or a unique id prefix (as shown by
    /// [`Event::short_id`]).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownIdPrefix`] when nothing matches and
    /// [`CalendarError::AmbiguousIdPrefix`] when several ids do.
    pub fn resolve_id(&self, prefix: &str) -> Result<Uuid, CalendarError> {
        if let Ok(id) = Uuid::parse_str(prefix) {
            return self
                .get(id)
                .map(|event| event.id)
                .ok_or(CalendarError::EventNotFound(id));
        }

        let needle = prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CalendarError::UnknownIdPrefix(prefix.to_owned()));
        }
        let matches: Vec<Uuid> = self
            .events
            .iter()
            .map(|event| event.id)
            .filter(|id| id.simple().to_string().starts_with(&needle))
            .collect();
        match matches.as_slice() {
            [] => Err(CalendarError::UnknownIdPrefix(prefix.to_owned())),
            [id] => Ok(*id),
            _ => Err(CalendarError::AmbiguousIdPrefix {
                prefix: prefix.to_owned(),
                matches: matches.len(),
            }),
        }
    }

    /// Mark an event done or not done.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for an unknown id.
    pub fn set_completed(&mut self, id: Uuid, completed: bool) -> Result<(), CalendarError> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(CalendarError::EventNotFound(id))?;
        event.completed = completed;
        debug!(%id, completed, "event completion updated");
        Ok(())
    }

    /// Flip an event's completion state and return the new state.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for an unknown id.
    pub fn toggle_completed(&mut self, id: Uuid) -> Result<bool, CalendarError> {
        let current = self
            .get(id)
            .map(|event| event.completed)
            .ok_or(CalendarError::EventNotFound(id))?;
        self.set_completed(id, !current)?;
        Ok(!current)
    }

    /// Remove an event and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EventNotFound`] for an unknown id.
    pub fn remove(&mut self, id: Uuid) -> Result<Event, CalendarError> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or(CalendarError::EventNotFound(id))?;
        let event = self.events.remove(index);
        info!(%id, "event removed");
        Ok(event)
    }
}
