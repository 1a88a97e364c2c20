//! Calendar events assembled from extraction results.
//!
//! The extractors only describe what the text says. This module owns the
//! caller side: deciding whether an extraction is actionable, filling in
//! settings-driven defaults, and keeping the session's events in memory.

use uuid::Uuid;

pub mod event;
pub mod store;

pub use event::{Event, DATE_HINTS};
pub use store::EventStore;

/// Errors produced when adding or updating events.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Input was blank.
    #[error("nothing to add: input is empty")]
    EmptyInput,

    /// No date could be resolved from the input.
    #[error(
        "Could not detect a date in your input. Please try again with a clearer date mention.\n\nTry phrases like:\n- \"tomorrow\"\n- \"next Tuesday\"\n- \"March 15th\""
    )]
    NoDateFound,

    /// No event with this id in the store.
    #[error("no event with id {0}")]
    EventNotFound(Uuid),

    /// No event id starts with this prefix.
    #[error("no event id starts with {0:?}")]
    UnknownIdPrefix(String),

    /// More than one event id starts with this prefix.
    #[error("event id prefix {prefix:?} is ambiguous ({matches} matches)")]
    AmbiguousIdPrefix {
        /// The prefix as typed.
        prefix: String,
        /// Number of ids sharing the prefix.
        matches: usize,
    },
}
