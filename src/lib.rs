//! smartcal — a natural-language calendar.
//!
//! Type "Urgent meeting with Sarah tomorrow at 3pm #work" and get a
//! structured event. The [`extractors`] module is the rule-based engine;
//! [`calendar`] turns its output into events held in memory for a session.
//!
//! See `DESIGN.md` for architecture notes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod logging;

pub mod calendar;
pub mod extractors;
pub mod session;
