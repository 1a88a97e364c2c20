//! Interactive session: one line of input per event, plus `:` commands.
//!
//! Each non-command line goes through the extractors and, if a date was
//! found, becomes an event in the session's in-memory store. Lines that
//! start with `:` manage the store.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::calendar::{CalendarError, EventStore};
use crate::config::Settings;

/// Help text listing the session commands.
pub const HELP: &str = "\
Type an event, e.g. \"Meeting with John tomorrow at 3pm in Conference Room\".
Commands:
  :list              all events
  :month [YYYY-MM]   events in a month (default: the reference month)
  :day YYYY-MM-DD    events on one day
  :done <id>         toggle completion
  :rm <id>           remove an event
  :help              this text
  :quit              end the session (events are discarded)";

/// A parsed session input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Event text to extract and add.
    Add(String),
    /// List all visible events.
    List,
    /// Events in one month; `None` means the reference month.
    Month(Option<(i32, u32)>),
    /// Events on one day.
    Day(NaiveDate),
    /// Toggle completion of an event by id or id prefix.
    Done(String),
    /// Remove an event by id or id prefix.
    Remove(String),
    /// Show the help text.
    Help,
    /// End the session.
    Quit,
}

/// Errors produced while parsing a session command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Line started with `:` but named no known command.
    #[error("unknown command :{0} (try :help)")]
    Unknown(String),

    /// Command needs an argument that was not given.
    #[error(":{0} needs an argument")]
    MissingArgument(&'static str),

    /// Argument could not be parsed.
    #[error("invalid argument for :{command}: {value:?}")]
    InvalidArgument {
        /// Command name.
        command: &'static str,
        /// Argument as typed.
        value: String,
    },
}

impl Command {
    /// Parse one input line. Blank lines are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Some(Self::Add(line.to_owned())));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (rest, None),
        };

        let command = match name.to_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "month" => Self::Month(arg.map(parse_month).transpose()?),
            "day" => {
                let value = arg.ok_or(CommandError::MissingArgument("day"))?;
                let date = value
                    .parse::<NaiveDate>()
                    .map_err(|_| CommandError::InvalidArgument {
                        command: "day",
                        value: value.to_owned(),
                    })?;
                Self::Day(date)
            }
            "done" => Self::Done(arg.ok_or(CommandError::MissingArgument("done"))?.to_owned()),
            "rm" | "remove" => {
                Self::Remove(arg.ok_or(CommandError::MissingArgument("rm"))?.to_owned())
            }
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };
        Ok(Some(command))
    }
}

fn parse_month(value: &str) -> Result<(i32, u32), CommandError> {
    let invalid = || CommandError::InvalidArgument {
        command: "month",
        value: value.to_owned(),
    };
    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    if (1..=12).contains(&month) {
        Ok((year, month))
    } else {
        Err(invalid())
    }
}

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading.
    Reply(String),
    /// End the session.
    Quit,
}

/// Session state: the event list plus what is needed to add to it.
#[derive(Debug)]
pub struct Session {
    store: EventStore,
    settings: Settings,
    reference: NaiveDate,
}

impl Session {
    /// Start a session with an empty store.
    pub fn new(settings: Settings, reference: NaiveDate) -> Self {
        Self {
            store: EventStore::new(),
            settings,
            reference,
        }
    }

    /// The session's events.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(None) => Outcome::Reply(String::new()),
            Ok(Some(Command::Quit)) => Outcome::Quit,
            Ok(Some(command)) => Outcome::Reply(self.run(command)),
            Err(e) => Outcome::Reply(e.to_string()),
        }
    }

    fn run(&mut self, command: Command) -> String {
        debug!(?command, "session command");
        let format = self.settings.time_format;
        match command {
            Command::Add(text) => {
                match self.store.add_from_text(&text, self.reference, &self.settings) {
                    Ok(event) => format!("added {}", event.summary_line(format)),
                    Err(e) => e.to_string(),
                }
            }
            Command::List => {
                let lines: Vec<String> = self
                    .store
                    .visible(&self.settings)
                    .map(|event| event.summary_line(format))
                    .collect();
                or_placeholder(lines)
            }
            Command::Month(month) => {
                let (year, month) =
                    month.unwrap_or((self.reference.year(), self.reference.month()));
                let mut lines = Vec::new();
                for (day, events) in self.store.events_in_month(year, month) {
                    let shown: Vec<String> = events
                        .into_iter()
                        .filter(|event| self.settings.show_completed || !event.completed)
                        .map(|event| format!("  {}", event.summary_line(format)))
                        .collect();
                    if !shown.is_empty() {
                        lines.push(day.format("%a %b %-d").to_string());
                        lines.extend(shown);
                    }
                }
                or_placeholder(lines)
            }
            Command::Day(date) => {
                let lines: Vec<String> = self
                    .store
                    .events_on(date)
                    .into_iter()
                    .filter(|event| self.settings.show_completed || !event.completed)
                    .map(|event| event.summary_line(format))
                    .collect();
                or_placeholder(lines)
            }
            Command::Done(prefix) => match self.toggle(&prefix) {
                Ok(true) => "marked done".to_owned(),
                Ok(false) => "marked not done".to_owned(),
                Err(e) => e.to_string(),
            },
            Command::Remove(prefix) => {
                match self
                    .store
                    .resolve_id(&prefix)
                    .and_then(|id| self.store.remove(id))
                {
                    Ok(event) => format!("removed {}", event.title),
                    Err(e) => e.to_string(),
                }
            }
            Command::Help => HELP.to_owned(),
            Command::Quit => String::new(),
        }
    }

    fn toggle(&mut self, prefix: &str) -> Result<bool, CalendarError> {
        let id = self.store.resolve_id(prefix)?;
        self.store.toggle_completed(id)
    }
}

fn or_placeholder(lines: Vec<String>) -> String {
    if lines.is_empty() {
        "no events".to_owned()
    } else {
        lines.join("\n")
    }
}
