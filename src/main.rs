//! smartcal CLI entry point.
//!
//! Provides `parse`, `add`, and `session` subcommands for inspecting an
//! extraction, building a single event, or running an interactive session
//! with an in-memory event list.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use smartcal::calendar::Event;
use smartcal::config::{load_default_settings, load_settings, Settings};
use smartcal::extractors;
use smartcal::logging;
use smartcal::session::{Outcome, Session};

/// smartcal — turn free-form text into calendar events.
#[derive(Parser)]
#[command(name = "smartcal", version, about)]
struct Cli {
    /// Settings file (default: ~/.smartcal/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Print what the extractors find in TEXT as JSON.
    Parse {
        /// Event text; multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
        /// Day to treat as today (YYYY-MM-DD).
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Build one event from TEXT and print it as JSON.
    Add {
        /// Event text; multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
        /// Day to treat as today (YYYY-MM-DD).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Read events and commands from stdin; events last until exit.
    Session {
        /// Day to treat as today (YYYY-MM-DD).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => load_settings(path)?,
        None => load_default_settings()?,
    };

    match cli.command {
        Command::Parse {
            text,
            today,
            pretty,
        } => {
            logging::init_cli(&settings.logging.level);
            handle_parse(&text.join(" "), reference_date(today), pretty)
        }
        Command::Add { text, today } => {
            logging::init_cli(&settings.logging.level);
            handle_add(&text.join(" "), reference_date(today), &settings)
        }
        Command::Session { today } => {
            let _logging_guard = match &settings.logging.dir {
                Some(dir) => Some(logging::init_file(dir, &settings.logging.level)?),
                None => {
                    logging::init_cli(&settings.logging.level);
                    None
                }
            };
            handle_session(settings, reference_date(today))
        }
    }
}

/// The injected reference date, or the local date.
fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Print the raw extraction.
fn handle_parse(text: &str, reference: NaiveDate, pretty: bool) -> anyhow::Result<()> {
    let info = extractors::extract(text, reference);
    let json = if pretty {
        serde_json::to_string_pretty(&info)
    } else {
        serde_json::to_string(&info)
    }
    .context("failed to serialize extraction")?;
    println!("{json}");
    Ok(())
}

/// Build one event; a missing date is an error.
fn handle_add(text: &str, reference: NaiveDate, settings: &Settings) -> anyhow::Result<()> {
    let info = extractors::extract(text, reference);
    let event = Event::from_extracted(info, settings)?;
    debug!(id = %event.id, "event built");
    let json = serde_json::to_string_pretty(&event).context("failed to serialize event")?;
    println!("{json}");
    Ok(())
}

/// Run the interactive loop until `:quit` or end of input.
fn handle_session(settings: Settings, reference: NaiveDate) -> anyhow::Result<()> {
    info!(%reference, "session started");
    eprintln!("smartcal session, today is {reference}. Type :help for commands.");

    let mut session = Session::new(settings, reference);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        match session.handle_line(&line) {
            Outcome::Reply(reply) if reply.is_empty() => {}
            Outcome::Reply(reply) => {
                writeln!(stdout, "{reply}").context("failed to write to stdout")?;
            }
            Outcome::Quit => break,
        }
    }

    info!(events = session.store().len(), "session ended");
    Ok(())
}
