//! Settings loading and validation.
//!
//! Settings live in `~/.smartcal/config.toml`. Every field has a serde
//! default, so a missing or empty file is a valid configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// User settings consumed when turning extractions into events.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Reminder offset applied to new events, in minutes.
    #[serde(default = "default_reminder_minutes")]
    pub default_reminder_minutes: u32,

    /// Duration applied to new events, in minutes.
    #[serde(default = "default_event_duration_minutes")]
    pub default_event_duration_minutes: u32,

    /// Color applied to new events (CSS hex).
    #[serde(default = "default_event_color")]
    pub default_event_color: String,

    /// Whether completed events are listed.
    #[serde(default = "default_show_completed")]
    pub show_completed: bool,

    /// Clock format used when displaying event times.
    #[serde(default)]
    pub time_format: TimeFormat,

    /// Log level and optional file output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_reminder_minutes: default_reminder_minutes(),
            default_event_duration_minutes: default_event_duration_minutes(),
            default_event_color: default_event_color(),
            show_completed: default_show_completed(),
            time_format: TimeFormat::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Clock format for displayed times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TimeFormat {
    /// `3:00pm`, as extracted.
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `15:00`.
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for JSON log files written during `session`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

// Default value functions for serde

fn default_reminder_minutes() -> u32 {
    15
}
fn default_event_duration_minutes() -> u32 {
    60
}
fn default_event_color() -> String {
    "#3b82f6".to_owned()
}
fn default_show_completed() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_owned()
}

/// Load settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if `logging.dir`
/// starts with `~` and the home directory cannot be determined.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let mut settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    if let Some(dir) = settings.logging.dir.take() {
        settings.logging.dir = Some(expand_home(dir)?);
    }
    Ok(settings)
}

/// Replace a leading `~` component with the home directory.
fn expand_home(path: PathBuf) -> anyhow::Result<PathBuf> {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => Some(home_dir()?.join(rest)),
        Err(_) => None,
    };
    Ok(expanded.unwrap_or(path))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let dirs = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(dirs.home_dir().to_path_buf())
}

/// Load `~/.smartcal/config.toml`, falling back to defaults when the file
/// does not exist.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or an
/// existing file cannot be read or parsed.
pub fn load_default_settings() -> anyhow::Result<Settings> {
    let path = config_dir()?.join("config.toml");
    if path.exists() {
        load_settings(&path)
    } else {
        Ok(Settings::default())
    }
}

/// Resolve the default config directory (`~/.smartcal/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    Ok(home_dir()?.join(".smartcal"))
}
