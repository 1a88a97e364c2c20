//! Coverage for settings parsing and path resolution.

use std::path::Path;

use smartcal::config::{config_dir, load_settings, Settings, TimeFormat};

#[test]
fn default_settings_values() {
    let settings = Settings::default();
    assert_eq!(settings.default_reminder_minutes, 15);
    assert_eq!(settings.default_event_duration_minutes, 60);
    assert_eq!(settings.default_event_color, "#3b82f6");
    assert!(settings.show_completed);
    assert_eq!(settings.time_format, TimeFormat::TwelveHour);
}

#[test]
fn config_dir_resolves() {
    let dir = config_dir();
    assert!(dir.is_ok());
    let path = match dir {
        Ok(path) => path,
        Err(err) => panic!("config dir should resolve: {err}"),
    };
    assert!(path.ends_with(".smartcal"));
}

#[test]
fn parse_full_settings() {
    let toml_str = r##"
default_reminder_minutes = 5
default_event_duration_minutes = 30
default_event_color = "#10b981"
show_completed = false
time_format = "24h"

[logging]
level = "debug"
dir = "/tmp/smartcal-logs"
"##;
    let parsed = toml::from_str::<Settings>(toml_str);
    assert!(parsed.is_ok());
    let settings = match parsed {
        Ok(settings) => settings,
        Err(err) => panic!("full settings should parse: {err}"),
    };
    assert_eq!(settings.default_reminder_minutes, 5);
    assert_eq!(settings.default_event_duration_minutes, 30);
    assert_eq!(settings.default_event_color, "#10b981");
    assert!(!settings.show_completed);
    assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(
        settings.logging.dir.as_deref(),
        Some(Path::new("/tmp/smartcal-logs"))
    );
}

#[test]
fn unknown_time_format_is_rejected() {
    assert!(toml::from_str::<Settings>(r#"time_format = "36h""#).is_err());
}

#[test]
fn load_settings_from_file() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "default_reminder_minutes = 42\n").expect("should write config");

    let settings = load_settings(&path).expect("should load");
    assert_eq!(settings.default_reminder_minutes, 42);
    assert_eq!(settings.default_event_duration_minutes, 60);
}

#[test]
fn load_settings_reports_path_on_error() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let missing = tmp.path().join("absent.toml");
    let err = match load_settings(&missing) {
        Ok(_) => panic!("missing file should fail"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("absent.toml"));

    let broken = tmp.path().join("broken.toml");
    std::fs::write(&broken, "default_reminder_minutes = \"soon\"").expect("should write");
    let err = match load_settings(&broken) {
        Ok(_) => panic!("bad value should fail"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn load_settings_expands_home_in_log_dir() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[logging]\ndir = \"~/.smartcal/logs\"\n").expect("should write config");

    let settings = load_settings(&path).expect("should load");
    let expected = config_dir().expect("config dir should resolve").join("logs");
    assert_eq!(settings.logging.dir, Some(expected));
}
