//! End-to-end coverage of `extractors::extract`.

use chrono::NaiveDate;
use smartcal::extractors::{extract, Category, Priority, Recurrence, UNTITLED_EVENT};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid test date {y}-{m}-{d}"),
    }
}

/// 2024-01-10, a Wednesday.
fn wednesday() -> NaiveDate {
    date(2024, 1, 10)
}

#[test]
fn urgent_meeting_scenario() {
    let info = extract("Urgent meeting with Sarah tomorrow at noon #work", wednesday());

    assert_eq!(info.priority, Priority::High);
    assert_eq!(info.date, Some(date(2024, 1, 11)));
    assert_eq!(info.tags, vec!["work"]);
    let title = info.title.unwrap_or_default();
    assert!(title.contains("meeting with Sarah"), "title was {title:?}");
    assert_eq!(info.time, None, "noon is not a recognised time token");
    assert_eq!(info.category, Some(Category::Work));
}

#[test]
fn doctor_appointment_scenario() {
    let info = extract(
        "Important doctor appointment on March 15th at 3:30pm #health",
        wednesday(),
    );

    assert_eq!(info.priority, Priority::High);
    assert_eq!(info.date, Some(date(2024, 3, 15)));
    assert_eq!(info.time.as_deref(), Some("3:30pm"));
    assert_eq!(info.tags, vec!["health"]);
    assert_eq!(info.category, Some(Category::Health));
    // "appointment on" has no with/about/for connector, so the marker
    // fallback applies.
    assert_eq!(info.title.as_deref(), Some("Important doctor appointment"));
    assert_eq!(info.location, None);
}

#[test]
fn weekly_standup_scenario() {
    let info = extract("Weekly standup in the Blue Room next Monday at 9am", wednesday());

    assert_eq!(info.recurring, Some(Recurrence::Weekly));
    assert_eq!(info.date, Some(date(2024, 1, 15)));
    assert_eq!(info.time.as_deref(), Some("9:00am"));
    assert_eq!(info.location.as_deref(), Some("Blue Room next Monday"));
    assert_eq!(info.title.as_deref(), Some("Weekly standup"));
    assert_eq!(info.priority, Priority::Medium);
}

#[test]
fn repeated_calls_are_identical() {
    let text = "Low priority team lunch next Tuesday at 2pm in Cafe #team #food #team";
    let first = extract(text, wednesday());
    for _ in 0..5 {
        assert_eq!(extract(text, wednesday()), first);
    }
}

#[test]
fn reference_date_drives_relative_dates() {
    let text = "review tomorrow";
    assert_eq!(extract(text, date(2024, 2, 28)).date, Some(date(2024, 2, 29)));
    assert_eq!(extract(text, date(2023, 12, 31)).date, Some(date(2024, 1, 1)));
}

#[test]
fn next_tuesday_from_wednesday_is_six_days() {
    let info = extract("coffee next Tuesday", wednesday());
    assert_eq!(info.date, Some(date(2024, 1, 16)));
}

#[test]
fn time_canonicalisation() {
    assert_eq!(
        extract("call at 9am", wednesday()).time.as_deref(),
        Some("9:00am")
    );
    assert_eq!(
        extract("call at 9:45 PM", wednesday()).time.as_deref(),
        Some("9:45pm")
    );
}

#[test]
fn time_is_never_a_location() {
    assert_eq!(extract("meeting at 3pm", wednesday()).location, None);
}

#[test]
fn no_date_phrase_leaves_date_absent() {
    let info = extract("buy milk", wednesday());
    assert_eq!(info.date, None);
    assert_eq!(info.priority, Priority::Medium);
    assert!(info.tags.is_empty());
    assert_eq!(info.recurring, None);
    assert_eq!(info.category, None);
}

#[test]
fn title_fallbacks() {
    assert_eq!(
        extract("xyz random text", wednesday()).title.as_deref(),
        Some("xyz random text")
    );
    assert_eq!(extract("", wednesday()).title.as_deref(), Some(UNTITLED_EVENT));
    assert_eq!(
        extract("today at 4pm", wednesday()).title.as_deref(),
        Some(UNTITLED_EVENT)
    );
}

#[test]
fn hyphenated_words_survive_title_split() {
    let info = extract("Sign-in at 9am", wednesday());
    assert_eq!(info.title.as_deref(), Some("Sign-in"));
    assert_eq!(info.time.as_deref(), Some("9:00am"));

    let info = extract("#at home tomorrow", wednesday());
    assert_eq!(info.title.as_deref(), Some("#at home"));
    assert_eq!(info.tags, vec!["at"]);
}

#[test]
fn tags_are_deduplicated_in_order() {
    assert_eq!(extract("#a test #b test #a", wednesday()).tags, vec!["a", "b"]);
}

#[test]
fn json_shape_matches_record() {
    let info = extract("Dinner in Paris at 8pm tomorrow #trip", wednesday());
    let json = match serde_json::to_value(&info) {
        Ok(json) => json,
        Err(err) => panic!("extraction should serialize: {err}"),
    };
    assert_eq!(json["date"], "2024-01-11");
    assert_eq!(json["time"], "8:00pm");
    assert_eq!(json["location"], "Paris");
    assert_eq!(json["priority"], "medium");
    assert_eq!(json["tags"], serde_json::json!(["trip"]));
    assert!(json.get("recurring").is_none());
}
