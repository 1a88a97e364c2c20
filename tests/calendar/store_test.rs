//! Coverage for `calendar::store::EventStore`.

use chrono::NaiveDate;
use smartcal::calendar::{CalendarError, EventStore};
use smartcal::config::Settings;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid test date {y}-{m}-{d}"),
    }
}

fn reference() -> NaiveDate {
    date(2024, 1, 10)
}

fn add(store: &mut EventStore, text: &str) -> uuid::Uuid {
    match store.add_from_text(text, reference(), &Settings::default()) {
        Ok(event) => event.id,
        Err(err) => panic!("{text:?} should be accepted: {err}"),
    }
}

#[test]
fn events_keep_insertion_order() {
    let mut store = EventStore::new();
    add(&mut store, "second thing next week");
    add(&mut store, "first thing tomorrow");

    let titles: Vec<&str> = store.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["second thing", "first thing"]);
}

#[test]
fn events_on_filters_by_day() {
    let mut store = EventStore::new();
    add(&mut store, "dentist tomorrow");
    add(&mut store, "gym tomorrow at 7am");
    add(&mut store, "review today");

    assert_eq!(store.events_on(date(2024, 1, 11)).len(), 2);
    assert_eq!(store.events_on(date(2024, 1, 10)).len(), 1);
    assert!(store.events_on(date(2024, 1, 12)).is_empty());
}

#[test]
fn month_view_groups_and_sorts_days() {
    let mut store = EventStore::new();
    add(&mut store, "taxes on March 15th");
    add(&mut store, "standup tomorrow");
    add(&mut store, "retro today");
    add(&mut store, "demo tomorrow");

    let january = store.events_in_month(2024, 1);
    let days: Vec<NaiveDate> = january.keys().copied().collect();
    assert_eq!(days, vec![date(2024, 1, 10), date(2024, 1, 11)]);
    assert_eq!(january[&date(2024, 1, 11)].len(), 2);
    assert_eq!(january[&date(2024, 1, 11)][0].title, "standup");

    assert_eq!(store.events_in_month(2024, 3).len(), 1);
    assert!(store.events_in_month(2024, 2).is_empty());
}

#[test]
fn completed_events_hidden_when_configured() {
    let mut store = EventStore::new();
    let done = add(&mut store, "laundry today");
    add(&mut store, "groceries tomorrow");
    if let Err(err) = store.set_completed(done, true) {
        panic!("known id: {err}");
    }

    let shown = Settings::default();
    assert_eq!(store.visible(&shown).count(), 2);

    let hidden = match toml::from_str::<Settings>("show_completed = false") {
        Ok(settings) => settings,
        Err(err) => panic!("settings should parse: {err}"),
    };
    let visible: Vec<&str> = store.visible(&hidden).map(|e| e.title.as_str()).collect();
    assert_eq!(visible, vec!["groceries"]);
}

#[test]
fn remove_returns_event() {
    let mut store = EventStore::new();
    let id = add(&mut store, "call mom today");
    let removed = match store.remove(id) {
        Ok(event) => event,
        Err(err) => panic!("known id: {err}"),
    };
    assert_eq!(removed.id, id);
    assert!(store.is_empty());
    assert!(matches!(store.remove(id), Err(CalendarError::EventNotFound(missing)) if missing == id));
}

#[test]
fn unknown_id_is_an_error() {
    let mut store = EventStore::new();
    let stranger = uuid::Uuid::new_v4();
    assert!(matches!(
        store.toggle_completed(stranger),
        Err(CalendarError::EventNotFound(_))
    ));
    assert!(matches!(
        store.set_completed(stranger, true),
        Err(CalendarError::EventNotFound(_))
    ));
}

#[test]
fn resolve_id_accepts_short_and_full_ids() {
    let mut store = EventStore::new();
    let id = add(&mut store, "pay rent today");
    let short: String = id.simple().to_string().chars().take(8).collect();

    assert!(matches!(store.resolve_id(&short), Ok(found) if found == id));
    assert!(matches!(store.resolve_id(&id.to_string()), Ok(found) if found == id));
    assert!(matches!(
        store.resolve_id("zzzz"),
        Err(CalendarError::UnknownIdPrefix(_))
    ));
    assert!(matches!(
        store.resolve_id(""),
        Err(CalendarError::UnknownIdPrefix(_))
    ));
}

#[test]
fn rejected_text_is_not_stored() {
    let mut store = EventStore::new();
    let result = store.add_from_text("buy milk", reference(), &Settings::default());
    assert!(matches!(result, Err(CalendarError::NoDateFound)));
    assert_eq!(store.len(), 0);
}
