// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-session persistence workflow tests.
//!
//! Each test simulates closing and reopening the calendar by building a
//! second controller over the same storage.

use huddle_core::{CalendarController, MemoryStorage, Rsvp, UserProfile, ViewMode};

use crate::common::{assert_sorted_by_start, test_controller, test_draft, test_now, test_user};

fn reopen(storage: MemoryStorage) -> CalendarController<chrono_tz::Tz, MemoryStorage> {
    CalendarController::new(test_now(), test_user(), storage)
}

#[test]
fn persistence_events_survive_reopen_in_sorted_order() {
    let mut controller = test_controller();
    for (title, start, end) in [("Late", "18:00", "19:00"), ("Early", "07:00", "08:00")] {
        let mut draft = test_draft(title);
        draft.start = start.to_string();
        draft.end = end.to_string();
        controller.submit_draft(&draft).unwrap();
    }

    let reopened = reopen(controller.storage().clone());
    let events = reopened.store().list();
    assert_eq!(events.len(), 2);
    assert_sorted_by_start(events);
    assert_eq!(events[0].title, "Early");
}

#[test]
fn persistence_rsvp_survives_reopen() {
    let mut controller = test_controller();
    let event = controller.submit_draft(&test_draft("Potluck")).unwrap();
    controller.set_rsvp(&event.id, Rsvp::NotGoing);

    let reopened = reopen(controller.storage().clone());
    assert_eq!(reopened.store().list()[0].rsvp, Some(Rsvp::NotGoing));
}

#[test]
fn persistence_view_preference_survives_reopen() {
    let mut controller = test_controller();
    controller.set_view(ViewMode::Day);

    let reopened = reopen(controller.storage().clone());
    assert_eq!(reopened.state().mode, ViewMode::Day);
    // the reopened session frames today in the restored mode
    assert_eq!(reopened.frame().columns.len(), 1);
}

#[test]
fn persistence_corrupt_event_data_starts_empty_but_usable() {
    let mut storage = MemoryStorage::new();
    huddle_core::Storage::set(&mut storage, "huddle_events_user-1", "{definitely not json");

    let mut controller = reopen(storage);
    assert!(controller.store().list().is_empty());

    // a fresh create overwrites the corrupt blob
    controller.submit_draft(&test_draft("Recovered")).unwrap();
    let reopened = reopen(controller.storage().clone());
    assert_eq!(reopened.store().list().len(), 1);
}

#[test]
fn persistence_is_scoped_per_user() {
    let mut controller = test_controller();
    controller.submit_draft(&test_draft("Mine")).unwrap();

    let other = UserProfile {
        owner_id: "user-2".to_string(),
        display_name: "Riley".to_string(),
    };
    let reopened = CalendarController::new(test_now(), other, controller.storage().clone());
    assert!(reopened.store().list().is_empty());
}
