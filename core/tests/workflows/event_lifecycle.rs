// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests drive create, RSVP and delete flows through the controller
//! and check that every step shows up in the derived frame and in the
//! persisted state.

use huddle_core::{EventStore, Rsvp, ValidationError, ViewMode};

use crate::common::{
    TEST_OWNER, assert_event_matches_draft, assert_sorted_by_start, naive, test_controller,
    test_draft,
};

#[test]
fn event_lifecycle_create_flow() {
    let mut controller = test_controller();

    let mut draft = controller.open_create_draft().clone();
    draft.title = "  Team lunch  ".to_string();
    draft.location = "cafeteria".to_string();
    let event = controller.submit_draft(&draft).unwrap();

    assert_event_matches_draft(&event, &draft);
    assert!(controller.draft().is_none());

    // the event is visible in the current month frame
    let frame = controller.frame();
    assert_eq!(frame.events.len(), 1);
    assert_eq!(frame.events[0].title, "Team lunch");
}

#[test]
fn event_lifecycle_rejected_draft_changes_nothing() {
    let mut controller = test_controller();

    let mut draft = controller.open_create_draft().clone();
    draft.title = "Dinner".to_string();
    draft.end = draft.start.clone();
    let err = controller.submit_draft(&draft).unwrap_err();

    assert_eq!(err, ValidationError::EndNotAfterStart);
    assert_eq!(err.to_string(), "End time must be after start time.");
    assert!(controller.draft().is_some());
    assert!(controller.frame().events.is_empty());
}

#[test]
fn event_lifecycle_rsvp_flow() {
    let mut controller = test_controller();
    let event = controller.submit_draft(&test_draft("Potluck")).unwrap();

    let frame = controller.set_rsvp(&event.id, Rsvp::Going);
    assert_eq!(frame.events[0].rsvp, Some(Rsvp::Going));

    // same status again clears back to no-response
    let frame = controller.set_rsvp(&event.id, Rsvp::Going);
    assert_eq!(frame.events[0].rsvp, None);

    // switching statuses replaces rather than toggles off
    controller.set_rsvp(&event.id, Rsvp::Maybe);
    let frame = controller.set_rsvp(&event.id, Rsvp::NotGoing);
    assert_eq!(frame.events[0].rsvp, Some(Rsvp::NotGoing));
}

#[test]
fn event_lifecycle_delete_flow() {
    let mut controller = test_controller();
    let keep = controller.submit_draft(&test_draft("Keep")).unwrap();
    let gone = controller.submit_draft(&test_draft("Drop")).unwrap();
    assert_eq!(controller.frame().events.len(), 2);

    let frame = controller.delete_event(&gone.id);
    let ids: Vec<&str> = frame.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, [keep.id.as_str()]);

    // deleting again is a no-op
    let frame = controller.delete_event(&gone.id);
    assert_eq!(frame.events.len(), 1);
}

#[test]
fn event_lifecycle_frame_stays_sorted() {
    let mut controller = test_controller();
    for (title, start, end) in [("Late", "18:00", "19:00"), ("Early", "07:00", "08:00"), ("Mid", "12:30", "13:30")] {
        let mut draft = test_draft(title);
        draft.start = start.to_string();
        draft.end = end.to_string();
        controller.submit_draft(&draft).unwrap();
    }

    let frame = controller.frame();
    assert_sorted_by_start(&frame.events);
    let titles: Vec<&str> = frame.events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Early", "Mid", "Late"]);
}

#[test]
fn event_lifecycle_day_geometry_on_dst_transition() {
    let mut controller = test_controller();
    controller.set_view(ViewMode::Day);
    controller.select_date(naive(2024, 3, 10)); // US spring-forward day

    let mut draft = test_draft("Morning run");
    draft.date = "2024-03-10".to_string();
    draft.start = "12:00".to_string();
    draft.end = "13:00".to_string();
    controller.submit_draft(&draft).unwrap();

    let frame = controller.frame();
    let blocks = &frame.columns[0].blocks;
    assert_eq!(blocks.len(), 1);
    // noon stays at the noon offset even though the wall day is 23h long
    assert_eq!(blocks[0].top, 576.0);
    assert_eq!(blocks[0].height, 48.0);
}

#[test]
fn event_lifecycle_every_mutation_is_persisted() {
    let mut controller = test_controller();
    let event = controller.submit_draft(&test_draft("Standup")).unwrap();
    controller.set_rsvp(&event.id, Rsvp::Going);

    let reloaded = EventStore::load_for_user(controller.storage(), TEST_OWNER);
    assert_eq!(reloaded.list().len(), 1);
    assert_eq!(reloaded.list()[0].rsvp, Some(Rsvp::Going));

    controller.delete_event(&event.id);
    let reloaded = EventStore::load_for_user(controller.storage(), TEST_OWNER);
    assert!(reloaded.list().is_empty());
}
