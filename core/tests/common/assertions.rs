// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use huddle_core::{Event, EventDraft};

/// Asserts that a created event carries the draft's fields.
pub fn assert_event_matches_draft(event: &Event, draft: &EventDraft) {
    assert_eq!(event.title, draft.title.trim());
    assert_eq!(event.location, draft.location.trim());
    assert_eq!(event.details, draft.details.trim());
    assert!(!event.id.is_empty(), "created event must carry an id");
    assert!(
        event.end > event.start,
        "created event must have a positive duration"
    );
}

/// Asserts that events are in ascending start order.
pub fn assert_sorted_by_start(events: &[Event]) {
    assert!(
        events.windows(2).all(|w| w[0].start <= w[1].start),
        "events out of start order: {:?}",
        events.iter().map(|e| (&e.title, e.start)).collect::<Vec<_>>()
    );
}
