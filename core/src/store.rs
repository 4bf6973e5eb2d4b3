// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::event::{Event, EventDraft, INVITE_GROUP_OPTIONS, Rsvp, default_color};
use crate::localtime::{InvalidTemporalInput, parse_local_datetime};
use crate::storage::{Storage, events_key};

/// A rejected event draft. Checks run in order (title, start, end,
/// ordering) and the first failure wins; `Display` yields the user-facing
/// message for that check.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyTitle,
    InvalidStart(InvalidTemporalInput),
    InvalidEnd(InvalidTemporalInput),
    EndNotAfterStart,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Please enter a title."),
            Self::InvalidStart(_) => write!(f, "Invalid start time."),
            Self::InvalidEnd(_) => write!(f, "Invalid end time."),
            Self::EndNotAfterStart => write!(f, "End time must be after start time."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// In-memory ordered event collection for one user.
///
/// The store owns the list exclusively; events are mutated only through its
/// operations, and the list is re-sorted by start once per mutation rather
/// than per read.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and appends a new event.
    ///
    /// Validation order: title non-empty after trim, start parses, end
    /// parses, `end > start` strictly. Invite groups are collapsed to the
    /// known option list.
    pub fn create<Tz: TimeZone>(
        &mut self,
        tz: &Tz,
        owner_id: &str,
        draft: &EventDraft,
    ) -> Result<Event, ValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let start = parse_local_datetime(tz, &draft.date, &draft.start)
            .map_err(ValidationError::InvalidStart)?
            .with_timezone(&Utc);
        let end = parse_local_datetime(tz, &draft.date, &draft.end)
            .map_err(ValidationError::InvalidEnd)?
            .with_timezone(&Utc);
        if end <= start {
            return Err(ValidationError::EndNotAfterStart);
        }

        let invite_groups: BTreeSet<String> = draft
            .invite_groups
            .iter()
            .filter(|g| INVITE_GROUP_OPTIONS.contains(&g.as_str()))
            .cloned()
            .collect();

        let event = Event {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            location: draft.location.trim().to_string(),
            details: draft.details.trim().to_string(),
            invite_groups,
            start,
            end,
            rsvp: None,
            color: default_color(),
        };

        tracing::debug!(id = event.id, title = event.title, "event created");
        self.events.push(event.clone());
        self.events.sort_by_key(|e| e.start);
        Ok(event)
    }

    /// Removes the event with the given id. Deleting an absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: &str) {
        self.events.retain(|e| e.id != id);
    }

    /// Toggles the RSVP state: setting the current status again clears it
    /// back to no-response. Returns the updated event, or `None` for an
    /// unknown id. The start is unchanged so no re-sort is needed.
    pub fn toggle_rsvp(&mut self, id: &str, status: Rsvp) -> Option<Event> {
        let event = self.events.iter_mut().find(|e| e.id == id)?;
        event.rsvp = if event.rsvp == Some(status) {
            None
        } else {
            Some(status)
        };
        Some(event.clone())
    }

    /// The materialized view, ascending by start.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Loads the persisted list for a user. Absent or malformed data yields
    /// an empty store; read failures are never surfaced.
    pub fn load_for_user<S: Storage + ?Sized>(storage: &S, user_id: &str) -> Self {
        let events = match storage.get(&events_key(user_id)) {
            Some(raw) => match serde_json::from_str::<Vec<Event>>(&raw) {
                Ok(mut events) => {
                    events.sort_by_key(|e| e.start);
                    events
                }
                Err(err) => {
                    tracing::warn!(user_id, %err, "malformed event list, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { events }
    }

    /// Serializes the full list under the user's key.
    pub fn persist<S: Storage + ?Sized>(&self, storage: &mut S, user_id: &str) {
        match serde_json::to_string(&self.events) {
            Ok(raw) => storage.set(&events_key(user_id), &raw),
            Err(err) => tracing::warn!(user_id, %err, "failed to serialize event list"),
        }
    }
}
