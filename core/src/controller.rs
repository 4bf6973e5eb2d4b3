// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::event::{Event, EventDraft, INVITE_GROUP_OPTIONS};
use crate::layout::{layout_day, overlaps_window};
use crate::localtime::{FORMAT_DATE, add_days, start_of_week};
use crate::storage::{Storage, UserProfile, load_view_mode, persist_view_mode};
use crate::store::{EventStore, ValidationError};
use crate::window::{Direction, ViewMode, ViewState, VisibleWindow, month_grid, resolve_window};

const DEFAULT_DRAFT_START: &str = "12:00";
const DEFAULT_DRAFT_END: &str = "13:00";

/// One event placed on a day column, owned so the frame outlives store
/// mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub event: Event,
    pub top: f64,
    pub height: f64,
}

/// A laid-out day column.
#[derive(Debug, Clone, PartialEq)]
pub struct DayFrame {
    pub date: NaiveDate,
    pub blocks: Vec<Block>,
}

/// Everything a renderer needs for the current view, derived fresh from
/// `(ViewState, EventList)` on every call. Nothing here is cached, so there
/// is no stale geometry to invalidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<Tz: TimeZone> {
    pub window: VisibleWindow<Tz>,

    /// Events intersecting the visible window, ascending by start.
    pub events: Vec<Event>,

    /// Laid-out day columns: seven for week view, one for day view, empty
    /// for month view.
    pub columns: Vec<DayFrame>,

    /// Month grid cells; empty outside month view.
    pub grid: Vec<Option<NaiveDate>>,
}

/// Orchestrates the view state, the event store and the persistence
/// collaborator for one signed-in user. The only component with side
/// effects: every mutation is persisted immediately (at-most-once
/// durability, last writer wins across sessions).
///
/// The clock is injected as a snapshot so tests can pin a zone and date;
/// [`CalendarController::refresh_now`] re-reads it at the caller's pace.
#[derive(Debug)]
pub struct CalendarController<Tz: TimeZone, S: Storage> {
    tz: Tz,
    now: DateTime<Tz>,
    user: UserProfile,
    state: ViewState,
    store: EventStore,
    storage: S,
    draft: Option<EventDraft>,
}

impl<Tz: TimeZone, S: Storage> CalendarController<Tz, S> {
    /// Loads the user's persisted events and view preference and frames the
    /// current date.
    pub fn new(now: DateTime<Tz>, user: UserProfile, storage: S) -> Self {
        let store = EventStore::load_for_user(&storage, &user.owner_id);
        let mut state = ViewState::new(now.date_naive());
        state.mode = load_view_mode(&storage);

        Self {
            tz: now.timezone(),
            now,
            user,
            state,
            store,
            storage,
            draft: None,
        }
    }

    pub fn now(&self) -> DateTime<Tz> {
        self.now.clone()
    }

    /// Refresh the clock snapshot.
    pub fn refresh_now(&mut self, now: DateTime<Tz>) {
        self.now = now;
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The open create draft, if any.
    pub fn draft(&self) -> Option<&EventDraft> {
        self.draft.as_ref()
    }

    /// Derives the renderable frame for the current state. Pure with
    /// respect to the controller; safe to call on every render.
    pub fn frame(&self) -> Frame<Tz> {
        let window = resolve_window(&self.tz, &self.state);
        let start = window.start.with_timezone(&Utc);
        let end = window.end.with_timezone(&Utc);

        let events: Vec<Event> = self
            .store
            .list()
            .iter()
            .filter(|e| overlaps_window(e, start, end))
            .cloned()
            .collect();

        let column_dates: Vec<NaiveDate> = match self.state.mode {
            ViewMode::Month => Vec::new(),
            ViewMode::Week => {
                let first = start_of_week(self.state.anchor);
                (0..7).map(|i| add_days(first, i)).collect()
            }
            ViewMode::Day => vec![self.state.focused()],
        };
        let columns = column_dates
            .into_iter()
            .map(|date| DayFrame {
                date,
                blocks: layout_day(&self.tz, date, self.store.list())
                    .into_iter()
                    .map(|b| Block {
                        event: b.event.clone(),
                        top: b.top,
                        height: b.height,
                    })
                    .collect(),
            })
            .collect();

        let grid = match self.state.mode {
            ViewMode::Month => month_grid(self.state.anchor),
            _ => Vec::new(),
        };

        Frame {
            window,
            events,
            columns,
            grid,
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> Frame<Tz> {
        self.state.navigate(direction);
        self.frame()
    }

    pub fn go_to_today(&mut self) -> Frame<Tz> {
        self.state.go_to_today(self.now.date_naive());
        self.frame()
    }

    /// Switch the view mode and persist it as the preference.
    pub fn set_view(&mut self, mode: ViewMode) -> Frame<Tz> {
        self.state.set_mode(mode);
        persist_view_mode(&mut self.storage, mode);
        self.frame()
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Frame<Tz> {
        self.state.select(date);
        self.frame()
    }

    /// Seeds a create draft from the focused day with the default one-hour
    /// noon slot and default group selection.
    pub fn open_create_draft(&mut self) -> &EventDraft {
        let draft = EventDraft {
            date: self.state.focused().format(FORMAT_DATE).to_string(),
            start: DEFAULT_DRAFT_START.to_string(),
            end: DEFAULT_DRAFT_END.to_string(),
            invite_groups: vec![INVITE_GROUP_OPTIONS[0].to_string()],
            ..EventDraft::default()
        };
        self.draft.insert(draft)
    }

    pub fn close_draft(&mut self) {
        self.draft = None;
    }

    /// Validates and commits a draft. On success the event list is
    /// persisted and the open draft cleared; on failure the error's
    /// `Display` is the message to show, and no state changes.
    pub fn submit_draft(&mut self, draft: &EventDraft) -> Result<Event, ValidationError> {
        let event = self.store.create(&self.tz, &self.user.owner_id, draft)?;
        self.store.persist(&mut self.storage, &self.user.owner_id);
        self.draft = None;
        Ok(event)
    }

    pub fn delete_event(&mut self, id: &str) -> Frame<Tz> {
        self.store.remove(id);
        self.store.persist(&mut self.storage, &self.user.owner_id);
        self.frame()
    }

    pub fn set_rsvp(&mut self, id: &str, status: crate::event::Rsvp) -> Frame<Tz> {
        if self.store.toggle_rsvp(id, status).is_some() {
            self.store.persist(&mut self.storage, &self.user.owner_id);
        }
        self.frame()
    }
}
