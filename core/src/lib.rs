// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the Huddle calendar: view state, event storage, day-column
//! geometry and the controller that ties them to a persistence backend.
//!
//! Everything is synchronous and deterministic; time and zone come in as
//! injected values, persistence goes out through the [`Storage`] trait.

/// Application name, used for config and data directory discovery.
pub const APP_NAME: &str = "huddle";

mod controller;
mod event;
mod layout;
mod localtime;
mod storage;
mod store;
mod window;

pub use controller::{Block, CalendarController, DayFrame, Frame};
pub use event::{Event, EventDraft, INVITE_GROUP_OPTIONS, Rsvp};
pub use layout::{DAY_HEIGHT, EventBlock, MIN_TRACK_HEIGHT, UNITS_PER_HOUR, layout_day, overlaps_window};
pub use localtime::{
    InvalidTemporalInput, add_days, local_date_key, local_time_key, minutes_since_midnight,
    parse_local_datetime, start_of_day, start_of_week,
};
pub use storage::{MemoryStorage, Storage, UserProfile, load_view_mode, persist_view_mode};
pub use store::{EventStore, ValidationError};
pub use window::{Direction, ViewMode, ViewState, VisibleWindow, month_grid, resolve_window};
