// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeZone, Utc};

use crate::event::Event;
use crate::localtime::{add_days, minutes_since_midnight, start_of_day};

/// Vertical units per hour of the day grid.
pub const UNITS_PER_HOUR: f64 = 48.0;

/// Total height of the 24-hour canvas.
pub const DAY_HEIGHT: f64 = 24.0 * UNITS_PER_HOUR;

/// Floor for rendered block heights, so short events stay legible and
/// clickable.
pub const MIN_TRACK_HEIGHT: f64 = 18.0;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// One event mapped onto the day column's vertical geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock<'a> {
    pub event: &'a Event,
    pub top: f64,
    pub height: f64,
}

/// Lays out the events of one calendar day on the 24-hour canvas.
///
/// An event is included when its `[start, end)` interval intersects the
/// day's half-open window, so multi-day and boundary-touching events appear
/// on every day they partially cover. The result is sorted by start
/// ascending (stable, so same-start events keep insertion order). Events
/// overlapping in time render as superimposed blocks; they are not stacked
/// or width-split.
///
/// Pure function of its inputs; safe to recompute on every render.
pub fn layout_day<'a, Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    events: &'a [Event],
) -> Vec<EventBlock<'a>> {
    let day_start = start_of_day(tz, date).with_timezone(&Utc);
    let day_end = start_of_day(tz, add_days(date, 1)).with_timezone(&Utc);

    let mut day_events: Vec<&Event> = events
        .iter()
        .filter(|e| e.end > day_start && e.start < day_end)
        .collect();
    day_events.sort_by_key(|e| e.start);

    day_events
        .into_iter()
        .map(|event| {
            let local_start = event.start.with_timezone(tz);
            let top =
                f64::from(minutes_since_midnight(&local_start)) / MINUTES_PER_DAY * DAY_HEIGHT;

            let minutes = (event.end - event.start).num_minutes() as f64;
            let height = clamp(minutes / MINUTES_PER_DAY * DAY_HEIGHT, MIN_TRACK_HEIGHT, DAY_HEIGHT);

            EventBlock { event, top, height }
        })
        .collect()
}

/// Half-open interval overlap against a visible window, shared by the
/// range filter and the per-day filter above.
pub fn overlaps_window(event: &Event, start: chrono::DateTime<Utc>, end: chrono::DateTime<Utc>) -> bool {
    event.end > start && event.start < end
}

fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}
