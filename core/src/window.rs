// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone};

use crate::localtime::{add_days, start_of_day, start_of_week};

/// Which framing the calendar currently shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

const MODE_MONTH: &str = "month";
const MODE_WEEK: &str = "week";
const MODE_DAY: &str = "day";

impl AsRef<str> for ViewMode {
    fn as_ref(&self) -> &str {
        match self {
            ViewMode::Month => MODE_MONTH,
            ViewMode::Week => MODE_WEEK,
            ViewMode::Day => MODE_DAY,
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for ViewMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            MODE_MONTH => Ok(ViewMode::Month),
            MODE_WEEK => Ok(ViewMode::Week),
            MODE_DAY => Ok(ViewMode::Day),
            _ => Err(()),
        }
    }
}

/// Navigation direction for [`ViewState::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The mutable framing state: view mode, the anchor date driving grid
/// generation, and the user's focused day (absent until a day is picked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
    pub selected: Option<NaiveDate>,
}

impl ViewState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: ViewMode::default(),
            anchor: today,
            selected: None,
        }
    }

    /// The day the user is focused on: the selection, falling back to the
    /// anchor.
    pub fn focused(&self) -> NaiveDate {
        self.selected.unwrap_or(self.anchor)
    }

    /// Advance by one unit of the current mode. Months move by month index
    /// and land on day 1 regardless of source month length; week/day shift
    /// the selection by the same delta so the focused day tracks the anchor.
    pub fn navigate(&mut self, direction: Direction) {
        match self.mode {
            ViewMode::Month => {
                let first = first_of_month(self.anchor);
                self.anchor = match direction {
                    Direction::Previous => first.checked_sub_months(Months::new(1)),
                    Direction::Next => first.checked_add_months(Months::new(1)),
                }
                .unwrap_or(first);
            }
            ViewMode::Week | ViewMode::Day => {
                let days = if self.mode == ViewMode::Week { 7 } else { 1 };
                let delta = match direction {
                    Direction::Previous => -days,
                    Direction::Next => days,
                };
                self.anchor = add_days(self.anchor, delta);
                self.selected = self.selected.map(|d| add_days(d, delta));
            }
        }
    }

    /// Reset both anchor and selection to the current date.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.anchor = today;
        self.selected = Some(today);
    }

    /// Switch view mode. Entering week or day with no prior selection seeds
    /// it from the anchor; an existing selection is never cleared.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        if matches!(mode, ViewMode::Week | ViewMode::Day) && self.selected.is_none() {
            self.selected = Some(self.anchor);
        }
    }

    /// Focus a day; the anchor follows so navigation continues from it.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = Some(date);
        self.anchor = date;
    }
}

/// The half-open instant range `[start, end)` currently framed by the view.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWindow<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Computes the visible window for the state's mode and anchor:
/// - month: the full calendar month, independent of week alignment;
/// - week: the Sunday-started week containing the anchor;
/// - day: the focused day.
pub fn resolve_window<Tz: TimeZone>(tz: &Tz, state: &ViewState) -> VisibleWindow<Tz> {
    let (first, last) = match state.mode {
        ViewMode::Month => {
            let first = first_of_month(state.anchor);
            let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
            (first, next)
        }
        ViewMode::Week => {
            let first = start_of_week(state.anchor);
            (first, add_days(first, 7))
        }
        ViewMode::Day => {
            let first = state.focused();
            (first, add_days(first, 1))
        }
    };

    VisibleWindow {
        start: start_of_day(tz, first),
        end: start_of_day(tz, last),
    }
}

/// Month grid cells: leading `None` placeholders for weekdays before day 1
/// (count = weekday index of day 1, Sunday = 0), then one entry per day of
/// the month. A renderer pads the short tail to 6x7 itself.
pub fn month_grid(anchor: NaiveDate) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(anchor);
    let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
    let days_in_month = (next - first).num_days();

    let lead = first.weekday().num_days_from_sunday() as usize;
    let mut cells = Vec::with_capacity(lead + days_in_month as usize);
    cells.extend(std::iter::repeat_n(None, lead));
    cells.extend((0..days_in_month).map(|i| Some(add_days(first, i))));
    cells
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("day 1 must exist in every month")
}
