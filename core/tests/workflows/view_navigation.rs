// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! View navigation workflow tests.
//!
//! These tests walk the month, week and day views through navigation,
//! selection and mode changes, checking the derived window and grid at
//! each step.

use chrono::{Offset as _, TimeZone as _, Timelike as _};
use chrono_tz::America::Chicago;

use huddle_core::{Direction, ViewMode};

use crate::common::{naive, test_controller};

#[test]
fn navigation_month_paging_lands_on_first_of_month() {
    let mut controller = test_controller();

    let frame = controller.navigate(Direction::Next);
    assert_eq!(controller.state().anchor, naive(2024, 4, 1));
    assert_eq!(frame.window.start.date_naive(), naive(2024, 4, 1));

    // back across the year boundary, four steps to December
    for _ in 0..4 {
        controller.navigate(Direction::Previous);
    }
    assert_eq!(controller.state().anchor, naive(2023, 12, 1));
}

#[test]
fn navigation_month_window_spans_local_midnights() {
    let controller = test_controller();
    let frame = controller.frame();

    assert_eq!(frame.window.start.date_naive(), naive(2024, 3, 1));
    assert_eq!(frame.window.end.date_naive(), naive(2024, 4, 1));
    assert_eq!(frame.window.start.num_seconds_from_midnight(), 0);
    // March 1 is still CST, the window end is already CDT
    assert_eq!(frame.window.start.offset().fix().local_minus_utc(), -6 * 3600);
    assert_eq!(frame.window.end.offset().fix().local_minus_utc(), -5 * 3600);
}

#[test]
fn navigation_month_grid_shape() {
    let controller = test_controller();
    let grid = controller.frame().grid;

    // March 2024 starts on a Friday: five placeholders, then 31 days
    assert_eq!(grid.len(), 36);
    assert!(grid[..5].iter().all(Option::is_none));
    assert_eq!(grid[5], Some(naive(2024, 3, 1)));
    assert_eq!(grid[35], Some(naive(2024, 3, 31)));
}

#[test]
fn navigation_week_paging_shifts_selection_with_the_window() {
    let mut controller = test_controller();
    controller.set_view(ViewMode::Week);
    controller.select_date(naive(2024, 3, 13));

    let frame = controller.navigate(Direction::Next);
    assert_eq!(controller.state().selected, Some(naive(2024, 3, 20)));
    assert_eq!(frame.columns[0].date, naive(2024, 3, 17));
    assert_eq!(frame.columns[6].date, naive(2024, 3, 23));
}

#[test]
fn navigation_day_paging_moves_one_day() {
    let mut controller = test_controller();
    controller.set_view(ViewMode::Day);

    let frame = controller.navigate(Direction::Previous);
    assert_eq!(frame.columns.len(), 1);
    assert_eq!(frame.columns[0].date, naive(2024, 3, 12));
    let frame = controller.navigate(Direction::Next);
    assert_eq!(frame.columns[0].date, naive(2024, 3, 13));
}

#[test]
fn navigation_entering_day_view_seeds_selection_from_anchor() {
    let mut controller = test_controller();
    assert_eq!(controller.state().selected, None);

    let frame = controller.set_view(ViewMode::Day);
    assert_eq!(controller.state().selected, Some(naive(2024, 3, 13)));
    assert_eq!(frame.columns[0].date, naive(2024, 3, 13));

    // switching back to month keeps the selection
    controller.set_view(ViewMode::Month);
    assert_eq!(controller.state().selected, Some(naive(2024, 3, 13)));
}

#[test]
fn navigation_go_to_today_restores_the_current_date() {
    let mut controller = test_controller();
    controller.set_view(ViewMode::Day);
    for _ in 0..10 {
        controller.navigate(Direction::Next);
    }
    assert_eq!(controller.state().focused(), naive(2024, 3, 23));

    let frame = controller.go_to_today();
    assert_eq!(frame.columns[0].date, naive(2024, 3, 13));
    assert_eq!(controller.state().selected, Some(naive(2024, 3, 13)));
}

#[test]
fn navigation_day_window_covers_spring_forward_day() {
    let mut controller = test_controller();
    controller.set_view(ViewMode::Day);
    controller.select_date(naive(2024, 3, 10));

    let frame = controller.frame();
    let start = frame.window.start.clone();
    let end = frame.window.end.clone();
    assert_eq!(start, Chicago.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap());
    assert_eq!(end, Chicago.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap());
    // the wall day is 23 hours long
    assert_eq!((end - start).num_hours(), 23);
}
