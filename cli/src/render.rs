// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering of a derived frame.
//!
//! Month view draws the day grid with event markers; week and day views
//! draw one agenda column per laid-out day, ordered by the block geometry.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, TimeZone};
use colored::Colorize;
use huddle_core::{DayFrame, Frame, ViewMode, ViewState, local_date_key, local_time_key};

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Renders the frame for terminal output.
pub fn render<Tz: TimeZone>(frame: &Frame<Tz>, state: &ViewState, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&header(frame, state));
    out.push('\n');
    match state.mode {
        ViewMode::Month => render_month(&mut out, frame, state, today),
        ViewMode::Week | ViewMode::Day => render_columns(&mut out, frame, today),
    }
    out
}

fn header<Tz: TimeZone>(frame: &Frame<Tz>, state: &ViewState) -> String {
    let title = match state.mode {
        ViewMode::Month => state.anchor.format("%B %Y").to_string(),
        ViewMode::Week => {
            let first = frame.window.start.date_naive();
            let last = first + chrono::TimeDelta::days(6);
            format!(
                "{} - {}, {}",
                first.format("%b %-d"),
                last.format("%b %-d"),
                last.year(),
            )
        }
        ViewMode::Day => state.focused().format("%A, %B %-d, %Y").to_string(),
    };
    title.bold().to_string()
}

fn render_month<Tz: TimeZone>(
    out: &mut String,
    frame: &Frame<Tz>,
    state: &ViewState,
    today: NaiveDate,
) {
    let tz = frame.window.start.timezone();
    let busy: BTreeSet<NaiveDate> = frame
        .events
        .iter()
        .map(|e| e.start.with_timezone(&tz).date_naive())
        .collect();

    out.push_str(WEEKDAY_HEADER);
    out.push('\n');
    for row in frame.grid.chunks(7) {
        let mut cells = Vec::with_capacity(7);
        for cell in row {
            cells.push(match cell {
                Some(date) => {
                    let day = format!("{:>2}", date.day());
                    if *date == today {
                        day.reversed().to_string()
                    } else if state.selected == Some(*date) {
                        day.underline().to_string()
                    } else if busy.contains(date) {
                        day.cyan().to_string()
                    } else {
                        day
                    }
                }
                None => "  ".to_string(),
            });
        }
        out.push_str(&cells.join(" "));
        out.push('\n');
    }

    if !frame.events.is_empty() {
        out.push('\n');
        for event in &frame.events {
            let start = event.start.with_timezone(&tz);
            let end = event.end.with_timezone(&tz);
            out.push_str(&format!(
                "{} {}-{}  {}{}\n",
                local_date_key(&start),
                local_time_key(&start),
                local_time_key(&end),
                event.title,
                rsvp_tag(event.rsvp.as_ref()),
            ));
        }
    }
}

fn render_columns<Tz: TimeZone>(out: &mut String, frame: &Frame<Tz>, today: NaiveDate) {
    let tz = frame.window.start.timezone();
    for column in &frame.columns {
        render_column(out, column, &tz, today);
    }
}

fn render_column<Tz: TimeZone>(out: &mut String, column: &DayFrame, tz: &Tz, today: NaiveDate) {
    let label = column.date.format("%a %b %-d").to_string();
    if column.date == today {
        out.push_str(&label.reversed().to_string());
    } else {
        out.push_str(&label);
    }
    out.push('\n');

    if column.blocks.is_empty() {
        out.push_str(&format!("  {}\n", "no events".dimmed()));
        return;
    }
    for block in &column.blocks {
        let start = block.event.start.with_timezone(tz);
        let end = block.event.end.with_timezone(tz);
        let mut line = format!(
            "  {}-{}  {}",
            local_time_key(&start),
            local_time_key(&end),
            block.event.title,
        );
        if !block.event.location.is_empty() {
            line.push_str(&format!(" @ {}", block.event.location));
        }
        line.push_str(&rsvp_tag(block.event.rsvp.as_ref()));
        out.push_str(&line);
        out.push('\n');
    }
}

fn rsvp_tag(rsvp: Option<&huddle_core::Rsvp>) -> String {
    match rsvp {
        Some(huddle_core::Rsvp::Going) => format!(" [{}]", "going".green()),
        Some(huddle_core::Rsvp::Maybe) => format!(" [{}]", "maybe".yellow()),
        Some(huddle_core::Rsvp::NotGoing) => format!(" [{}]", "notgoing".red()),
        None => String::new(),
    }
}
