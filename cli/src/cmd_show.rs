// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use huddle_core::ViewMode;

use crate::cli::Controller;
use crate::render;

/// Render the calendar in the current or requested view.
#[derive(Debug, Clone, Default)]
pub struct CmdShow {
    pub view: Option<ViewMode>,
    pub date: Option<NaiveDate>,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the calendar")
            .arg(
                arg!(-v --view [VIEW] "View mode to switch to (persisted as the preference)")
                    .value_parser(["month", "week", "day"]),
            )
            .arg(arg!(-d --date [DATE] "Day to focus, YYYY-MM-DD"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let view = match matches.get_one::<String>("view") {
            Some(raw) => Some(
                raw.parse::<ViewMode>()
                    .map_err(|()| format!("unknown view: {raw}"))?,
            ),
            None => None,
        };
        let date = match matches.get_one::<String>("date") {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| format!("invalid date {raw}: {e}"))?,
            ),
            None => None,
        };
        Ok(Self { view, date })
    }

    pub fn run(self, controller: &mut Controller) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar");
        if let Some(date) = self.date {
            controller.select_date(date);
        }
        if let Some(view) = self.view {
            controller.set_view(view);
        }

        let frame = controller.frame();
        let today = controller.now().date_naive();
        println!("{}", render::render(&frame, controller.state(), today));
        Ok(())
    }
}
