// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use huddle_core::{INVITE_GROUP_OPTIONS, Rsvp, local_date_key, local_time_key};

use crate::cli::Controller;

/// Add a new event from command-line arguments. Omitted fields fall back
/// to the draft defaults (focused day, the noon hour slot).
#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub title: String,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
    pub groups: Vec<String>,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a new event")
            .arg(arg!(<TITLE> "Event title"))
            .arg(arg!(-d --date [DATE] "Event date, YYYY-MM-DD (defaults to today)"))
            .arg(arg!(-s --start [TIME] "Start time, HH:MM (defaults to 12:00)"))
            .arg(arg!(-e --end [TIME] "End time, HH:MM (defaults to 13:00)"))
            .arg(arg!(-l --location [LOCATION] "Where the event happens"))
            .arg(arg!(--details [DETAILS] "Free-form details"))
            .arg(
                arg!(-g --group [GROUP] ... "Invite group (repeatable)")
                    .value_parser(INVITE_GROUP_OPTIONS),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: matches
                .get_one::<String>("TITLE")
                .cloned()
                .unwrap_or_default(),
            date: matches.get_one::<String>("date").cloned(),
            start: matches.get_one::<String>("start").cloned(),
            end: matches.get_one::<String>("end").cloned(),
            location: matches.get_one::<String>("location").cloned(),
            details: matches.get_one::<String>("details").cloned(),
            groups: matches
                .get_many::<String>("group")
                .map(|groups| groups.cloned().collect())
                .unwrap_or_default(),
        }
    }

    pub fn run(self, controller: &mut Controller) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event");
        let mut draft = controller.open_create_draft().clone();
        draft.title = self.title;
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(start) = self.start {
            draft.start = start;
        }
        if let Some(end) = self.end {
            draft.end = end;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(details) = self.details {
            draft.details = details;
        }
        if !self.groups.is_empty() {
            draft.invite_groups = self.groups;
        }

        let event = controller.submit_draft(&draft)?;
        let start = event.start.with_timezone(&controller.now().timezone());
        let end = event.end.with_timezone(&controller.now().timezone());
        println!(
            "Added {} on {} from {} to {} ({})",
            event.title.bold(),
            local_date_key(&start),
            local_time_key(&start),
            local_time_key(&end),
            event.id.dimmed(),
        );
        Ok(())
    }
}

/// Remove an event by id.
#[derive(Debug, Clone)]
pub struct CmdEventRemove {
    pub id: String,
}

impl CmdEventRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove an event")
            .arg(arg!(<ID> "Event id"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: matches.get_one::<String>("ID").cloned().unwrap_or_default(),
        }
    }

    pub fn run(self, controller: &mut Controller) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing event");
        let known = controller.store().list().iter().any(|e| e.id == self.id);
        controller.delete_event(&self.id);
        if known {
            println!("Removed {}", self.id);
        } else {
            println!("No event with id {}", self.id);
        }
        Ok(())
    }
}

/// Set or clear an RSVP on an event. Repeating the current status clears
/// it back to no-response.
#[derive(Debug, Clone)]
pub struct CmdEventRsvp {
    pub id: String,
    pub status: Rsvp,
}

impl CmdEventRsvp {
    pub const NAME: &str = "rsvp";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Set or clear your RSVP on an event")
            .arg(arg!(<ID> "Event id"))
            .arg(arg!(<STATUS> "One of: going, maybe, notgoing").value_parser([
                "going", "maybe", "notgoing",
            ]))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let raw = matches
            .get_one::<String>("STATUS")
            .cloned()
            .unwrap_or_default();
        let status = raw
            .parse::<Rsvp>()
            .map_err(|()| format!("unknown RSVP status: {raw}"))?;
        Ok(Self {
            id: matches.get_one::<String>("ID").cloned().unwrap_or_default(),
            status,
        })
    }

    pub fn run(self, controller: &mut Controller) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "updating rsvp");
        controller.set_rsvp(&self.id, self.status);
        match controller.store().list().iter().find(|e| e.id == self.id) {
            Some(event) => match &event.rsvp {
                Some(status) => println!("RSVP for {}: {}", event.title.bold(), status),
                None => println!("RSVP for {} cleared", event.title.bold()),
            },
            None => println!("No event with id {}", self.id),
        }
        Ok(())
    }
}
