// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// The fixed invite-group option list offered by the create form.
pub const INVITE_GROUP_OPTIONS: [&str; 4] = [
    "CSCW classmates",
    "soccer teammates",
    "capstone group",
    "home town friends",
];

/// A single calendar event.
///
/// `start`/`end` are absolute instants, stored as ISO-8601 UTC on the wire;
/// they are always constructed from a local date + time pair through the
/// store. `end > start` holds strictly for every event the store produces.
///
/// The record stays backward-readable: unknown fields are ignored on
/// deserialization and missing optional fields take their defaults.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Opaque unique id, generated at creation time.
    pub id: String,

    /// Identifier of the creating user; immutable.
    pub owner_id: String,

    /// Non-empty trimmed title.
    pub title: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub details: String,

    /// Labels drawn from [`INVITE_GROUP_OPTIONS`]; duplicates collapse,
    /// order is not significant.
    #[serde(default)]
    pub invite_groups: BTreeSet<String>,

    pub start: DateTime<Utc>,

    pub end: DateTime<Utc>,

    /// The viewer's declared attendance intent; `None` = no response.
    #[serde(default)]
    pub rsvp: Option<Rsvp>,

    /// Display tag only, not behaviorally significant.
    #[serde(default = "default_color")]
    pub color: String,
}

pub(crate) fn default_color() -> String {
    "blue".to_string()
}

/// Draft for an event, holding the raw form input before validation.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub details: String,
    pub invite_groups: Vec<String>,

    /// "YYYY-MM-DD" local, shared by start and end.
    pub date: String,

    /// "HH:MM" local.
    pub start: String,

    /// "HH:MM" local, same day as `start`.
    pub end: String,
}

/// A declared attendance intent, tri-state plus unset (`Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rsvp {
    Going,
    Maybe,
    NotGoing,
}

const RSVP_GOING: &str = "going";
const RSVP_MAYBE: &str = "maybe";
const RSVP_NOTGOING: &str = "notgoing";

impl AsRef<str> for Rsvp {
    fn as_ref(&self) -> &str {
        match self {
            Rsvp::Going => RSVP_GOING,
            Rsvp::Maybe => RSVP_MAYBE,
            Rsvp::NotGoing => RSVP_NOTGOING,
        }
    }
}

impl Display for Rsvp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Rsvp {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            RSVP_GOING => Ok(Rsvp::Going),
            RSVP_MAYBE => Ok(Rsvp::Maybe),
            RSVP_NOTGOING => Ok(Rsvp::NotGoing),
            _ => Err(()),
        }
    }
}
