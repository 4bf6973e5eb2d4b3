// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! All fixtures pin the clock to Wednesday 2024-03-13 10:00 in
//! America/Chicago, three days after the US spring-forward transition, so
//! DST behavior is exercised without flakiness.

use chrono::{DateTime, NaiveDate, TimeZone as _};
use chrono_tz::America::Chicago;
use chrono_tz::Tz;

use huddle_core::{CalendarController, EventDraft, MemoryStorage, UserProfile};

pub const TEST_OWNER: &str = "user-1";

/// The pinned "current" instant shared by all workflow tests.
pub fn test_now() -> DateTime<Tz> {
    Chicago.with_ymd_and_hms(2024, 3, 13, 10, 0, 0).unwrap()
}

pub fn test_user() -> UserProfile {
    UserProfile {
        owner_id: TEST_OWNER.to_string(),
        display_name: "Jordan".to_string(),
    }
}

/// A controller over fresh in-memory storage at the pinned clock.
pub fn test_controller() -> CalendarController<Tz, MemoryStorage> {
    CalendarController::new(test_now(), test_user(), MemoryStorage::new())
}

/// A valid draft for the given title on the pinned week's Tuesday.
pub fn test_draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        date: "2024-03-12".to_string(),
        start: "12:00".to_string(),
        end: "13:00".to_string(),
        ..EventDraft::default()
    }
}

pub fn naive(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
