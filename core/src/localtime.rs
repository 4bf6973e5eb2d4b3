// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc,
    offset::LocalResult,
};

pub(crate) const FORMAT_DATE: &str = "%Y-%m-%d";
pub(crate) const FORMAT_TIME: &str = "%H:%M";

/// A date/time string that failed to parse as strict local input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidTemporalInput {
    /// Not a representable calendar date ("YYYY-MM-DD", months 1-12, real days).
    Date(String),

    /// Not a representable wall-clock time ("HH:MM", zero-padded, 24h).
    Time(String),
}

impl fmt::Display for InvalidTemporalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(s) => write!(f, "invalid date: {s}"),
            Self::Time(s) => write!(f, "invalid time: {s}"),
        }
    }
}

impl std::error::Error for InvalidTemporalInput {}

/// "YYYY-MM-DD" in the viewer's calendar, used as a day-grouping key.
pub fn local_date_key<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    t.date_naive().format(FORMAT_DATE).to_string()
}

/// "HH:MM" local, zero-padded.
pub fn local_time_key<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    t.time().format(FORMAT_TIME).to_string()
}

/// Calendar-day arithmetic. Operates on dates, not 24h multiples, so local
/// wall-clock comparisons stay correct across DST transitions.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + TimeDelta::days(n)
}

/// The Sunday at or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// Local midnight of `date` in the given zone.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    from_local_datetime(tz, NaiveDateTime::new(date, midnight()))
}

/// Combines a "YYYY-MM-DD" date and a "HH:MM" time into a local instant.
///
/// Out-of-range components (month 13, hour 25, Feb 30) are rejected, never
/// wrapped.
pub fn parse_local_datetime<Tz: TimeZone>(
    tz: &Tz,
    date: &str,
    time: &str,
) -> Result<DateTime<Tz>, InvalidTemporalInput> {
    let d = NaiveDate::parse_from_str(date, FORMAT_DATE)
        .map_err(|_| InvalidTemporalInput::Date(date.to_string()))?;
    let t = NaiveTime::parse_from_str(time, FORMAT_TIME)
        .map_err(|_| InvalidTemporalInput::Time(time.to_string()))?;
    Ok(from_local_datetime(tz, NaiveDateTime::new(d, t)))
}

/// Minutes since local midnight, in `[0, 1440)`.
pub fn minutes_since_midnight<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Convert a `NaiveDateTime` to the given timezone, handling local time
/// ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g. a DST spring-forward gap):
///   falls back to the UTC combination and then converts.
pub(crate) fn from_local_datetime<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => x,
        LocalResult::Ambiguous(a, b) => {
            if a <= b { a } else { b }
        }
        LocalResult::None => Utc.from_utc_datetime(&naive).with_timezone(tz),
    }
}

const fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}
