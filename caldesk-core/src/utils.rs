//! Local-date helpers.
//!
//! Events are stored as UTC instants; everything the widget shows is bucketed
//! by the local calendar date and hour of those instants.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Interpret a wall-clock date/time in `tz` and return the instant.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times that
/// do not exist (DST spring-forward gap) are pushed forward by one hour.
pub fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt.with_timezone(&Utc);
    }

    match tz.from_local_datetime(&(naive + Duration::hours(1))).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => naive.and_utc(),
    }
}

/// Wall-clock date/time of an instant in `tz`.
pub fn local_naive<Tz: TimeZone>(tz: &Tz, instant: &DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}

/// Local calendar date of an instant in `tz`.
pub fn local_date<Tz: TimeZone>(tz: &Tz, instant: &DateTime<Utc>) -> NaiveDate {
    local_naive(tz, instant).date()
}

/// Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(offset as i64)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// First day of the month `delta` months away from `date`'s month.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let shifted = if delta >= 0 {
        first.checked_add_months(Months::new(delta as u32))
    } else {
        first.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// Parse a `YYYY-MM-DD` date input value.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an `HH:MM` time input value.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Format a time as an `HH:MM` input value.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
