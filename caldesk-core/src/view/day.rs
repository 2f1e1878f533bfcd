//! Single-day hour grid plus a chronological agenda.

use chrono::{NaiveDate, TimeZone};

use crate::event::Event;
use crate::labels;

use super::{Slot, events_for_day, slots_for_day};

#[derive(Debug, Clone, PartialEq)]
pub struct DayView<'a> {
    pub title: String,
    pub date: NaiveDate,
    pub today: bool,
    pub slots: Vec<Slot<'a>>,
    /// Every event of the day, all-day ones included, sorted by start.
    pub agenda: Vec<&'a Event>,
}

pub fn day_view<'a, Tz: TimeZone>(
    events: &'a [Event],
    date: NaiveDate,
    today: NaiveDate,
    tz: &Tz,
) -> DayView<'a> {
    let mut agenda = events_for_day(events, date, tz);
    agenda.sort_by_key(|e| e.start);

    DayView {
        title: labels::day_title(date),
        date,
        today: date == today,
        slots: slots_for_day(events, date, tz),
        agenda,
    }
}
