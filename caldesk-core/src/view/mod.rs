//! View calculators.
//!
//! Pure functions from an anchor date and the event collection to the cells
//! and slots a host renders. Placement is driven only by an event's local
//! start: `end` never affects which cell or slot shows it.

mod day;
mod month;
mod week;

pub use day::{DayView, day_view};
pub use month::{MonthCell, MonthView, month_view};
pub use week::{WeekColumn, WeekView, week_view};

use chrono::{NaiveDate, TimeZone, Timelike};
use std::fmt;

use crate::constants::{FIRST_HOUR, HOUR_SLOTS};
use crate::event::Event;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Month,
    Week,
    Day,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            View::Month => "month",
            View::Week => "week",
            View::Day => "day",
        };
        write!(f, "{}", name)
    }
}

/// One (day, hour) cell of the week or day grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<'a> {
    pub date: NaiveDate,
    pub hour: u32,
    pub events: Vec<&'a Event>,
}

/// Hours shown in the week and day grids: 8 through 19.
pub fn hours() -> impl Iterator<Item = u32> {
    FIRST_HOUR..FIRST_HOUR + HOUR_SLOTS
}

/// Events whose local start date is `date`, in collection order.
pub fn events_for_day<'a, Tz: TimeZone>(
    events: &'a [Event],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a Event> {
    events.iter().filter(|e| e.local_day(tz) == date).collect()
}

/// Events whose local start falls on `date` within `hour`.
pub fn events_in_slot<'a, Tz: TimeZone>(
    events: &'a [Event],
    date: NaiveDate,
    hour: u32,
    tz: &Tz,
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| {
            let start = e.local_start(tz);
            start.date() == date && start.hour() == hour
        })
        .collect()
}

/// The hour grid of a single day.
pub(crate) fn slots_for_day<'a, Tz: TimeZone>(
    events: &'a [Event],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<Slot<'a>> {
    hours()
        .map(|hour| Slot {
            date,
            hour,
            events: events_in_slot(events, date, hour, tz),
        })
        .collect()
}
