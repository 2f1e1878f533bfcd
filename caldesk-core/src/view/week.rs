//! Week grid: seven Monday-first columns crossed with the hour slots.

use chrono::{NaiveDate, TimeZone};

use crate::event::Event;
use crate::labels;
use crate::utils::start_of_week;

use super::{Slot, slots_for_day};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekView<'a> {
    pub title: String,
    pub week_start: NaiveDate,
    pub columns: Vec<WeekColumn<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekColumn<'a> {
    pub date: NaiveDate,
    pub title: String,
    pub today: bool,
    pub slots: Vec<Slot<'a>>,
}

impl<'a> WeekView<'a> {
    /// Slot at `date`/`hour`, if it is part of this week's grid.
    pub fn slot(&self, date: NaiveDate, hour: u32) -> Option<&Slot<'a>> {
        self.columns
            .iter()
            .find(|c| c.date == date)?
            .slots
            .iter()
            .find(|s| s.hour == hour)
    }
}

pub fn week_view<'a, Tz: TimeZone>(
    events: &'a [Event],
    anchor: NaiveDate,
    today: NaiveDate,
    tz: &Tz,
) -> WeekView<'a> {
    let week_start = start_of_week(anchor);

    let columns = week_start
        .iter_days()
        .take(7)
        .map(|date| WeekColumn {
            date,
            title: labels::column_title(date),
            today: date == today,
            slots: slots_for_day(events, date, tz),
        })
        .collect();

    WeekView {
        title: labels::week_title(week_start),
        week_start,
        columns,
    }
}
