//! Month grid: Monday-first, leading blanks, one cell per day.

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::constants::MONTH_CELL_EVENT_LIMIT;
use crate::event::Event;
use crate::labels;
use crate::utils::{days_in_month, first_of_month};

use super::events_for_day;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthView<'a> {
    pub title: String,
    pub first: NaiveDate,
    /// Empty cells before day 1 so the grid lines up under Mo..So.
    pub leading_blanks: usize,
    pub cells: Vec<MonthCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthCell<'a> {
    pub date: NaiveDate,
    pub today: bool,
    /// The first few events of the day, in collection order.
    pub events: Vec<&'a Event>,
    /// All events of the day, shown as a badge.
    pub total: usize,
}

impl MonthCell<'_> {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Events not listed in the cell.
    pub fn overflow(&self) -> usize {
        self.total.saturating_sub(self.events.len())
    }
}

pub fn month_view<'a, Tz: TimeZone>(
    events: &'a [Event],
    anchor: NaiveDate,
    today: NaiveDate,
    tz: &Tz,
) -> MonthView<'a> {
    let first = first_of_month(anchor);
    let leading_blanks = first.weekday().num_days_from_monday() as usize;

    let cells = first
        .iter_days()
        .take(days_in_month(anchor) as usize)
        .map(|date| {
            let mut day_events = events_for_day(events, date, tz);
            let total = day_events.len();
            day_events.truncate(MONTH_CELL_EVENT_LIMIT);

            MonthCell {
                date,
                today: date == today,
                events: day_events,
                total,
            }
        })
        .collect();

    MonthView {
        title: labels::month_title(first),
        first,
        leading_blanks,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use chrono_tz::Europe::Berlin;

    #[test]
    fn june_2024_layout() {
        // June 1st 2024 is a Saturday
        let view = month_view(&[], date(2024, 6, 17), date(2024, 6, 3), &Berlin);

        assert_eq!(view.title, "Juni 2024");
        assert_eq!(view.leading_blanks, 5);
        assert_eq!(view.cells.len(), 30);
        assert_eq!(view.cells[0].day(), 1);
        assert_eq!(view.cells[29].day(), 30);
        assert!(view.cells[2].today);
        assert_eq!(view.cells.iter().filter(|c| c.today).count(), 1);
    }

    #[test]
    fn month_starting_on_sunday_has_six_blanks() {
        // September 1st 2024 is a Sunday
        let view = month_view(&[], date(2024, 9, 1), date(2000, 1, 1), &Berlin);
        assert_eq!(view.leading_blanks, 6);
        assert!(view.cells.iter().all(|c| !c.today));
    }

    #[test]
    fn month_starting_on_monday_has_no_blanks() {
        let view = month_view(&[], date(2024, 7, 31), date(2000, 1, 1), &Berlin);
        assert_eq!(view.leading_blanks, 0);
        assert_eq!(view.cells.len(), 31);
    }

    #[test]
    fn cells_cap_listed_events() {
        let day = date(2024, 6, 3);
        let events: Vec<Event> = (0..5)
            .map(|i| event_at(&format!("e{}", i), day, 9 + i, 0, 30))
            .collect();

        let view = month_view(&events, day, day, &Berlin);
        let cell = &view.cells[2];

        assert_eq!(cell.total, 5);
        assert_eq!(cell.events.len(), 3);
        assert_eq!(cell.overflow(), 2);
        assert_eq!(cell.events[0].id, "e0");
        assert_eq!(view.cells[3].total, 0);
    }

    #[test]
    fn all_day_events_show_in_their_cell() {
        let day = date(2024, 6, 14);
        let events = vec![all_day("holiday", day)];
        let view = month_view(&events, day, day, &Berlin);
        assert_eq!(view.cells[13].events[0].id, "holiday");
    }
}
