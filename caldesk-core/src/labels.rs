//! German display strings used by the widget's headings and tiles.

use chrono::{Datelike, NaiveDate, TimeZone, Weekday};

use crate::event::Event;
use crate::utils::format_time;

pub const WEEKDAY_HEADER: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

pub const ALL_DAY: &str = "Ganztägig";
pub const NO_EVENTS_TODAY: &str = "Keine Termine für diesen Tag.";
pub const MODAL_TITLE_NEW: &str = "Neuen Termin erstellen";
pub const MODAL_TITLE_EDIT: &str = "Termin bearbeiten";

const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

pub fn weekday_short(weekday: Weekday) -> &'static str {
    WEEKDAY_HEADER[weekday.num_days_from_monday() as usize]
}

/// "Juni 2024"
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", month_name(date), date.year())
}

/// "Woche: 3. Juni – 9. Juni 2024"
pub fn week_title(week_start: NaiveDate) -> String {
    let end = week_start + chrono::Duration::days(6);
    format!(
        "Woche: {}. {} – {}. {} {}",
        week_start.day(),
        MONTHS_SHORT[week_start.month0() as usize],
        end.day(),
        MONTHS_SHORT[end.month0() as usize],
        end.year()
    )
}

/// "Montag, 3. Juni 2024"
pub fn day_title(date: NaiveDate) -> String {
    format!(
        "{}, {}. {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date),
        date.year()
    )
}

/// Column header in the week grid: "Mo 3"
pub fn column_title(date: NaiveDate) -> String {
    format!("{} {}", weekday_short(date.weekday()), date.day())
}

/// "09:00" for an hour slot.
pub fn hour_label(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Month-cell tile text: "09:00 · Standup" or "Ganztägig · Urlaub".
pub fn tile_label<Tz: TimeZone>(event: &Event, tz: &Tz) -> String {
    let when = if event.all_day {
        ALL_DAY.to_string()
    } else {
        format_time(event.local_start(tz).time())
    };
    format!("{} · {}", when, event.title)
}

/// Agenda time range: "09:00 – 09:30". Empty for all-day events.
pub fn time_range<Tz: TimeZone>(event: &Event, tz: &Tz) -> String {
    if event.all_day {
        return String::new();
    }
    format!(
        "{} – {}",
        format_time(event.local_start(tz).time()),
        format_time(event.local_end(tz).time())
    )
}

/// "+2 weitere"
pub fn overflow(count: usize) -> String {
    format!("+{} weitere", count)
}
