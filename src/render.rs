//! Terminal rendering of the computed views.
//!
//! Extension trait adding colored output to caldesk-core view types.

use caldesk_core::constants::MONTH_CELL_EVENT_LIMIT;
use caldesk_core::labels;
use caldesk_core::view::{DayView, MonthCell, MonthView, Slot, WeekView};
use chrono::Local;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

/// Width of a month cell / week column, in characters.
const CELL_WIDTH: usize = 14;

/// Width of the hour label column.
const HOUR_WIDTH: usize = 6;

/// Pad or cut `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{}{}", text, " ".repeat(width - count));
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

impl Render for MonthView<'_> {
    fn render(&self) -> String {
        let mut lines = vec![self.title.bold().to_string(), String::new()];

        lines.push(
            labels::WEEKDAY_HEADER
                .iter()
                .map(|d| fit(d, CELL_WIDTH).dimmed().to_string())
                .collect::<Vec<_>>()
                .join(""),
        );

        let mut cells: Vec<Option<&MonthCell>> = vec![None; self.leading_blanks];
        cells.extend(self.cells.iter().map(Some));

        for week in cells.chunks(7) {
            lines.extend(render_month_row(week));
        }

        lines.join("\n")
    }
}

/// One week of the month grid: a day-number line, the listed events, the
/// overflow line.
fn render_month_row(week: &[Option<&MonthCell>]) -> Vec<String> {
    let mut rows = vec![String::new(); MONTH_CELL_EVENT_LIMIT + 2];

    for cell in week {
        let Some(cell) = cell else {
            for row in rows.iter_mut() {
                row.push_str(&" ".repeat(CELL_WIDTH));
            }
            continue;
        };

        let badge = if cell.total > 0 {
            format!("{:>2} ({})", cell.day(), cell.total)
        } else {
            format!("{:>2}", cell.day())
        };
        let header = fit(&badge, CELL_WIDTH);
        rows[0].push_str(&if cell.today {
            header.blue().bold().to_string()
        } else {
            header
        });

        for i in 0..MONTH_CELL_EVENT_LIMIT {
            let text = cell
                .events
                .get(i)
                .map(|e| labels::tile_label(e, &Local))
                .unwrap_or_default();
            rows[i + 1].push_str(&fit(&text, CELL_WIDTH).cyan().to_string());
        }

        let overflow = if cell.overflow() > 0 {
            labels::overflow(cell.overflow())
        } else {
            String::new()
        };
        rows[MONTH_CELL_EVENT_LIMIT + 1].push_str(&fit(&overflow, CELL_WIDTH).dimmed().to_string());
    }

    rows
}

/// Titles of a slot's events, compacted to fit one grid cell.
fn slot_text(slot: &Slot, width: usize) -> String {
    let text = match slot.events.as_slice() {
        [] => String::new(),
        [only] => only.title.clone(),
        [first, rest @ ..] => format!("{} +{}", first.title, rest.len()),
    };
    fit(&text, width)
}

impl Render for WeekView<'_> {
    fn render(&self) -> String {
        let mut lines = vec![self.title.bold().to_string(), String::new()];

        let mut header = fit("Zeit", HOUR_WIDTH).dimmed().to_string();
        for column in &self.columns {
            let title = fit(&column.title, CELL_WIDTH);
            header.push_str(&if column.today {
                title.blue().bold().to_string()
            } else {
                title.dimmed().to_string()
            });
        }
        lines.push(header);

        let hours = self.columns.first().map(|c| c.slots.len()).unwrap_or(0);
        for row in 0..hours {
            let hour = self.columns[0].slots[row].hour;
            let mut line = fit(&labels::hour_label(hour), HOUR_WIDTH).dimmed().to_string();
            for column in &self.columns {
                line.push_str(&slot_text(&column.slots[row], CELL_WIDTH).green().to_string());
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}

impl Render for DayView<'_> {
    fn render(&self) -> String {
        let title = if self.today {
            self.title.blue().bold().to_string()
        } else {
            self.title.bold().to_string()
        };
        let mut lines = vec![title, String::new()];

        for slot in &self.slots {
            lines.push(format!(
                "{}{}",
                fit(&labels::hour_label(slot.hour), HOUR_WIDTH).dimmed(),
                slot_text(slot, CELL_WIDTH * 3).magenta()
            ));
        }

        lines.push(String::new());
        lines.push("Termine des Tages".bold().to_string());

        if self.agenda.is_empty() {
            lines.push(format!("  {}", labels::NO_EVENTS_TODAY.dimmed()));
        }

        for event in &self.agenda {
            let when = if event.all_day {
                labels::ALL_DAY.to_string()
            } else {
                labels::time_range(event, &Local)
            };
            lines.push(format!("  {} {}", fit(&when, 13).dimmed(), event.title));
            if let Some(description) = &event.description {
                lines.push(format!("  {} {}", " ".repeat(13), description.dimmed()));
            }
        }

        lines.join("\n")
    }
}
