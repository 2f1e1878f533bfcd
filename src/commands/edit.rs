use anyhow::{Result, bail};
use caldesk_core::Calendar;
use caldesk_core::form::SaveOutcome;
use caldesk_core::storage::KeyValueStore;
use chrono::TimeZone;
use owo_colors::OwoColorize;

use super::{check_time_arg, parse_date_arg};

/// Fields to overwrite; `None` keeps the stored value.
pub struct EventChanges {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub all_day: Option<bool>,
    pub description: Option<String>,
}

pub fn run<S: KeyValueStore>(calendar: &mut Calendar<S>, id: &str, changes: EventChanges) -> Result<()> {
    let id = apply(calendar, id, changes)?;
    if let Some(event) = calendar.event(&id) {
        println!("{}", format!("  Updated: {}", event.title).yellow());
    }
    Ok(())
}

/// Open `id` in an edit draft, merge `changes` into it and save.
fn apply<S: KeyValueStore, Tz: TimeZone>(
    calendar: &mut Calendar<S, Tz>,
    id: &str,
    changes: EventChanges,
) -> Result<String> {
    if !calendar.open_edit_event(id) {
        bail!("Event '{}' not found", id);
    }

    if let Some(draft) = calendar.draft_mut() {
        if let Some(title) = changes.title {
            draft.title = title;
        }
        if let Some(date) = &changes.date {
            parse_date_arg(date)?;
            draft.date = date.trim().to_string();
        }
        if let Some(start) = &changes.start {
            draft.start_time = check_time_arg(start)?;
        }
        if let Some(end) = &changes.end {
            draft.end_time = check_time_arg(end)?;
        }
        if let Some(all_day) = changes.all_day {
            draft.all_day = all_day;
        }
        if let Some(description) = changes.description {
            draft.description = description;
        }
    }

    let outcome = calendar.save_draft();
    if !outcome.closes_modal() {
        calendar.close_modal();
    }
    updated_id(outcome)
}

fn updated_id(outcome: SaveOutcome) -> Result<String> {
    match outcome {
        SaveOutcome::Updated(id) => Ok(id),
        SaveOutcome::Rejected => bail!("Title must not be empty"),
        SaveOutcome::Missing(id) => bail!("Event '{}' was deleted while editing", id),
        SaveOutcome::Created(id) => bail!("Edit created a new event '{}'", id),
    }
}
