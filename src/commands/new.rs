use anyhow::{Result, bail};
use caldesk_core::Calendar;
use caldesk_core::form::SaveOutcome;
use caldesk_core::storage::KeyValueStore;
use chrono::TimeZone;
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::{check_time_arg, parse_date_arg};

pub struct NewEvent {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub all_day: bool,
    pub description: Option<String>,
}

pub fn run<S: KeyValueStore>(calendar: &mut Calendar<S>, mut args: NewEvent) -> Result<()> {
    if args.title.is_none() {
        args.title = Some(Input::<String>::new().with_prompt("  Title").interact_text()?);
    }

    let id = create(calendar, args)?;
    if let Some(event) = calendar.event(&id) {
        println!("{}", format!("  Created: {}", event.title).green());
        println!("  {}", id.dimmed());
    }

    Ok(())
}

/// Fill a new-event draft from the arguments and save it. Returns the new id.
fn create<S: KeyValueStore, Tz: TimeZone>(calendar: &mut Calendar<S, Tz>, args: NewEvent) -> Result<String> {
    let date = match &args.date {
        Some(d) => parse_date_arg(d)?,
        None => calendar.today(),
    };

    calendar.open_new_event(date);
    if let Some(draft) = calendar.draft_mut() {
        draft.title = args.title.unwrap_or_default();
        // All-day drafts ignore their times
        if args.all_day {
            draft.all_day = true;
        } else {
            if let Some(start) = &args.start {
                draft.start_time = check_time_arg(start)?;
            }
            if let Some(end) = &args.end {
                draft.end_time = check_time_arg(end)?;
            }
        }
        if let Some(description) = args.description {
            draft.description = description;
        }
    }

    match calendar.save_draft() {
        SaveOutcome::Created(id) => Ok(id),
        SaveOutcome::Rejected => {
            calendar.close_modal();
            bail!("A title is required")
        }
        other => bail!("Unexpected result while creating event: {:?}", other),
    }
}
