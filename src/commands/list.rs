use anyhow::Result;
use caldesk_core::storage::KeyValueStore;
use caldesk_core::{Calendar, Event, labels};
use chrono::Local;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(calendar: &Calendar<S>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(calendar.events())?);
        return Ok(());
    }

    let mut events: Vec<&Event> = calendar.events().iter().collect();
    events.sort_by_key(|e| e.start);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut current_date = None;

    for event in events {
        let date = event.local_day(&Local);

        if current_date != Some(date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", labels::day_title(date).bold());
            current_date = Some(date);
        }

        let time = if event.all_day {
            labels::ALL_DAY.to_string()
        } else {
            labels::time_range(event, &Local)
        };
        println!("  {:>13} {} {}", time, event.title, event.id.dimmed());
    }

    Ok(())
}
