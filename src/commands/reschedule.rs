use anyhow::{Result, bail};
use caldesk_core::Calendar;
use caldesk_core::dnd::DropTarget;
use caldesk_core::labels;
use caldesk_core::storage::KeyValueStore;
use chrono::{Local, TimeZone};
use owo_colors::OwoColorize;

use super::parse_date_arg;

pub fn run<S: KeyValueStore>(calendar: &mut Calendar<S>, id: &str, to: &str, hour: Option<u32>) -> Result<()> {
    let date = parse_date_arg(to)?;
    let target = match hour {
        Some(hour) => DropTarget::Slot { date, hour },
        None => DropTarget::Day(date),
    };

    drag_and_drop(calendar, id, target)?;

    if let Some(event) = calendar.event(id) {
        println!(
            "{} {}",
            format!("  Moved: {}", event.title).green(),
            labels::tile_label(event, &Local).dimmed()
        );
    }

    Ok(())
}

/// Replays a drag gesture: pick up the event, hover the target, drop it.
fn drag_and_drop<S: KeyValueStore, Tz: TimeZone>(
    calendar: &mut Calendar<S, Tz>,
    id: &str,
    target: DropTarget,
) -> Result<()> {
    calendar.drag_start(id);

    if calendar.drag_over(target).is_none() {
        calendar.drag_cancel();
        bail!("Cannot drop on {}: the hour grid runs from 08:00 to 19:00", target);
    }

    if !calendar.drop_on(target) {
        bail!("Event '{}' not found", id);
    }

    Ok(())
}
