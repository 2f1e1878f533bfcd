use anyhow::{Result, bail};
use caldesk_core::Calendar;
use caldesk_core::storage::KeyValueStore;
use owo_colors::OwoColorize;

pub fn run<S: KeyValueStore>(calendar: &mut Calendar<S>, id: &str) -> Result<()> {
    if !calendar.open_edit_event(id) {
        bail!("Event '{}' not found", id);
    }

    if let Some(event) = calendar.delete_editing_event() {
        println!("{}", format!("  Deleted: {}", event.title).red());
    }

    Ok(())
}
