mod commands;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use caldesk_core::Calendar;
use caldesk_core::config::CalDeskConfig;
use caldesk_core::storage::FileStore;
use caldesk_core::view::View;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "caldesk")]
#[command(about = "Plan events in month, week and day views, stored locally")]
struct Cli {
    /// Storage profile directory (overrides data_dir from the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Any date in the month to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the week grid (Monday to Sunday, 08:00-19:00)
    Week {
        /// Any date in the week to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show one day's hour grid and agenda
    Day {
        /// Day to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List every stored event
    List {
        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create an event
    New {
        title: Option<String>,

        /// Date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        #[arg(long)]
        all_day: bool,

        #[arg(long)]
        description: Option<String>,
    },
    /// Change fields of an existing event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: Option<String>,

        /// Mark as all-day (true) or timed (false)
        #[arg(long)]
        all_day: Option<bool>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// Move an event to another day, or to an hour slot with --hour
    Move {
        id: String,

        /// Target day (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Target hour slot (8-19); the event starts on the full hour and stops being all-day
        #[arg(long, value_parser = clap::value_parser!(u32).range(8..20))]
        hour: Option<u32>,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let storage = resolve_storage(cli.data_dir)?;
    tracing::debug!(data_dir = %storage.dir().display(), "opening storage profile");
    let mut calendar = Calendar::open_local(storage);

    match cli.command {
        Commands::Month { date } => commands::show::run(&mut calendar, View::Month, date.as_deref()),
        Commands::Week { date } => commands::show::run(&mut calendar, View::Week, date.as_deref()),
        Commands::Day { date } => commands::show::run(&mut calendar, View::Day, date.as_deref()),
        Commands::List { json } => commands::list::run(&calendar, json),
        Commands::New {
            title,
            date,
            start,
            end,
            all_day,
            description,
        } => commands::new::run(
            &mut calendar,
            commands::new::NewEvent {
                title,
                date,
                start,
                end,
                all_day,
                description,
            },
        ),
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            all_day,
            description,
        } => commands::edit::run(
            &mut calendar,
            &id,
            commands::edit::EventChanges {
                title,
                date,
                start,
                end,
                all_day,
                description,
            },
        ),
        Commands::Delete { id } => commands::delete::run(&mut calendar, &id),
        Commands::Move { id, to, hour } => commands::reschedule::run(&mut calendar, &id, &to, hour),
    }
}

fn resolve_storage(data_dir: Option<PathBuf>) -> Result<FileStore> {
    match data_dir {
        Some(dir) => Ok(FileStore::new(dir)),
        None => Ok(CalDeskConfig::load()?.file_store()),
    }
}
