pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod reschedule;
pub mod show;

use anyhow::{Result, anyhow};
use caldesk_core::utils::{parse_date, parse_time};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    parse_date(s).ok_or_else(|| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Check an `HH:MM` argument before it goes into a draft.
pub fn check_time_arg(s: &str) -> Result<String> {
    parse_time(s)
        .map(|_| s.trim().to_string())
        .ok_or_else(|| anyhow!("Invalid time '{}'. Expected HH:MM", s))
}
