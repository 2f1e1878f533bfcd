//! The calendar event record.
//!
//! Events are persisted exactly as they appear here, so the serde layout is
//! the storage format: camelCase keys, RFC 3339 instants, `description`
//! omitted when absent and `allDay` defaulting to false.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{local_date, local_naive};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(
        title: String,
        description: Option<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        all_day: bool,
    ) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            start,
            end,
            all_day,
        }
    }

    /// `end - start`. May be negative; nothing enforces ordering.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn local_start<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDateTime {
        local_naive(tz, &self.start)
    }

    pub fn local_end<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDateTime {
        local_naive(tz, &self.end)
    }

    /// The local calendar day this event is shown on.
    pub fn local_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        local_date(tz, &self.start)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
