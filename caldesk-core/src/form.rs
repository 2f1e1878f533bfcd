//! Create/edit form drafts and their mapping onto events.
//!
//! A [`Draft`] holds the raw input values of the event modal. It never touches
//! the committed collection until [`commit`] is called with it.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::constants::{ALL_DAY_END, ALL_DAY_START, DEFAULT_END_TIME, DEFAULT_START_TIME};
use crate::event::Event;
use crate::labels::{MODAL_TITLE_EDIT, MODAL_TITLE_NEW};
use crate::utils::{format_time, localize, parse_date, parse_time};

/// Scratch state of the event modal. Fields are plain input values
/// (`YYYY-MM-DD`, `HH:MM`) bound two-way to the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub editing_event_id: Option<String>,
    pub date: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub all_day: bool,
}

impl Draft {
    /// Blank draft for a new event on `date`, 09:00–10:00.
    pub fn new_event(date: NaiveDate) -> Self {
        Draft {
            editing_event_id: None,
            date: date.format("%Y-%m-%d").to_string(),
            title: String::new(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            description: String::new(),
            all_day: false,
        }
    }

    /// Draft pre-filled from a stored event, decomposed into local date and times.
    pub fn edit_event<Tz: TimeZone>(event: &Event, tz: &Tz) -> Self {
        let start = event.local_start(tz);
        let end = event.local_end(tz);

        Draft {
            editing_event_id: Some(event.id.clone()),
            date: start.date().format("%Y-%m-%d").to_string(),
            title: event.title.clone(),
            start_time: format_time(start.time()),
            end_time: format_time(end.time()),
            description: event.description.clone().unwrap_or_default(),
            all_day: event.all_day,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_event_id.is_some()
    }

    pub fn modal_title(&self) -> &'static str {
        if self.is_editing() {
            MODAL_TITLE_EDIT
        } else {
            MODAL_TITLE_NEW
        }
    }

    pub fn toggle_all_day(&mut self) {
        self.all_day = !self.all_day;
    }

    /// Start and end instants this draft describes, or `None` when the draft
    /// cannot be saved (blank title, missing or unparseable date/time).
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if self.title.trim().is_empty() || self.date.trim().is_empty() {
            return None;
        }

        let date = parse_date(&self.date)?;

        let (start, end) = if self.all_day {
            (
                NaiveTime::from_hms_opt(ALL_DAY_START.0, ALL_DAY_START.1, 0)?,
                NaiveTime::from_hms_opt(ALL_DAY_END.0, ALL_DAY_END.1, 0)?,
            )
        } else {
            (parse_time(&self.start_time)?, parse_time(&self.end_time)?)
        };

        Some((
            localize(tz, date.and_time(start)),
            localize(tz, date.and_time(end)),
        ))
    }

    fn trimmed_description(&self) -> Option<String> {
        let description = self.description.trim();
        if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        }
    }
}

/// What saving a draft did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Draft failed validation; nothing changed and the modal stays open.
    Rejected,
    Created(String),
    Updated(String),
    /// The event being edited is no longer in the collection.
    Missing(String),
}

impl SaveOutcome {
    /// Whether the modal closes after this save.
    pub fn closes_modal(&self) -> bool {
        !matches!(self, SaveOutcome::Rejected)
    }

    /// Whether the collection changed and needs persisting.
    pub fn is_mutation(&self) -> bool {
        matches!(self, SaveOutcome::Created(_) | SaveOutcome::Updated(_))
    }
}

/// Apply `draft` to `events`: update the edited event in place, or append a
/// new one with a fresh id.
pub fn commit<Tz: TimeZone>(events: &mut Vec<Event>, draft: &Draft, tz: &Tz) -> SaveOutcome {
    let Some((start, end)) = draft.resolve(tz) else {
        return SaveOutcome::Rejected;
    };

    let title = draft.title.trim().to_string();
    let description = draft.trimmed_description();

    match &draft.editing_event_id {
        Some(id) => match events.iter_mut().find(|e| &e.id == id) {
            Some(event) => {
                event.title = title;
                event.description = description;
                event.start = start;
                event.end = end;
                event.all_day = draft.all_day;
                SaveOutcome::Updated(id.clone())
            }
            None => SaveOutcome::Missing(id.clone()),
        },
        None => {
            let event = Event::new(title, description, start, end, draft.all_day);
            let id = event.id.clone();
            events.push(event);
            SaveOutcome::Created(id)
        }
    }
}

/// Remove the event `draft` is editing. Returns the removed event, or `None`
/// when the draft is for a new event or the id is unknown.
pub fn remove(events: &mut Vec<Event>, draft: &Draft) -> Option<Event> {
    let id = draft.editing_event_id.as_ref()?;
    let index = events.iter().position(|e| &e.id == id)?;
    Some(events.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};
    use chrono_tz::Europe::Berlin;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standup_draft() -> Draft {
        let mut draft = Draft::new_event(date(2024, 6, 3));
        draft.title = "Standup".to_string();
        draft.start_time = "09:00".to_string();
        draft.end_time = "09:30".to_string();
        draft
    }

    #[test]
    fn new_draft_defaults() {
        let draft = Draft::new_event(date(2024, 6, 3));
        assert_eq!(draft.date, "2024-06-03");
        assert_eq!(draft.start_time, "09:00");
        assert_eq!(draft.end_time, "10:00");
        assert!(draft.title.is_empty());
        assert!(!draft.all_day);
        assert!(!draft.is_editing());
        assert_eq!(draft.modal_title(), "Neuen Termin erstellen");
    }

    #[test]
    fn create_in_local_time() {
        let mut events = Vec::new();
        let outcome = commit(&mut events, &standup_draft(), &Berlin);

        assert!(matches!(outcome, SaveOutcome::Created(_)));
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.title, "Standup");
        assert_eq!(event.local_start(&Berlin), date(2024, 6, 3).and_hms_opt(9, 0, 0).unwrap());
        assert_eq!(event.local_end(&Berlin), date(2024, 6, 3).and_hms_opt(9, 30, 0).unwrap());
        // Berlin is UTC+2 in June
        assert_eq!(event.start.hour(), 7);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut events = Vec::new();
        let mut draft = standup_draft();
        draft.title = "   ".to_string();

        assert_eq!(commit(&mut events, &draft, &Berlin), SaveOutcome::Rejected);
        assert!(events.is_empty());
    }

    #[test]
    fn empty_date_is_rejected() {
        let mut events = Vec::new();
        let mut draft = standup_draft();
        draft.date.clear();

        assert_eq!(commit(&mut events, &draft, &Berlin), SaveOutcome::Rejected);
        assert!(!SaveOutcome::Rejected.closes_modal());
    }

    #[test]
    fn unparseable_time_is_rejected() {
        let mut events = Vec::new();
        let mut draft = standup_draft();
        draft.end_time = "later".to_string();

        assert_eq!(commit(&mut events, &draft, &Berlin), SaveOutcome::Rejected);
    }

    #[test]
    fn all_day_ignores_times() {
        let mut events = Vec::new();
        let mut draft = standup_draft();
        draft.start_time = "garbage".to_string();
        draft.toggle_all_day();

        commit(&mut events, &draft, &Berlin);
        let event = &events[0];
        assert!(event.all_day);
        assert_eq!(event.local_start(&Berlin), date(2024, 6, 3).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(event.local_end(&Berlin), date(2024, 6, 3).and_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn title_and_description_are_trimmed() {
        let mut events = Vec::new();
        let mut draft = standup_draft();
        draft.title = "  Standup  ".to_string();
        draft.description = "   ".to_string();
        commit(&mut events, &draft, &Berlin);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].description, None);

        let mut draft = standup_draft();
        draft.description = " room 4 ".to_string();
        commit(&mut events, &draft, &Berlin);
        assert_eq!(events[1].description.as_deref(), Some("room 4"));
    }

    #[test]
    fn edit_round_trips_through_draft() {
        let mut events = Vec::new();
        commit(&mut events, &standup_draft(), &Berlin);
        let original = events[0].clone();

        let draft = Draft::edit_event(&original, &Berlin);
        assert_eq!(draft.editing_event_id.as_deref(), Some(original.id.as_str()));
        assert_eq!(draft.date, "2024-06-03");
        assert_eq!(draft.start_time, "09:00");
        assert_eq!(draft.end_time, "09:30");
        assert_eq!(draft.modal_title(), "Termin bearbeiten");

        assert_eq!(
            commit(&mut events, &draft, &Berlin),
            SaveOutcome::Updated(original.id.clone())
        );
        assert_eq!(events, vec![original]);
    }

    #[test]
    fn edit_keeps_id_and_position() {
        let mut events = Vec::new();
        commit(&mut events, &standup_draft(), &Berlin);
        commit(&mut events, &standup_draft(), &Berlin);
        let id = events[0].id.clone();

        let mut draft = Draft::edit_event(&events[0], &Berlin);
        draft.title = "Retro".to_string();
        draft.end_time = "10:30".to_string();
        commit(&mut events, &draft, &Berlin);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, id);
        assert_eq!(events[0].title, "Retro");
        assert_eq!(events[0].duration(), Duration::minutes(90));
    }

    #[test]
    fn edit_of_vanished_event_changes_nothing() {
        let mut events = Vec::new();
        let mut draft = standup_draft();
        draft.editing_event_id = Some("gone".to_string());

        let outcome = commit(&mut events, &draft, &Berlin);
        assert_eq!(outcome, SaveOutcome::Missing("gone".to_string()));
        assert!(outcome.closes_modal());
        assert!(!outcome.is_mutation());
        assert!(events.is_empty());
    }

    #[test]
    fn remove_only_when_editing() {
        let mut events = Vec::new();
        commit(&mut events, &standup_draft(), &Berlin);

        assert_eq!(remove(&mut events, &standup_draft()), None);
        assert_eq!(events.len(), 1);

        let draft = Draft::edit_event(&events[0], &Berlin);
        let removed = remove(&mut events, &draft).unwrap();
        assert_eq!(removed.title, "Standup");
        assert!(events.is_empty());
    }
}
