//! The calendar controller.
//!
//! Owns the event collection, the anchor date and active view, the modal
//! draft and the drag gesture. Hosts call one method per UI callback; every
//! method that commits a change to the collection writes the snapshot before
//! returning.

use chrono::{Duration, Local, NaiveDate, TimeZone};
use tracing::{debug, warn};

use crate::dnd::{self, DragPayload, DragSession, DropEffect, DropTarget};
use crate::event::Event;
use crate::form::{self, Draft, SaveOutcome};
use crate::storage::KeyValueStore;
use crate::store::EventStore;
use crate::utils::shift_months;
use crate::view::{self, DayView, MonthView, View, WeekView};

pub struct Calendar<S: KeyValueStore, Tz: TimeZone = Local> {
    store: EventStore<S>,
    tz: Tz,
    today: NaiveDate,
    current_date: NaiveDate,
    view: View,
    events: Vec<Event>,
    draft: Option<Draft>,
    drag: DragSession,
}

/// Whichever view is currently selected, computed.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView<'a> {
    Month(MonthView<'a>),
    Week(WeekView<'a>),
    Day(DayView<'a>),
}

impl<S: KeyValueStore> Calendar<S, Local> {
    /// Open against the machine's local time zone, anchored on today.
    pub fn open_local(storage: S) -> Self {
        let today = Local::now().date_naive();
        Calendar::open(EventStore::new(storage), Local, today)
    }
}

impl<S: KeyValueStore, Tz: TimeZone> Calendar<S, Tz> {
    /// Load the stored events and start on `today` in month view.
    pub fn open(store: EventStore<S>, tz: Tz, today: NaiveDate) -> Self {
        let events = store.load();

        Calendar {
            store,
            tz,
            today,
            current_date: today,
            view: View::Month,
            events,
            draft: None,
            drag: DragSession::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn storage(&self) -> &S {
        self.store.storage()
    }

    // NAVIGATION:

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    /// Back one month, week or day depending on the active view.
    pub fn previous(&mut self) {
        self.current_date = match self.view {
            View::Month => shift_months(self.current_date, -1),
            View::Week => self.current_date - Duration::days(7),
            View::Day => self.current_date - Duration::days(1),
        };
    }

    /// Forward one month, week or day depending on the active view.
    pub fn next(&mut self) {
        self.current_date = match self.view {
            View::Month => shift_months(self.current_date, 1),
            View::Week => self.current_date + Duration::days(7),
            View::Day => self.current_date + Duration::days(1),
        };
    }

    pub fn go_to_today(&mut self) {
        self.current_date = self.today;
    }

    /// A click on a month cell: show that day.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.view = View::Day;
    }

    // VIEWS:

    pub fn month_view(&self) -> MonthView<'_> {
        view::month_view(&self.events, self.current_date, self.today, &self.tz)
    }

    pub fn week_view(&self) -> WeekView<'_> {
        view::week_view(&self.events, self.current_date, self.today, &self.tz)
    }

    pub fn day_view(&self) -> DayView<'_> {
        view::day_view(&self.events, self.current_date, self.today, &self.tz)
    }

    pub fn active_view(&self) -> ActiveView<'_> {
        match self.view {
            View::Month => ActiveView::Month(self.month_view()),
            View::Week => ActiveView::Week(self.week_view()),
            View::Day => ActiveView::Day(self.day_view()),
        }
    }

    // MODAL + DRAFT:

    pub fn is_modal_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn modal_title(&self) -> Option<&'static str> {
        self.draft.as_ref().map(Draft::modal_title)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Two-way binding for the form inputs while the modal is open.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    pub fn open_new_event(&mut self, date: NaiveDate) {
        self.draft = Some(Draft::new_event(date));
    }

    /// Open the modal on an existing event. Returns false for unknown ids.
    pub fn open_edit_event(&mut self, id: &str) -> bool {
        let draft = match self.event(id) {
            Some(event) => Draft::edit_event(event, &self.tz),
            None => return false,
        };
        self.draft = Some(draft);
        true
    }

    /// Close the modal and discard the draft.
    pub fn close_modal(&mut self) {
        self.draft = None;
    }

    /// Commit the draft. Invalid drafts leave everything, modal included,
    /// untouched.
    pub fn save_draft(&mut self) -> SaveOutcome {
        let Some(draft) = self.draft.as_ref() else {
            return SaveOutcome::Rejected;
        };

        let outcome = form::commit(&mut self.events, draft, &self.tz);
        match &outcome {
            SaveOutcome::Rejected => debug!("draft rejected"),
            SaveOutcome::Created(id) => debug!(event_id = %id, "event created"),
            SaveOutcome::Updated(id) => debug!(event_id = %id, "event updated"),
            SaveOutcome::Missing(id) => warn!(event_id = %id, "edited event no longer exists"),
        }

        if outcome.is_mutation() {
            self.persist();
        }
        if outcome.closes_modal() {
            self.close_modal();
        }
        outcome
    }

    /// Delete the event being edited and close the modal. With no event
    /// being edited only the modal closes.
    pub fn delete_editing_event(&mut self) -> Option<Event> {
        let removed = self
            .draft
            .as_ref()
            .and_then(|draft| form::remove(&mut self.events, draft));

        if let Some(event) = &removed {
            debug!(event_id = %event.id, "event deleted");
            self.persist();
        }
        self.close_modal();
        removed
    }

    // DRAG AND DROP:

    pub fn drag_start(&mut self, event_id: &str) -> DragPayload {
        self.drag.start(event_id)
    }

    /// The effect `target` offers the hovering tile, `None` if it declines.
    pub fn drag_over(&self, target: DropTarget) -> Option<DropEffect> {
        self.drag.over(target)
    }

    pub fn drag_cancel(&mut self) {
        self.drag.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Drop the tile currently being dragged. Returns whether an event moved.
    pub fn drop_on(&mut self, target: DropTarget) -> bool {
        match self.drag.release() {
            Some(payload) => self.drop_payload(target, &payload),
            None => false,
        }
    }

    /// Drop a gesture payload on `target`. Payloads without an event id
    /// (e.g. dragged in from elsewhere) and unknown ids are ignored.
    pub fn drop_payload(&mut self, target: DropTarget, payload: &DragPayload) -> bool {
        let Some(event_id) = payload.event_id() else {
            debug!(%target, "drop without event id ignored");
            return false;
        };

        if !target.accepts_drop() {
            debug!(%target, event_id, "drop outside the hour grid ignored");
            return false;
        }

        if !dnd::apply_drop(&mut self.events, event_id, target, &self.tz) {
            debug!(%target, event_id, "drop of unknown event ignored");
            return false;
        }

        debug!(%target, event_id, "event moved");
        self.persist();
        true
    }

    pub fn drop_on_day(&mut self, date: NaiveDate) -> bool {
        self.drop_on(DropTarget::Day(date))
    }

    pub fn drop_on_slot(&mut self, date: NaiveDate, hour: u32) -> bool {
        self.drop_on(DropTarget::Slot { date, hour })
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.events) {
            warn!(error = %err, "could not persist events");
        }
    }
}
