//! Drag-and-drop of event tiles onto day cells and hour slots.
//!
//! A gesture goes `Idle -> Dragging(payload) -> Idle`, either by dropping on a
//! target or by cancelling. The payload carries only the event id; the move
//! itself is computed from the stored event when the drop lands.

use chrono::{NaiveDate, NaiveTime, TimeZone, Timelike};
use std::fmt;

use crate::constants::DRAG_PAYLOAD_FORMAT;
use crate::event::Event;
use crate::utils::localize;
use crate::view;

/// Data attached to a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    format: &'static str,
    data: String,
}

impl DragPayload {
    pub fn for_event(event_id: &str) -> Self {
        DragPayload {
            format: DRAG_PAYLOAD_FORMAT,
            data: event_id.to_string(),
        }
    }

    /// Foreign payload, e.g. text dragged in from outside the widget.
    pub fn foreign(format: &'static str, data: &str) -> Self {
        DragPayload {
            format,
            data: data.to_string(),
        }
    }

    /// Data stored under `format`, if non-empty.
    pub fn get(&self, format: &str) -> Option<&str> {
        if self.format == format && !self.data.is_empty() {
            Some(&self.data)
        } else {
            None
        }
    }

    pub fn event_id(&self) -> Option<&str> {
        self.get(DRAG_PAYLOAD_FORMAT)
    }
}

/// Where a tile was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Month-grid cell: keep the time of day, change the date.
    Day(NaiveDate),
    /// Week/day hour slot: take the slot's date and hour.
    Slot { date: NaiveDate, hour: u32 },
}

impl DropTarget {
    /// Day cells always exist; a slot only within the visible hour grid.
    pub fn accepts_drop(&self) -> bool {
        match self {
            DropTarget::Day(_) => true,
            DropTarget::Slot { hour, .. } => view::hours().any(|h| h == *hour),
        }
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DropTarget::Day(date) => write!(f, "{}", date),
            DropTarget::Slot { date, hour } => write!(f, "{} {:02}:00", date, hour),
        }
    }
}

/// Affordance a target signals while a tile hovers over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Pick up a tile. Replaces any gesture already in flight.
    pub fn start(&mut self, event_id: &str) -> DragPayload {
        let payload = DragPayload::for_event(event_id);
        self.state = DragState::Dragging(payload.clone());
        payload
    }

    /// Day cells and grid slots offer a move; anything else declines.
    pub fn over(&self, target: DropTarget) -> Option<DropEffect> {
        target.accepts_drop().then_some(DropEffect::Move)
    }

    /// End the gesture on a target, yielding the payload it carried.
    pub fn release(&mut self) -> Option<DragPayload> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(payload) => Some(payload),
            DragState::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Move `event` to `date`, keeping its local hour/minute, duration and
/// all-day flag.
pub fn move_to_day<Tz: TimeZone>(event: &mut Event, date: NaiveDate, tz: &Tz) {
    let duration = event.duration();
    let old_start = event.local_start(tz);
    let time = NaiveTime::from_hms_opt(old_start.hour(), old_start.minute(), 0)
        .unwrap_or(NaiveTime::MIN);

    event.start = localize(tz, date.and_time(time));
    event.end = event.start + duration;
}

/// Move `event` to `hour`:00 on `date`, keeping its duration. The event now
/// has a specific time, so it stops being all-day. Hours outside the grid
/// leave the event untouched and return false.
pub fn move_to_slot<Tz: TimeZone>(event: &mut Event, date: NaiveDate, hour: u32, tz: &Tz) -> bool {
    if !view::hours().any(|h| h == hour) {
        return false;
    }
    let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
        return false;
    };
    let duration = event.duration();

    event.start = localize(tz, date.and_time(time));
    event.end = event.start + duration;
    event.all_day = false;
    true
}

/// Apply a drop of `event_id` on `target`. Returns false when no event has
/// that id or the target does not accept drops.
pub fn apply_drop<Tz: TimeZone>(
    events: &mut [Event],
    event_id: &str,
    target: DropTarget,
    tz: &Tz,
) -> bool {
    if !target.accepts_drop() {
        return false;
    }
    let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
        return false;
    };

    match target {
        DropTarget::Day(date) => {
            move_to_day(event, date, tz);
            true
        }
        DropTarget::Slot { date, hour } => move_to_slot(event, date, hour, tz),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use chrono_tz::Europe::Berlin;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(all_day: bool) -> Event {
        let start = localize(&Berlin, date(2024, 6, 3).and_hms_opt(14, 45, 0).unwrap());
        Event {
            id: "ev-1".to_string(),
            title: "Review".to_string(),
            description: None,
            start,
            end: start + Duration::minutes(150),
            all_day,
        }
    }

    #[test]
    fn day_drop_keeps_time_and_duration() {
        let mut event = make_event(false);
        move_to_day(&mut event, date(2024, 6, 20), &Berlin);

        assert_eq!(event.local_start(&Berlin), date(2024, 6, 20).and_hms_opt(14, 45, 0).unwrap());
        assert_eq!(event.duration(), Duration::minutes(150));
        assert!(!event.all_day);
    }

    #[test]
    fn day_drop_keeps_all_day_flag() {
        let mut event = make_event(true);
        move_to_day(&mut event, date(2024, 6, 1), &Berlin);
        assert!(event.all_day);
    }

    #[test]
    fn day_drop_across_dst_keeps_local_time() {
        // Berlin switches to winter time on 2024-10-27
        let mut event = make_event(false);
        move_to_day(&mut event, date(2024, 11, 4), &Berlin);
        assert_eq!(event.local_start(&Berlin), date(2024, 11, 4).and_hms_opt(14, 45, 0).unwrap());
        assert_eq!(event.duration(), Duration::minutes(150));
    }

    #[test]
    fn slot_drop_snaps_to_hour_and_clears_all_day() {
        let mut event = make_event(true);
        assert!(move_to_slot(&mut event, date(2024, 6, 5), 11, &Berlin));

        assert_eq!(event.local_start(&Berlin), date(2024, 6, 5).and_hms_opt(11, 0, 0).unwrap());
        assert_eq!(event.duration(), Duration::minutes(150));
        assert!(!event.all_day);
    }

    #[test]
    fn apply_drop_ignores_unknown_ids() {
        let mut events = vec![make_event(false)];
        let before = events.clone();
        assert!(!apply_drop(&mut events, "nope", DropTarget::Day(date(2024, 6, 4)), &Berlin));
        assert_eq!(events, before);
    }

    #[test]
    fn drops_outside_the_hour_grid_are_declined() {
        let session = DragSession::new();
        for hour in [3, 7, 20, 25] {
            let target = DropTarget::Slot { date: date(2024, 6, 3), hour };
            assert!(!target.accepts_drop());
            assert_eq!(session.over(target), None);

            let mut events = vec![make_event(true)];
            let before = events.clone();
            assert!(!apply_drop(&mut events, "ev-1", target, &Berlin));
            assert_eq!(events, before);
        }

        let mut event = make_event(false);
        let before = event.clone();
        assert!(!move_to_slot(&mut event, date(2024, 6, 3), 24, &Berlin));
        assert_eq!(event, before);
    }

    #[test]
    fn grid_edges_accept_drops() {
        let session = DragSession::new();
        for hour in [8, 19] {
            let target = DropTarget::Slot { date: date(2024, 6, 3), hour };
            assert_eq!(session.over(target), Some(DropEffect::Move));

            let mut events = vec![make_event(false)];
            assert!(apply_drop(&mut events, "ev-1", target, &Berlin));
            assert_eq!(events[0].local_start(&Berlin).hour(), hour);
        }
    }

    #[test]
    fn session_lifecycle() {
        let mut session = DragSession::new();
        assert_eq!(session.release(), None);

        let payload = session.start("ev-1");
        assert!(session.is_dragging());
        assert_eq!(payload.event_id(), Some("ev-1"));
        assert_eq!(session.over(DropTarget::Day(date(2024, 6, 4))), Some(DropEffect::Move));

        assert_eq!(session.release(), Some(payload));
        assert_eq!(session.state(), &DragState::Idle);

        session.start("ev-1");
        session.cancel();
        assert_eq!(session.release(), None);
    }

    #[test]
    fn foreign_or_empty_payloads_carry_no_event() {
        assert_eq!(DragPayload::foreign("text/plain", "ev-1").event_id(), None);
        assert_eq!(DragPayload::for_event("").event_id(), None);
    }
}
