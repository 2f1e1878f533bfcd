//! Fixed values shared by the store, views and form.

/// Storage key holding the serialized event collection.
pub const STORAGE_KEY: &str = "calendar-events-v1";

/// First hour shown in the week and day grids.
pub const FIRST_HOUR: u32 = 8;

/// Number of hour slots in the week and day grids (08:00 through 19:00).
pub const HOUR_SLOTS: u32 = 12;

/// Events listed per month cell before the rest collapse into an overflow count.
pub const MONTH_CELL_EVENT_LIMIT: usize = 3;

/// Default start time of a new draft.
pub const DEFAULT_START_TIME: &str = "09:00";

/// Default end time of a new draft.
pub const DEFAULT_END_TIME: &str = "10:00";

/// Local time-of-day bounds an all-day event is normalized to.
pub const ALL_DAY_START: (u32, u32) = (0, 0);
pub const ALL_DAY_END: (u32, u32) = (23, 59);

/// Payload format an event id travels under during a drag gesture.
pub const DRAG_PAYLOAD_FORMAT: &str = "text/event-id";
