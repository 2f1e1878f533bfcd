//! Event persistence: the whole collection as one JSON blob under one key.

use tracing::{debug, warn};

use crate::constants::STORAGE_KEY;
use crate::error::CalDeskResult;
use crate::event::Event;
use crate::storage::KeyValueStore;

pub struct EventStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(storage: S) -> Self {
        EventStore { storage }
    }

    /// Read the stored collection.
    ///
    /// A missing key or a blob that does not deserialize yields an empty
    /// collection; nothing is surfaced to the user.
    pub fn load(&self) -> Vec<Event> {
        let Some(raw) = self.storage.get(STORAGE_KEY) else {
            debug!(key = STORAGE_KEY, "no stored events");
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Event>>(&raw) {
            Ok(events) => {
                debug!(key = STORAGE_KEY, count = events.len(), "loaded events");
                events
            }
            Err(err) => {
                warn!(key = STORAGE_KEY, error = %err, "ignoring malformed event snapshot");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `events`.
    pub fn save(&mut self, events: &[Event]) -> CalDeskResult<()> {
        let content = serde_json::to_string(events)?;
        self.storage.set(STORAGE_KEY, &content)?;
        debug!(key = STORAGE_KEY, count = events.len(), "saved events");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
