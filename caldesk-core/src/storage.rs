//! Local key-value storage backing the event store.
//!
//! A storage profile holds string values under string keys, the same shape a
//! browser's local storage offers. `FileStore` keeps one file per key inside a
//! data directory; `MemoryStore` keeps everything in process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{CalDeskError, CalDeskResult};

pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> CalDeskResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CalDeskResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed storage: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> CalDeskResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CalDeskError::Storage(format!(
                "Could not create data directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.path_for(key);
        let temp = path.with_extension("json.tmp");

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}
