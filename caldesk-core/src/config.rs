//! Global caldesk configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalDeskError, CalDeskResult};
use crate::storage::FileStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/caldesk";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Configuration at ~/.config/caldesk/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CalDeskConfig {
    /// Storage profile directory. Holds the event snapshot.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for CalDeskConfig {
    fn default() -> Self {
        CalDeskConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl CalDeskConfig {
    pub fn config_path() -> CalDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalDeskError::Config("Could not determine config directory".into()))?
            .join("caldesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented-out default file on first run.
    pub fn load() -> CalDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalDeskResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| CalDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalDeskError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Storage backed by this config's data directory.
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    pub fn save_to(&self, path: &Path) -> CalDeskResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalDeskError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalDeskResult<()> {
        let contents = format!(
            "\
# caldesk configuration

# Where the event snapshot is stored:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_default_uses_default_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caldesk/config.toml");

        CalDeskConfig::create_default_config(&path).unwrap();
        let config = CalDeskConfig::load_from(&path).unwrap();

        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn reads_data_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = CalDeskConfig {
            data_dir: dir.path().join("profile"),
        };
        config.save_to(&path).unwrap();

        let loaded = CalDeskConfig::load_from(&path).unwrap();
        assert_eq!(loaded.data_path(), dir.path().join("profile"));
    }

    #[test]
    fn expands_tilde() {
        if dirs::home_dir().is_none() {
            return;
        }
        let config = CalDeskConfig::default();
        assert!(!config.data_path().to_string_lossy().starts_with('~'));
    }
}
