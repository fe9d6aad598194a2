//! Config store: loads and persists the config document as a single
//! pretty-printed JSON file at a fixed per-user location.
//!
//! Loading never fails: an absent or unparsable file yields the default
//! document. Saving merges a partial update into the held document and
//! overwrites the whole file (last-writer-wins, no locking).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::{CONFIG_DIR_ENV, CONFIG_FILE_NAME};
use crate::error::ConfigError;
use crate::project::{AppConfig, ConfigPatch};

pub(crate) struct ConfigStore {
    path: PathBuf,
    current: AppConfig,
}

impl ConfigStore {
    pub(crate) fn new() -> Self {
        Self::at(default_config_path())
    }

    /// Use an explicit file location instead of the per-user default
    pub(crate) fn at(path: PathBuf) -> Self {
        Self {
            path,
            current: AppConfig::default(),
        }
    }

    /// Re-read the document from disk, replacing the held copy
    pub(crate) fn load(&mut self) -> &AppConfig {
        self.current = read_config(&self.path);
        &self.current
    }

    /// Merge the fields present in `patch` into the held document and
    /// write the full result back, creating the config directory if it
    /// does not exist yet.
    pub(crate) fn save(&mut self, patch: ConfigPatch) -> Result<(), ConfigError> {
        if let Some(projects) = patch.projects {
            self.current.projects = projects;
        }
        if let Some(layout_mode) = patch.layout_mode {
            self.current.layout_mode = layout_mode;
        }

        if let Some(dir) = self.path.parent()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                dir: dir.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&self.current)?;
        fs::write(&self.path, json).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

fn read_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

fn default_config_path() -> PathBuf {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return PathBuf::from(dir).join(CONFIG_FILE_NAME);
    }
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("gitmate").join(CONFIG_FILE_NAME);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gitmate")
        .join(CONFIG_FILE_NAME)
}
