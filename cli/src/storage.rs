use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kaboom_core::{Settings, Statistics};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const APP_FOLDER: &str = "kaboom";
const SETTINGS_FILE: &str = "settings.json";
const STATISTICS_FILE: &str = "statistics.json";

/// JSON files in a per-user data folder. Missing or unreadable files load as defaults.
#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `<data dir>/kaboom`, falling back to the working directory.
    pub fn default_dir() -> PathBuf {
        dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_FOLDER)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_settings(&self) -> Settings {
        self.load(SETTINGS_FILE)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.save(SETTINGS_FILE, settings)
    }

    pub fn load_statistics(&self) -> Statistics {
        self.load(STATISTICS_FILE)
    }

    pub fn save_statistics(&self, statistics: &Statistics) -> Result<()> {
        self.save(STATISTICS_FILE, statistics)
    }

    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let path = self.dir.join(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                return T::default();
            }
            Err(err) => {
                log::warn!("Could not read {}: {}", path.display(), err);
                return T::default();
            }
        };
        serde_json::from_str(&text).unwrap_or_else(|err| {
            log::warn!("Ignoring corrupt {}: {}", path.display(), err);
            T::default()
        })
    }

    fn save<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Could not create {}", self.dir.display()))?;
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).with_context(|| format!("Could not write {}", path.display()))?;
        log::debug!("Saved {}", path.display());
        Ok(())
    }
}
