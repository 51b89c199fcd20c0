//! Durable preference storage.
//!
//! `JsonFilePreferences` keeps every key in one JSON object on disk and
//! rewrites the whole file on each `set`, mirroring how page-local storage
//! survives reloads.

use crate::traits::PreferenceStore;
use crate::PageError;
use directories::ProjectDirs;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "stockfront";
const APPLICATION: &str = "stockfront";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Opens the preference file under `dir`, starting empty if it does not exist yet.
    pub fn open_in(dir: &Path) -> Result<Self, PageError> {
        let path = dir.join(PREFERENCES_FILE);
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error.into()),
        };
        Ok(Self { path, values })
    }

    /// Platform data directory for the application.
    pub fn default_dir() -> Result<PathBuf, PageError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .ok_or_else(|| PageError::StorageUnavailable("no home directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopening() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let state = dir.path().join("state");

        let mut first = JsonFilePreferences::open_in(&state)?;
        assert_eq!(first.get("darkMode")?, None);
        first.set("darkMode", "true")?;

        let reopened = JsonFilePreferences::open_in(&state)?;
        assert_eq!(reopened.get("darkMode")?.as_deref(), Some("true"));
        Ok(())
    }

    #[test]
    fn corrupt_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join(PREFERENCES_FILE), b"not json")?;
        assert!(matches!(
            JsonFilePreferences::open_in(dir.path()),
            Err(PageError::Serialization(_))
        ));
        Ok(())
    }
}
