//! User preferences persisted in the data directory.
//!
//! Only the user's own theme choice is stored here. Dark mode forced by the
//! world pages is never written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MundosResult;

/// File name inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Persisted user preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Dark mode chosen through the theme toggle
    pub dark_mode: bool,
}

impl Preferences {
    /// Path of the preferences file for a data directory
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(PREFERENCES_FILE)
    }

    /// Read preferences, `Ok(None)` if the file does not exist yet
    pub fn try_load(data_dir: &Path) -> MundosResult<Option<Self>> {
        let path = Self::path_in(data_dir);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Read preferences, falling back to defaults on any error
    pub fn load(data_dir: &Path) -> Self {
        match Self::try_load(data_dir) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, dir = ?data_dir, "Ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    /// Write preferences, creating the data directory if needed
    pub fn save(&self, data_dir: &Path) -> MundosResult<()> {
        fs::create_dir_all(data_dir)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(Self::path_in(data_dir), json)?;
        tracing::info!(dark_mode = self.dark_mode, "Saved preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(Preferences::try_load(dir.path()).unwrap().is_none());
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("mundos");
        let prefs = Preferences { dark_mode: true };

        prefs.save(&nested).unwrap();
        assert_eq!(Preferences::load(&nested), prefs);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(Preferences::path_in(dir.path()), "{ not json").unwrap();

        assert!(Preferences::try_load(dir.path()).is_err());
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }

    #[test]
    fn unknown_and_missing_fields_tolerated() {
        let dir = TempDir::new().unwrap();
        fs::write(Preferences::path_in(dir.path()), r#"{"language":"es"}"#).unwrap();
        assert_eq!(Preferences::load(dir.path()), Preferences::default());
    }
}
